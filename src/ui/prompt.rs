use adw::prelude::*;
use async_trait::async_trait;
use std::cell::RefCell;

use crate::gateway::{Confirmation, Notice, NoticeKind, Prompter};

const CONFIRM: &str = "confirm";
const CANCEL: &str = "cancel";

/// Confirmations as message dialogs, notices as toasts.
#[derive(Clone)]
pub struct GtkPrompter {
    window: gtk4::Window,
    overlay: adw::ToastOverlay,
}

impl GtkPrompter {
    pub fn new(window: &impl IsA<gtk4::Window>, overlay: &adw::ToastOverlay) -> Self {
        Self {
            window: window.clone().upcast(),
            overlay: overlay.clone(),
        }
    }
}

#[async_trait(?Send)]
impl Prompter for GtkPrompter {
    async fn confirm(&self, request: &Confirmation) -> bool {
        let dialog = adw::MessageDialog::new(Some(&self.window), Some(&request.title), request.text.as_deref());
        dialog.add_response(CANCEL, &request.cancel_label);
        dialog.add_response(CONFIRM, &request.confirm_label);
        dialog.set_response_appearance(CONFIRM, adw::ResponseAppearance::Destructive);
        dialog.set_default_response(Some(CANCEL));
        dialog.set_close_response(CANCEL);

        let (tx, rx) = tokio::sync::oneshot::channel::<bool>();
        let tx = RefCell::new(Some(tx));
        dialog.connect_response(None, move |_, response| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(response == CONFIRM);
            }
        });
        dialog.present();
        rx.await.unwrap_or(false)
    }

    fn notify(&self, notice: Notice) {
        let text = match &notice.text {
            Some(text) => format!("{}: {}", notice.title, text),
            None => notice.title.clone(),
        };
        let toast = adw::Toast::new(&text);
        if notice.kind == NoticeKind::Error {
            toast.set_priority(adw::ToastPriority::High);
        }
        self.overlay.add_toast(toast);
    }
}
