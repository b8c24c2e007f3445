use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use std::rc::Rc;

use crate::api::{ApiClient, BannerApi, RuntimeBound};
use crate::app::AppState;
use crate::ui::padded_box;

/// Asks for the API URL and token, checks them against the banner list and stores them.
pub fn show_login_window(app: &Application) {
    let current = AppState::load();
    let messages = current.locale.messages();

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title(messages.login_title)
        .default_width(420)
        .resizable(false)
        .build();
    let overlay = adw::ToastOverlay::new();
    let form = padded_box(gtk::Orientation::Vertical, 8, 24);

    let url_entry = gtk::Entry::new();
    url_entry.set_placeholder_text(Some(messages.api_url));
    url_entry.set_text(&current.base_url);
    let token_entry = gtk::PasswordEntry::new();
    token_entry.set_placeholder_text(Some(messages.access_token));
    token_entry.set_text(current.token.as_deref().unwrap_or_default());
    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    let connect = gtk::Button::with_label(messages.connect);
    connect.add_css_class("suggested-action");
    connect.set_halign(gtk::Align::End);
    for widget in [url_entry.upcast_ref::<gtk::Widget>(), token_entry.upcast_ref(), status.upcast_ref(), connect.upcast_ref()] {
        form.append(widget);
    }

    let page = gtk::Box::new(gtk::Orientation::Vertical, 0);
    page.append(&adw::HeaderBar::new());
    overlay.set_child(Some(&form));
    page.append(&overlay);
    window.set_content(Some(&page));

    let submit: Rc<dyn Fn()> = {
        let app = app.clone();
        let window = window.clone();
        let url_entry = url_entry.clone();
        let token_entry = token_entry.clone();
        Rc::new(move || {
            let url = crate::utils::normalize_url(&url_entry.text());
            if url.is_empty() {
                overlay.add_toast(adw::Toast::new(messages.url_required));
                return;
            }
            let token = token_entry.text().to_string();
            let client = match ApiClient::new(&url, Some(token.clone())) {
                Ok(client) => RuntimeBound(client),
                Err(e) => {
                    overlay.add_toast(adw::Toast::new(&format!("{}: {}", messages.invalid_url, e)));
                    return;
                }
            };
            status.set_label(messages.connecting);

            let (app, window, overlay, status) = (app.clone(), window.clone(), overlay.clone(), status.clone());
            crate::utils::spawn_local(async move {
                // An unreachable server does not block saving.
                match client.list_banners().await {
                    Ok(_) => status.set_label(messages.connected),
                    Err(e) => {
                        log::warn!("server check failed: {}", e);
                        status.set_label(messages.saved_unverified);
                    }
                }
                let mut state = AppState::load();
                state.base_url = url;
                state.token = Some(token).filter(|t| !t.is_empty());
                if let Err(e) = state.save() {
                    log::error!("cannot save settings: {}", e);
                    overlay.add_toast(adw::Toast::new(&format!("{}: {}", messages.settings_save_failed, e)));
                    return;
                }
                crate::ui::main_window::show_main_window(&app, state);
                window.close();
            });
        })
    };

    let on_click = submit.clone();
    connect.connect_clicked(move |_| on_click());
    let on_url = submit.clone();
    url_entry.connect_activate(move |_| on_url());
    token_entry.connect_activate(move |_| submit());

    window.present();
}
