//! Confirmation prompts and outcome notices around operator actions.

use async_trait::async_trait;

use crate::locale::Messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub text: Option<String>,
    pub confirm_label: String,
    pub cancel_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: Option<String>,
}

/// Surface that asks the operator and shows results. Lives on the UI thread.
#[async_trait(?Send)]
pub trait Prompter {
    /// Resolves to `true` only for the affirmative answer.
    async fn confirm(&self, request: &Confirmation) -> bool;
    fn notify(&self, notice: Notice);
}

pub struct Gateway<P> {
    prompter: P,
    messages: &'static Messages,
}

impl<P: Prompter> Gateway<P> {
    pub fn new(prompter: P, messages: &'static Messages) -> Self {
        Self { prompter, messages }
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub async fn confirm(&self, title: &str, text: Option<&str>) -> bool {
        let request = Confirmation {
            title: title.to_string(),
            text: text.map(str::to_string),
            confirm_label: self.messages.confirm.to_string(),
            cancel_label: self.messages.cancel.to_string(),
        };
        self.prompter.confirm(&request).await
    }

    pub async fn confirm_delete(&self) -> bool {
        self.confirm(self.messages.delete_confirm_title, Some(self.messages.delete_confirm_text))
            .await
    }

    pub fn success(&self, title: &str, text: Option<&str>) {
        self.prompter.notify(Notice {
            kind: NoticeKind::Success,
            title: title.to_string(),
            text: text.map(str::to_string),
        });
    }

    pub fn error(&self, title: &str, text: Option<&str>) {
        self.prompter.notify(Notice {
            kind: NoticeKind::Error,
            title: title.to_string(),
            text: text.map(str::to_string),
        });
    }

    pub fn fetch_failed(&self) {
        self.error(self.messages.error_title, Some(self.messages.fetch_failed));
    }
}
