#![allow(dead_code)]

use async_trait::async_trait;
use broker_admin::api::models::{Banner, BannerPatch, Contact, ProfileImageUpdate, RecordId, UserProfile};
use broker_admin::api::{ApiError, BannerApi, ContactApi, UserApi};
use broker_admin::gateway::{Confirmation, Gateway, Notice, NoticeKind, Prompter};
use broker_admin::locale::Locale;
use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListBanners,
    UpdateBanner(String, bool),
    DeleteBanner(String),
    ListContacts,
    DeleteContact(String),
    GetUser(String),
    UpdateImage(String, String, String),
}

/// What the next call of a kind should do.
#[derive(Debug, Clone)]
pub enum Fail {
    Never,
    Always(u16),
}

struct Inner<T> {
    records: Mutex<Vec<T>>,
    calls: Mutex<Vec<Call>>,
    fail_list: Mutex<Fail>,
    fail_mutation: Mutex<Fail>,
    hold_list: Mutex<Option<Arc<Notify>>>,
    hold_mutation: Mutex<Option<Arc<Notify>>>,
}

impl<T> Inner<T> {
    fn new(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            calls: Mutex::new(Vec::new()),
            fail_list: Mutex::new(Fail::Never),
            fail_mutation: Mutex::new(Fail::Never),
            hold_list: Mutex::new(None),
            hold_mutation: Mutex::new(None),
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(fail: &Mutex<Fail>) -> Result<(), ApiError> {
        match *fail.lock().unwrap() {
            Fail::Never => Ok(()),
            Fail::Always(status) => Err(ApiError::from_status(status, "fake failure".into())),
        }
    }

    async fn wait_if_held(hold: &Mutex<Option<Arc<Notify>>>) {
        let hold = hold.lock().unwrap().clone();
        if let Some(notify) = hold {
            notify.notified().await;
        }
    }
}

/// In-memory remote that records every call.
pub struct Fake<T>(Arc<Inner<T>>);

impl<T> Clone for Fake<T> {
    fn clone(&self) -> Self {
        Fake(self.0.clone())
    }
}

impl<T: Clone> Fake<T> {
    pub fn new(records: Vec<T>) -> Self {
        Fake(Arc::new(Inner::new(records)))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.calls.lock().unwrap().clone()
    }

    pub fn fail_list(&self, fail: Fail) {
        *self.0.fail_list.lock().unwrap() = fail;
    }

    pub fn fail_mutations(&self, fail: Fail) {
        *self.0.fail_mutation.lock().unwrap() = fail;
    }

    /// Makes list calls wait on `notify` before answering.
    pub fn hold_list(&self, notify: Arc<Notify>) {
        *self.0.hold_list.lock().unwrap() = Some(notify);
    }

    /// Makes mutating calls wait on `notify` before answering.
    pub fn hold_mutations(&self, notify: Arc<Notify>) {
        *self.0.hold_mutation.lock().unwrap() = Some(notify);
    }

    pub fn records(&self) -> Vec<T> {
        self.0.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl BannerApi for Fake<Banner> {
    async fn list_banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.0.record(Call::ListBanners);
        Inner::<Banner>::wait_if_held(&self.0.hold_list).await;
        Inner::<Banner>::check(&self.0.fail_list)?;
        Ok(self.records())
    }

    async fn update_banner(&self, id: &RecordId, patch: BannerPatch) -> Result<(), ApiError> {
        self.0.record(Call::UpdateBanner(id.to_string(), patch.is_published));
        Inner::<Banner>::wait_if_held(&self.0.hold_mutation).await;
        Inner::<Banner>::check(&self.0.fail_mutation)?;
        for banner in self.0.records.lock().unwrap().iter_mut() {
            if &banner.id == id {
                banner.is_published = patch.is_published;
            }
        }
        Ok(())
    }

    async fn delete_banner(&self, id: &RecordId) -> Result<(), ApiError> {
        self.0.record(Call::DeleteBanner(id.to_string()));
        Inner::<Banner>::wait_if_held(&self.0.hold_mutation).await;
        Inner::<Banner>::check(&self.0.fail_mutation)?;
        self.0.records.lock().unwrap().retain(|b| &b.id != id);
        Ok(())
    }
}

#[async_trait]
impl ContactApi for Fake<Contact> {
    async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.0.record(Call::ListContacts);
        Inner::<Contact>::wait_if_held(&self.0.hold_list).await;
        Inner::<Contact>::check(&self.0.fail_list)?;
        Ok(self.records())
    }

    async fn delete_contact(&self, id: &RecordId) -> Result<(), ApiError> {
        self.0.record(Call::DeleteContact(id.to_string()));
        Inner::<Contact>::wait_if_held(&self.0.hold_mutation).await;
        Inner::<Contact>::check(&self.0.fail_mutation)?;
        self.0.records.lock().unwrap().retain(|c| &c.id != id);
        Ok(())
    }
}

#[async_trait]
impl UserApi for Fake<UserProfile> {
    async fn get_user(&self, id: &RecordId) -> Result<UserProfile, ApiError> {
        self.0.record(Call::GetUser(id.to_string()));
        Inner::<UserProfile>::wait_if_held(&self.0.hold_list).await;
        Inner::<UserProfile>::check(&self.0.fail_list)?;
        self.records()
            .into_iter()
            .find(|u| &u.id == id)
            .ok_or(ApiError::Status { status: 404, body: "no such user".into() })
    }

    async fn update_user_image(&self, id: &RecordId, update: ProfileImageUpdate) -> Result<(), ApiError> {
        self.0.record(Call::UpdateImage(
            id.to_string(),
            update.image.file_name.clone(),
            update.old_image.clone(),
        ));
        Inner::<UserProfile>::wait_if_held(&self.0.hold_mutation).await;
        Inner::<UserProfile>::check(&self.0.fail_mutation)?;
        for user in self.0.records.lock().unwrap().iter_mut() {
            if &user.id == id {
                user.profile = Some(update.image.file_name.clone());
            }
        }
        Ok(())
    }
}

struct PrompterState {
    answers: VecDeque<bool>,
    asked: Vec<Confirmation>,
    notices: Vec<Notice>,
}

/// Answers confirmations from a script (yes once the script runs out) and keeps every notice.
#[derive(Clone)]
pub struct ScriptedPrompter(Rc<RefCell<PrompterState>>);

impl ScriptedPrompter {
    pub fn new(answers: &[bool]) -> Self {
        ScriptedPrompter(Rc::new(RefCell::new(PrompterState {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
            notices: Vec::new(),
        })))
    }

    pub fn accepting() -> Self {
        Self::new(&[])
    }

    pub fn asked(&self) -> Vec<Confirmation> {
        self.0.borrow().asked.clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.0.borrow().notices.clone()
    }

    pub fn errors(&self) -> Vec<Notice> {
        self.notices().into_iter().filter(|n| n.kind == NoticeKind::Error).collect()
    }

    pub fn successes(&self) -> Vec<Notice> {
        self.notices().into_iter().filter(|n| n.kind == NoticeKind::Success).collect()
    }
}

#[async_trait(?Send)]
impl Prompter for ScriptedPrompter {
    async fn confirm(&self, request: &Confirmation) -> bool {
        let mut state = self.0.borrow_mut();
        state.asked.push(request.clone());
        state.answers.pop_front().unwrap_or(true)
    }

    fn notify(&self, notice: Notice) {
        self.0.borrow_mut().notices.push(notice);
    }
}

pub fn gateway(prompter: &ScriptedPrompter) -> Gateway<ScriptedPrompter> {
    Gateway::new(prompter.clone(), Locale::English.messages())
}

pub fn at(day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, min, sec).unwrap()
}

pub fn banner(id: i64, created_at: DateTime<Utc>) -> Banner {
    Banner {
        id: RecordId::from(id),
        title: format!("Banner {id}"),
        detail: "detail".into(),
        image: format!("banner-{id}.png"),
        is_published: false,
        created_at,
    }
}

pub fn contact(id: i64, created_at: DateTime<Utc>) -> Contact {
    Contact {
        id: RecordId::from(id),
        name: format!("Contact {id}"),
        phone_number: format!("020 555 {id:04}"),
        email: format!("c{id}@example.com"),
        comment: "call me back".into(),
        created_at,
    }
}

pub fn user(id: i64, profile: Option<&str>) -> UserProfile {
    UserProfile {
        id: RecordId::from(id),
        name: format!("User {id}"),
        profile: profile.map(str::to_string),
    }
}
