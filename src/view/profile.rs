use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use std::cell::{Cell, RefCell};

use crate::api::models::{ImagePayload, ProfileImageUpdate, RecordId, UserProfile};
use crate::api::UserApi;
use crate::error::ActionError;
use crate::gateway::{Gateway, Prompter};
use crate::role::RoleGate;
use crate::view::{LoadState, MountScope, Outcome};

/// Profile picture editor for one user. Only the gate's role may submit.
pub struct ProfilePictureView<A, P> {
    user_id: RecordId,
    api: A,
    gateway: Gateway<P>,
    role: Option<String>,
    gate: RoleGate,
    load: Cell<LoadState>,
    user: RefCell<Option<UserProfile>>,
    selected: RefCell<Option<ImagePayload>>,
    submitting: Cell<bool>,
    scope: MountScope,
}

impl<A: UserApi, P: Prompter> ProfilePictureView<A, P> {
    /// `role` is the already unsealed role of the operator, if any.
    pub fn new(user_id: RecordId, api: A, gateway: Gateway<P>, role: Option<String>) -> Self {
        Self {
            user_id,
            api,
            gateway,
            role,
            gate: RoleGate::default(),
            load: Cell::new(LoadState::Idle),
            user: RefCell::new(None),
            selected: RefCell::new(None),
            submitting: Cell::new(false),
            scope: MountScope::new(),
        }
    }

    pub fn with_gate(mut self, gate: RoleGate) -> Self {
        self.gate = gate;
        self
    }

    pub async fn mount(&self) -> Result<Outcome, ActionError> {
        self.reload().await
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    pub async fn reload(&self) -> Result<Outcome, ActionError> {
        self.load.set(LoadState::Loading);
        let Some(result) = self.scope.guard(self.api.get_user(&self.user_id)).await else {
            return Ok(Outcome::Unmounted);
        };
        match result {
            Ok(user) => {
                *self.user.borrow_mut() = Some(user);
                self.load.set(LoadState::Loaded);
                Ok(Outcome::Done)
            }
            Err(err) => {
                log::error!("error fetching user {}: {}", self.user_id, err);
                self.load.set(LoadState::Failed);
                self.gateway.fetch_failed();
                Err(err.into())
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load.get()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.user.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn select_image(&self, image: ImagePayload) {
        *self.selected.borrow_mut() = Some(image);
    }

    pub fn clear_image(&self) {
        self.selected.borrow_mut().take();
    }

    pub fn selected_image(&self) -> Option<ImagePayload> {
        self.selected.borrow().clone()
    }

    /// `data:` URL of the selected file for the preview.
    pub fn preview_data_url(&self) -> Option<String> {
        self.selected
            .borrow()
            .as_ref()
            .map(|img| format!("data:{};base64,{}", img.mime, B64.encode(&img.bytes)))
    }

    fn validate(&self) -> Result<ImagePayload, ActionError> {
        match self.selected.borrow().as_ref() {
            Some(img) if !img.bytes.is_empty() => Ok(img.clone()),
            _ => Err(ActionError::Validation("no image selected".into())),
        }
    }

    /// Validate, confirm, check the role, then upload. Nothing reaches the
    /// network unless all three pass. While one submission is running, further
    /// calls return [`Outcome::Busy`].
    pub async fn submit(&self) -> Result<Outcome, ActionError> {
        if self.submitting.get() {
            return Ok(Outcome::Busy);
        }
        let messages = self.gateway.messages();
        let image = match self.validate() {
            Ok(image) => image,
            Err(err) => {
                self.gateway.error(messages.error_title, Some(messages.image_required));
                return Err(err);
            }
        };

        self.submitting.set(true);
        let outcome = self.confirm_and_upload(image).await;
        self.submitting.set(false);
        outcome
    }

    async fn confirm_and_upload(&self, image: ImagePayload) -> Result<Outcome, ActionError> {
        let messages = self.gateway.messages();
        if !self.gateway.confirm(messages.update_confirm_title, None).await {
            return Ok(Outcome::Declined);
        }

        if !self.gate.allows(self.role.as_deref()) {
            log::warn!("profile image update for {} refused: role not permitted", self.user_id);
            self.gateway.error(messages.not_authorized, None);
            return Err(ActionError::Authorization("role not permitted".into()));
        }

        let old_image = self
            .user
            .borrow()
            .as_ref()
            .and_then(|u| u.profile.clone())
            .unwrap_or_default();
        let update = ProfileImageUpdate { image, old_image };

        let Some(result) = self
            .scope
            .guard(self.api.update_user_image(&self.user_id, update))
            .await
        else {
            return Ok(Outcome::Unmounted);
        };

        match result {
            Ok(()) => {
                log::info!("profile image of {} replaced", self.user_id);
                self.gateway.success(messages.updated_title, None);
                self.clear_image();
                match self.reload().await {
                    Ok(outcome) => Ok(outcome),
                    Err(_) => Ok(Outcome::Done),
                }
            }
            Err(err) => {
                log::error!("error saving profile image of {}: {}", self.user_id, err);
                let err = ActionError::from(err);
                match &err {
                    ActionError::Authorization(_) => self.gateway.error(messages.not_authorized, None),
                    _ => self.gateway.error(messages.update_failed_title, Some(messages.save_failed)),
                }
                Err(err)
            }
        }
    }
}
