use chrono::{FixedOffset, NaiveDate};
use std::cell::{Cell, RefCell};

use crate::api::models::{Contact, RecordId};
use crate::api::ContactApi;
use crate::error::ActionError;
use crate::filter::{filter_by_created, DateRange};
use crate::gateway::{Gateway, Prompter};
use crate::view::render::{contact_rows, present, ContactRow, ListScreen, CONTACT_SKELETONS};
use crate::view::{ListModel, LoadState, MountScope, Outcome};

/// Read-only snapshot of a contact submission shown in the detail dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetail {
    id: RecordId,
    name: String,
    phone_number: String,
    email: String,
    comment: String,
}

impl ContactDetail {
    fn of(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            phone_number: contact.phone_number.clone(),
            email: contact.email.clone(),
            comment: contact.comment.clone(),
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Contact submissions table: read and delete, filtered by whole days.
pub struct ContactView<A, P> {
    api: A,
    gateway: Gateway<P>,
    list: ListModel<Contact>,
    range: Cell<Option<DateRange>>,
    detail: RefCell<Option<ContactDetail>>,
    scope: MountScope,
    offset: FixedOffset,
}

impl<A: ContactApi, P: Prompter> ContactView<A, P> {
    pub fn new(api: A, gateway: Gateway<P>, offset: FixedOffset) -> Self {
        Self {
            api,
            gateway,
            list: ListModel::new(),
            range: Cell::new(None),
            detail: RefCell::new(None),
            scope: MountScope::new(),
            offset,
        }
    }

    pub async fn mount(&self) -> Result<Outcome, ActionError> {
        self.reload().await
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    pub async fn reload(&self) -> Result<Outcome, ActionError> {
        self.list.begin_load();
        let Some(result) = self.scope.guard(self.api.list_contacts()).await else {
            return Ok(Outcome::Unmounted);
        };
        match result {
            Ok(contacts) => {
                log::info!("loaded {} contacts", contacts.len());
                self.list.replace(contacts);
                Ok(Outcome::Done)
            }
            Err(err) => {
                log::error!("error fetching contacts: {}", err);
                self.list.fail();
                self.gateway.fetch_failed();
                Err(err.into())
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.list.load_state()
    }

    pub fn records(&self) -> Vec<Contact> {
        self.list.records()
    }

    /// Both days must be picked; otherwise the filter is cleared.
    pub fn set_day_range(&self, first: Option<NaiveDate>, last: Option<NaiveDate>) {
        self.range.set(DateRange::from_picked_days(first, last, self.offset));
    }

    pub fn filtered(&self) -> Vec<Contact> {
        filter_by_created(&self.list.records(), self.range.get().as_ref())
    }

    pub fn screen(&self) -> ListScreen<ContactRow> {
        let rows = contact_rows(&self.filtered());
        let messages = self.gateway.messages();
        present(self.load_state(), rows, CONTACT_SKELETONS, messages.empty_contacts, messages)
    }

    pub fn show_detail(&self, id: &RecordId) -> Option<ContactDetail> {
        let detail = self.list.find(|c| &c.id == id).map(|c| ContactDetail::of(&c));
        *self.detail.borrow_mut() = detail.clone();
        detail
    }

    pub fn detail(&self) -> Option<ContactDetail> {
        self.detail.borrow().clone()
    }

    pub fn close_detail(&self) {
        self.detail.borrow_mut().take();
    }

    pub async fn delete(&self, id: &RecordId) -> Result<Outcome, ActionError> {
        if !self.gateway.confirm_delete().await {
            return Ok(Outcome::Declined);
        }
        let Some(result) = self.scope.guard(self.api.delete_contact(id)).await else {
            return Ok(Outcome::Unmounted);
        };
        let messages = self.gateway.messages();
        match result {
            Ok(()) => {
                log::info!("contact {} deleted", id);
                self.gateway.success(messages.deleted_title, Some(messages.deleted_text));
                if self.detail.borrow().as_ref().is_some_and(|d| &d.id == id) {
                    self.close_detail();
                }
                // A failed re-fetch has already been reported on its own.
                match self.reload().await {
                    Ok(outcome) => Ok(outcome),
                    Err(_) => Ok(Outcome::Done),
                }
            }
            Err(err) => {
                log::error!("error deleting contact {}: {}", id, err);
                self.gateway.error(messages.error_title, Some(messages.delete_failed));
                Err(err.into())
            }
        }
    }
}
