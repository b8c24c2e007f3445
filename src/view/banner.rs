use chrono::FixedOffset;
use std::cell::Cell;

use crate::api::models::{Banner, BannerPatch, RecordId};
use crate::api::BannerApi;
use crate::error::ActionError;
use crate::filter::{filter_by_created, DateRange};
use crate::gateway::{Gateway, Prompter};
use crate::view::render::{present, BannerCard, ListScreen, BANNER_SKELETONS};
use crate::view::{ListModel, LoadState, MountScope, Outcome};

/// Banner grid: publish toggle and delete, filtered by an open date interval.
pub struct BannerListView<A, P> {
    api: A,
    gateway: Gateway<P>,
    list: ListModel<Banner>,
    range: Cell<Option<DateRange>>,
    scope: MountScope,
    asset_base: String,
    offset: FixedOffset,
}

impl<A: BannerApi, P: Prompter> BannerListView<A, P> {
    pub fn new(api: A, gateway: Gateway<P>, asset_base: impl Into<String>, offset: FixedOffset) -> Self {
        Self {
            api,
            gateway,
            list: ListModel::new(),
            range: Cell::new(None),
            scope: MountScope::new(),
            asset_base: asset_base.into(),
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
        let Some(result) = self.scope.guard(self.api.list_banners()).await else {
            return Ok(Outcome::Unmounted);
        };
        match result {
            Ok(banners) => {
                log::info!("loaded {} banners", banners.len());
                self.list.replace(banners);
                Ok(Outcome::Done)
            }
            Err(err) => {
                log::error!("error fetching banners: {}", err);
                self.list.fail();
                self.gateway.fetch_failed();
                Err(err.into())
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.list.load_state()
    }

    pub fn records(&self) -> Vec<Banner> {
        self.list.records()
    }

    pub fn set_date_range(&self, range: Option<DateRange>) {
        self.range.set(range);
    }

    pub fn filtered(&self) -> Vec<Banner> {
        filter_by_created(&self.list.records(), self.range.get().as_ref())
    }

    pub fn screen(&self) -> ListScreen<BannerCard> {
        let cards = self
            .filtered()
            .iter()
            .map(|b| BannerCard::from_banner(b, &self.asset_base, self.offset))
            .collect();
        let messages = self.gateway.messages();
        present(self.load_state(), cards, BANNER_SKELETONS, messages.empty_banners, messages)
    }

    /// Publish switch. Not confirmed; a success triggers a full re-fetch.
    pub async fn toggle_publish(&self, id: &RecordId, published: bool) -> Result<Outcome, ActionError> {
        let patch = BannerPatch { is_published: published };
        let Some(result) = self.scope.guard(self.api.update_banner(id, patch)).await else {
            return Ok(Outcome::Unmounted);
        };
        let messages = self.gateway.messages();
        match result {
            Ok(()) => {
                log::info!("banner {} published={}", id, published);
                self.gateway.success(messages.saved_title, Some(messages.saved_text));
                self.refetch_after_mutation().await
            }
            Err(err) => {
                log::error!("error updating banner {}: {}", id, err);
                self.gateway.error(messages.error_title, Some(messages.save_failed));
                Err(err.into())
            }
        }
    }

    pub async fn delete(&self, id: &RecordId) -> Result<Outcome, ActionError> {
        if !self.gateway.confirm_delete().await {
            return Ok(Outcome::Declined);
        }
        let Some(result) = self.scope.guard(self.api.delete_banner(id)).await else {
            return Ok(Outcome::Unmounted);
        };
        let messages = self.gateway.messages();
        match result {
            Ok(()) => {
                log::info!("banner {} deleted", id);
                self.gateway.success(messages.deleted_title, Some(messages.deleted_text));
                self.refetch_after_mutation().await
            }
            Err(err) => {
                log::error!("error deleting banner {}: {}", id, err);
                self.gateway.error(messages.error_title, Some(messages.delete_failed));
                Err(err.into())
            }
        }
    }

    /// The mutation already succeeded, so a failed re-fetch is reported by the
    /// fetch itself and does not turn the action into a failure.
    async fn refetch_after_mutation(&self) -> Result<Outcome, ActionError> {
        match self.reload().await {
            Ok(outcome) => Ok(outcome),
            Err(_) => Ok(Outcome::Done),
        }
    }
}
