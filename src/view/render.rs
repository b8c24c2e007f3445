//! What a list screen should draw, independent of the widget toolkit.

use chrono::{DateTime, FixedOffset, Utc};

use crate::api::models::{Banner, Contact, RecordId};
use crate::locale::Messages;
use crate::view::LoadState;

pub const BANNER_SKELETONS: usize = 4;
pub const CONTACT_SKELETONS: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum ListBody<R> {
    Skeleton { placeholders: usize },
    Empty { message: &'static str },
    Rows(Vec<R>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListScreen<R> {
    pub total_label: String,
    pub body: ListBody<R>,
}

impl<R> ListScreen<R> {
    pub fn shows_skeleton(&self) -> bool {
        matches!(self.body, ListBody::Skeleton { .. })
    }

    pub fn rows(&self) -> &[R] {
        match &self.body {
            ListBody::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Skeleton while loading, the empty message for zero rows, rows otherwise.
/// The total counts the filtered rows.
pub fn present<R>(
    load: LoadState,
    rows: Vec<R>,
    placeholders: usize,
    empty_message: &'static str,
    messages: &Messages,
) -> ListScreen<R> {
    let total_label = messages.total(rows.len());
    let body = match load {
        LoadState::Idle | LoadState::Loading => ListBody::Skeleton { placeholders },
        LoadState::Loaded | LoadState::Failed if rows.is_empty() => ListBody::Empty { message: empty_message },
        LoadState::Loaded | LoadState::Failed => ListBody::Rows(rows),
    };
    ListScreen { total_label, body }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BannerCard {
    pub id: RecordId,
    pub title: String,
    pub detail: String,
    pub image_url: String,
    pub created: String,
    pub published: bool,
}

impl BannerCard {
    pub fn from_banner(banner: &Banner, asset_base: &str, offset: FixedOffset) -> Self {
        Self {
            id: banner.id.clone(),
            title: banner.title.clone(),
            detail: banner.detail.clone(),
            image_url: image_url(asset_base, &banner.image),
            created: format_date(banner.created_at, offset),
            published: banner.is_published,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    /// 1-based position in the filtered list.
    pub index: usize,
    pub id: RecordId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub comment: String,
}

pub fn contact_rows(contacts: &[Contact]) -> Vec<ContactRow> {
    contacts
        .iter()
        .enumerate()
        .map(|(i, c)| ContactRow {
            index: i + 1,
            id: c.id.clone(),
            name: c.name.clone(),
            phone_number: c.phone_number.clone(),
            email: c.email.clone(),
            comment: c.comment.clone(),
        })
        .collect()
}

/// Resolves an object-storage key against the asset base.
pub fn image_url(base: &str, key: &str) -> String {
    let key = key.trim_start_matches('/');
    if key.starts_with("http://") || key.starts_with("https://") {
        return key.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), key)
}

pub fn format_date(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%d/%m/%Y").to_string()
}
