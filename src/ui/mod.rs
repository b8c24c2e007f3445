pub mod banner_list;
pub mod contact_table;
pub mod login;
pub mod main_window;
pub mod profile_picture;
pub mod prompt;

use chrono::NaiveDate;
use gtk4 as gtk;
use gtk4::prelude::*;

use crate::api::{ApiClient, RuntimeBound};

pub type Remote = RuntimeBound<ApiClient>;

pub(crate) fn clear_box(container: &gtk::Box) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
}

pub(crate) fn clear_list(list: &gtk::ListBox) {
    while let Some(child) = list.first_child() {
        list.remove(&child);
    }
}

pub(crate) fn clear_flow(flow: &gtk::FlowBox) {
    while let Some(child) = flow.first_child() {
        flow.remove(&child);
    }
}

/// `YYYY-MM-DD`, blank means not picked.
pub(crate) fn parse_day(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

pub(crate) fn padded_box(orientation: gtk::Orientation, spacing: i32, margin: i32) -> gtk::Box {
    let root = gtk::Box::new(orientation, spacing);
    root.set_margin_top(margin);
    root.set_margin_bottom(margin);
    root.set_margin_start(margin);
    root.set_margin_end(margin);
    root
}
