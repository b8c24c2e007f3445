//! View models backing the three operator screens.
//!
//! View models live on the UI thread: state sits in `RefCell`s and futures are
//! not `Send`. Remote calls race the screen's [`MountScope`], so a response
//! that lands after the screen is gone changes nothing.

use std::cell::RefCell;
use std::future::Future;
use tokio_util::sync::CancellationToken;

pub mod banner;
pub mod contact;
pub mod profile;
pub mod render;

pub use banner::BannerListView;
pub use contact::{ContactDetail, ContactView};
pub use profile::ProfilePictureView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// How an action ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The operator answered no to the confirmation.
    Declined,
    /// The screen went away before the response came back.
    Unmounted,
    /// An earlier submission is still in flight.
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct MountScope {
    token: CancellationToken,
}

impl MountScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn unmount(&self) {
        self.token.cancel();
    }

    /// Awaits `fut` unless the scope is torn down first. `None` means the
    /// result must be dropped.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.token.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            out = fut => {
                if self.token.is_cancelled() { None } else { Some(out) }
            }
        }
    }
}

#[derive(Debug)]
struct ListState<T> {
    load: LoadState,
    records: Vec<T>,
}

/// Canonical record set of a list screen plus its load state.
#[derive(Debug)]
pub(crate) struct ListModel<T> {
    state: RefCell<ListState<T>>,
}

impl<T: Clone> ListModel<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: RefCell::new(ListState {
                load: LoadState::Idle,
                records: Vec::new(),
            }),
        }
    }

    pub(crate) fn begin_load(&self) {
        self.state.borrow_mut().load = LoadState::Loading;
    }

    /// Fetch-and-replace, never merge.
    pub(crate) fn replace(&self, records: Vec<T>) {
        let mut state = self.state.borrow_mut();
        state.records = records;
        state.load = LoadState::Loaded;
    }

    /// Keeps whatever was there before.
    pub(crate) fn fail(&self) {
        self.state.borrow_mut().load = LoadState::Failed;
    }

    pub(crate) fn load_state(&self) -> LoadState {
        self.state.borrow().load
    }

    pub(crate) fn records(&self) -> Vec<T> {
        self.state.borrow().records.clone()
    }

    pub(crate) fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.state.borrow().records.iter().find(|r| pred(r)).cloned()
    }
}
