//! Operator dashboard for a broker listing platform: promotional banners,
//! contact-form submissions and user profile pictures, managed against the
//! platform's REST API.

pub mod api;
pub mod app;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod locale;
pub mod logging;
pub mod role;
pub mod storage;
pub mod utils;
pub mod view;

#[cfg(feature = "gtk")]
pub mod ui;

pub use error::ActionError;
