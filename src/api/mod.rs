pub mod client;
pub mod error;
pub mod models;
pub mod service;

pub use client::ApiClient;
pub use error::ApiError;
pub use service::{BannerApi, ContactApi, RuntimeBound, UserApi};
