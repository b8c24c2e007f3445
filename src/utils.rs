use chrono::{FixedOffset, Local, Offset};
use once_cell::sync::Lazy;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

/// Runs a UI-thread future on the GLib main context.
#[cfg(feature = "gtk")]
pub fn spawn_local<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    gtk4::glib::MainContext::default().spawn_local(fut);
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Fixed offset for day boundaries: the configured one, else the machine's current one.
pub fn day_offset(minutes: Option<i32>) -> FixedOffset {
    minutes
        .and_then(|m| m.checked_mul(60))
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Local::now().offset().fix())
}
