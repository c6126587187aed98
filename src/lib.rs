#[cfg(feature = "csr")]
pub mod app;
pub mod observer;
pub mod portfolio;
pub mod sections;

/// Sends `log` output to the browser console.
#[cfg(feature = "csr")]
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        log::warn!("{e}");
    }
}
