use log::Level;

pub const SITE_NAME: &str = "Eccentric Digital";

pub const NOTIFICATION_DISMISS_MS: u32 = 4_000;
pub const CAROUSEL_INTERVAL_MS: u32 = 4_500;

/// Scroll distance after which the navigation bar gets its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Hero backgrounds move from 0 to PARALLAX_SHIFT px over the first
/// PARALLAX_RANGE px of scrolling.
pub const PARALLAX_RANGE: f64 = 500.0;
pub const PARALLAX_SHIFT: f64 = -120.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
