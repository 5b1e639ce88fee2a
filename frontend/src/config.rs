use log::Level;

/// Widths below this are phones.
pub const TABLET_MIN_WIDTH: u32 = 768;
/// Widths at or above this are desktops.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

// Used until the first real measurement (and forever when there is no viewport).
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1920;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 1080;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub const CAROUSEL_INTERVAL_MS: u32 = 6000;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_subscribe_delay_ms() -> u32 {
    300
}

#[cfg(not(debug_assertions))]
pub fn get_subscribe_delay_ms() -> u32 {
    1500 // Stands in for the newsletter provider round trip
}
