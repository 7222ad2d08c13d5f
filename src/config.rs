//! Application Configuration
//!
//! Compile-time settings. There is no runtime or environment configuration.

/// localStorage key holding the serialized gift list
pub const STORAGE_KEY: &str = "gifts";

/// Thumbnail shown for gifts without an image URL
pub const PLACEHOLDER_IMAGE: &str = "https://img.icons8.com/external-justicon-lineal-color-justicon/64/000000/external-gift-christmas-day-justicon-lineal-color-justicon.png";

/// Interval between decoration animation frames
pub const DECORATION_TICK_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storage_key: &'static str,
    pub placeholder_image: &'static str,
    pub log_level: log::Level,
    pub decoration_tick_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY,
            placeholder_image: PLACEHOLDER_IMAGE,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
            decoration_tick_ms: DECORATION_TICK_MS,
        }
    }
}

impl Config {
    /// Image to render for a gift, falling back to the placeholder
    pub fn image_for<'a>(&'a self, url: &'a str) -> &'a str {
        if url.is_empty() {
            self.placeholder_image
        } else {
            url
        }
    }
}
