//! Site Configuration
//!
//! Storage keys, timings and display settings, provided via context.

use leptos::prelude::*;
use log::LevelFilter;

/// Local storage key of the cart snapshot
pub const CART_STORAGE_KEY: &str = "hiwjangCart";
/// Local storage key of the visitor counter
pub const VISITOR_COUNT_KEY: &str = "hiwjangVisitorCount";
/// Session storage flag set once the current session was counted
pub const VISITOR_SESSION_KEY: &str = "hiwjangVisitorCounted";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub cart_key: &'static str,
    pub visitor_key: &'static str,
    pub visitor_session_key: &'static str,
    /// Carousel auto-advance period
    pub carousel_interval_ms: u32,
    /// How long a notice stays on screen
    pub notice_timeout_ms: u32,
    pub currency: &'static str,
    /// Count a visitor once per browser session instead of once per page load
    pub count_once_per_session: bool,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cart_key: CART_STORAGE_KEY,
            visitor_key: VISITOR_COUNT_KEY,
            visitor_session_key: VISITOR_SESSION_KEY,
            carousel_interval_ms: leptos_carousel::DEFAULT_INTERVAL_MS,
            notice_timeout_ms: 3_000,
            currency: "THB",
            count_once_per_session: true,
            log_level: LevelFilter::Info,
        }
    }
}

/// Get the site config from context (defaults if none was provided)
pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
