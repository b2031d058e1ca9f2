//! Visitor Counter
//!
//! Page-load counter kept in local storage, optionally counted once per
//! browser session through a session storage flag.

use crate::config::SiteConfig;
use crate::error::ShopResult;
use crate::storage::{self, BrowserStore, KeyValueStore};

pub struct VisitorCounter<L, S> {
    local: L,
    session: Option<S>,
    count_key: String,
    session_key: String,
}

impl<L: KeyValueStore, S: KeyValueStore> VisitorCounter<L, S> {
    /// Without a session store every page load is counted
    pub fn new(local: L, session: Option<S>, count_key: &str, session_key: &str) -> Self {
        Self {
            local,
            session,
            count_key: count_key.to_string(),
            session_key: session_key.to_string(),
        }
    }

    /// Stored count; missing or unreadable values count as 0. The whole
    /// value must be a number, so `"12abc"` also reads as 0.
    pub fn current(&self) -> u64 {
        match self.local.get(&self.count_key) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or(0),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("[VISITOR] {}", e);
                0
            }
        }
    }

    fn already_counted(&self) -> bool {
        self.session
            .as_ref()
            .and_then(|s| s.get(&self.session_key).ok().flatten())
            .is_some()
    }

    /// Count this page load and return the count to display
    pub fn record_visit(&self) -> u64 {
        let count = self.current();
        if self.already_counted() {
            return count;
        }
        let count = count.saturating_add(1);
        if let Err(e) = self.persist(count) {
            log::error!("[VISITOR] {}", e);
        }
        count
    }

    fn persist(&self, count: u64) -> ShopResult<()> {
        self.local.set(&self.count_key, &count.to_string())?;
        if let Some(session) = &self.session {
            session.set(&self.session_key, "1")?;
        }
        Ok(())
    }
}

/// Count this page load against the browser's storage
pub fn record_browser_visit(config: &SiteConfig) -> u64 {
    let session = if config.count_once_per_session {
        BrowserStore::session()
            .map_err(|e| log::warn!("[VISITOR] {}; counting every page load", e))
            .ok()
    } else {
        None
    };
    let counter = VisitorCounter::new(
        storage::local_or_memory(),
        session,
        config.visitor_key,
        config.visitor_session_key,
    );
    let count = counter.record_visit();
    log::info!("[VISITOR] Visit #{}", count);
    count
}
