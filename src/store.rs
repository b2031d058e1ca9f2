//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every cart mutation goes through `CartManager` so the snapshot in
//! local storage always follows the in-memory cart.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::cart::{Cart, CartManager};
use crate::catalog;
use crate::config::SiteConfig;
use crate::customize::CustomizationDraft;
use crate::models::Category;

pub const EMPTY_CART_NOTICE: &str = "กรุณาเพิ่มสินค้าลงในตะกร้าก่อนทำการสั่งซื้อ";

/// Page currently shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Menu,
    Checkout,
    Contact,
    /// Order placed, cart cleared
    Confirmed,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    pub cart: Cart,
    pub page: Page,
    /// Selected menu category
    pub category: Category,
    /// Menu search box text
    pub search: String,
    /// Open customization dialog, if any
    pub draft: Option<CustomizationDraft>,
    /// Transient message banner
    pub notice: Option<String>,
    pub visitor_count: u64,
}

impl AppState {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            page: Page::Menu,
            category: Category::BestSeller,
            search: String::new(),
            draft: None,
            notice: None,
            visitor_count: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Change a line's quantity by `delta` (removes it at zero)
pub fn store_change_quantity(store: &AppStore, config: &SiteConfig, key: &str, delta: i32) {
    let manager = CartManager::browser(config.cart_key);
    manager.change_quantity(&mut store.cart().write(), key, delta);
}

/// Remove a cart line by key
pub fn store_remove_item(store: &AppStore, config: &SiteConfig, key: &str) {
    let manager = CartManager::browser(config.cart_key);
    manager.remove_item(&mut store.cart().write(), key);
}

/// Open the customization dialog for a catalog item
pub fn store_open_customization(store: &AppStore, item_id: &str) {
    match catalog::find(item_id) {
        Some(item) => store.draft().set(Some(CustomizationDraft::open(item))),
        None => log::warn!("[MENU] Unknown item id {}", item_id),
    }
}

pub fn store_close_customization(store: &AppStore) {
    store.draft().set(None);
}

/// Apply an edit to the open dialog's draft
pub fn store_update_draft(store: &AppStore, edit: impl FnOnce(&mut CustomizationDraft)) {
    let field = store.draft();
    let mut guard = field.write();
    if let Some(draft) = &mut *guard {
        edit(draft);
    }
}

/// Add the open draft to the cart and close the dialog
pub fn store_commit_customization(store: &AppStore, config: &SiteConfig) {
    let Some(draft) = store.draft().get_untracked() else {
        return;
    };
    let manager = CartManager::browser(config.cart_key);
    manager.add_item(&mut store.cart().write(), draft.to_new_line());
    store.draft().set(None);
}

/// Show a notice banner that clears itself after the configured timeout
pub fn store_show_notice(store: &AppStore, config: &SiteConfig, message: &str) {
    store.notice().set(Some(message.to_string()));
    let store = *store;
    let message = message.to_string();
    let timeout = config.notice_timeout_ms;
    spawn_local(async move {
        TimeoutFuture::new(timeout).await;
        // A newer notice may have replaced this one
        if store.notice().get_untracked().as_deref() == Some(message.as_str()) {
            store.notice().set(None);
        }
    });
}

/// Go to checkout, or explain why not when the cart is empty
pub fn store_go_to_checkout(store: &AppStore, config: &SiteConfig) {
    if store.cart().read_untracked().is_empty() {
        store_show_notice(store, config, EMPTY_CART_NOTICE);
        return;
    }
    store.page().set(Page::Checkout);
}

/// Place the order: clear the cart and its snapshot
pub fn store_place_order(store: &AppStore, config: &SiteConfig) {
    if store.cart().read_untracked().is_empty() {
        store_show_notice(store, config, EMPTY_CART_NOTICE);
        return;
    }
    let manager = CartManager::browser(config.cart_key);
    manager.clear(&mut store.cart().write());
    store.page().set(Page::Confirmed);
}
