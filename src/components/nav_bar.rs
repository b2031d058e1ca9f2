//! Navigation Bar Component
//!
//! Site header with page links, cart badge and the notice banner.

use leptos::prelude::*;

use crate::config::use_config;
use crate::models::Category;
use crate::store::{store_go_to_checkout, use_app_store, AppStateStoreFields, Page};

/// Top navigation bar
#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    // The menu link always lands on the best sellers
    let show_menu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        store.search().set(String::new());
        store.category().set(Category::BestSeller);
        store.page().set(Page::Menu);
    };

    let show_contact = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        store.page().set(Page::Contact);
    };

    view! {
        <header class="main-header">
            <div class="logo">"ร้านหิวจัง"</div>
            <nav class="main-nav">
                <a href="#" on:click=show_menu>"เมนู"</a>
                <a href="#" on:click=show_contact>"ติดต่อเรา"</a>
                <button class="cart-btn" on:click=move |_| store_go_to_checkout(&store, &config)>
                    "ตะกร้าสินค้า "
                    <span class="cart-count">{move || store.cart().read().item_count()}</span>
                </button>
            </nav>
        </header>
        {move || store.notice().get().map(|msg| view! {
            <div class="notice-banner" on:click=move |_| store.notice().set(None)>{msg}</div>
        })}
    }
}
