//! Cart Panel Component
//!
//! Side panel listing the cart lines, item count and total.

use leptos::prelude::*;

use crate::components::CartLineRow;
use crate::config::use_config;
use crate::format::format_price;
use crate::store::{store_go_to_checkout, use_app_store, AppStateStoreFields};

#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    view! {
        <aside class="cart-panel">
            <h3>
                "ตะกร้าสินค้า "
                <span id="cart-count-text">{move || format!("({} ชิ้น)", store.cart().read().item_count())}</span>
            </h3>

            <div id="cart-items">
                <Show
                    when=move || !store.cart().read().is_empty()
                    fallback=|| view! { <p class="cart-empty-message">"ตะกร้าสินค้าว่างเปล่า"</p> }
                >
                    // Quantity is part of the key so a row re-renders when it changes
                    <For
                        each=move || store.cart().read().lines().to_vec()
                        key=|line| (line.key.clone(), line.quantity)
                        children=move |line| view! { <CartLineRow line=line /> }
                    />
                </Show>
            </div>

            <div class="cart-summary">
                "รวม: "
                <span id="cart-total">{move || format_price(store.cart().read().total(), config.currency)}</span>
            </div>
            <button class="btn-checkout" on:click=move |_| store_go_to_checkout(&store, &config)>
                "สั่งซื้อ"
            </button>
        </aside>
    }
}
