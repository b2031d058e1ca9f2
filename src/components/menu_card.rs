//! Menu Card Component

use leptos::prelude::*;

use crate::config::use_config;
use crate::format::format_price;
use crate::models::MenuItem;
use crate::store::{store_open_customization, use_app_store};

/// One menu item with its add-to-cart button
#[component]
pub fn MenuCard(item: &'static MenuItem) -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    view! {
        <div class="menu-item" data-category=item.category.label()>
            <img src=item.image alt=item.title />
            <h3>{item.title}</h3>
            <p>{item.description}</p>
            <span class="price">{format_price(item.price, config.currency)}</span>
            <button
                class="btn-add"
                on:click=move |_| store_open_customization(&store, item.id)
            >
                "เพิ่มลงตะกร้า"
            </button>
        </div>
    }
}
