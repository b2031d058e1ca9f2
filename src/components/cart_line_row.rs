//! Cart Line Row Component

use leptos::prelude::*;

use crate::cart::CartLine;
use crate::components::RemoveConfirmButton;
use crate::config::use_config;
use crate::format::format_price;
use crate::store::{store_change_quantity, store_remove_item, use_app_store};

/// One cart line with quantity and remove controls
#[component]
pub fn CartLineRow(line: CartLine) -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    let details = line.customization.details();
    let note = line.customization.note().map(str::to_string);
    let minus_key = line.key.clone();
    let plus_key = line.key.clone();
    let remove_key = line.key.clone();

    view! {
        <div class="cart-item">
            <div>
                <h4 class="cart-item-title">{line.title.clone()}</h4>
                <span class="cart-item-price">{format_price(line.unit_price, config.currency)}</span>
                {details.into_iter().map(|detail| view! {
                    <p class="cart-custom-detail">{detail}</p>
                }).collect_view()}
                {note.map(|note| view! {
                    <p class="cart-custom-detail cart-note">"📝 " {note}</p>
                })}
            </div>
            <div class="cart-item-actions">
                <div class="cart-quantity-controls">
                    <button
                        class="btn-qty btn-minus"
                        on:click=move |_| store_change_quantity(&store, &config, &minus_key, -1)
                    >
                        "-"
                    </button>
                    <span class="qty-display">{line.quantity}</span>
                    <button
                        class="btn-qty btn-plus"
                        on:click=move |_| store_change_quantity(&store, &config, &plus_key, 1)
                    >
                        "+"
                    </button>
                </div>
                <RemoveConfirmButton
                    on_confirm=Callback::new(move |_| store_remove_item(&store, &config, &remove_key))
                />
            </div>
        </div>
    }
}
