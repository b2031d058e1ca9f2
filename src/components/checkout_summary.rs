//! Checkout Components
//!
//! Order summary page and the confirmation shown after placing the order.

use leptos::prelude::*;

use crate::cart::CartLine;
use crate::config::use_config;
use crate::format::format_price;
use crate::store::{store_place_order, use_app_store, AppStateStoreFields, Page};

/// Order summary with grand total
#[component]
pub fn CheckoutSummary() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    view! {
        <section class="checkout-page">
            <h2>"สรุปรายการสั่งซื้อ"</h2>
            <div id="checkout-summary-list">
                {move || {
                    let cart = store.cart().read();
                    let rows = if cart.is_empty() {
                        view! { <p class="text-muted">"ไม่มีรายการสินค้าในตะกร้า"</p> }.into_any()
                    } else {
                        cart.lines()
                            .iter()
                            .map(|line| summary_row(line, config.currency))
                            .collect_view()
                            .into_any()
                    };
                    rows
                }}
            </div>
            <div class="checkout-total">
                "ยอดรวมทั้งหมด: "
                <span id="checkout-total-amount">
                    {move || format_price(store.cart().read().total(), config.currency)}
                </span>
            </div>
            <div class="checkout-actions">
                <button class="btn-back" on:click=move |_| store.page().set(Page::Menu)>"กลับไปเลือกเมนู"</button>
                <button class="btn-confirm" on:click=move |_| store_place_order(&store, &config)>"ยืนยันการสั่งซื้อ"</button>
            </div>
        </section>
    }
}

fn summary_row(line: &CartLine, currency: &'static str) -> impl IntoView {
    let heading = format!("{} x {}", line.quantity, line.title);
    let summary = line.customization.summary();
    let details = (!summary.is_empty()).then(|| view! {
        <span class="summary-customization text-secondary">{format!("({})", summary)}</span>
    });
    let subtotal = format_price(line.subtotal(), currency);

    view! {
        <div class="summary-item">
            <div class="summary-item-details">
                <span>{heading}</span>
                {details}
            </div>
            <div class="summary-item-price">{subtotal}</div>
        </div>
    }
}

/// Shown once the order has been placed
#[component]
pub fn OrderConfirmed() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="checkout-page confirmed">
            <h2>"ขอบคุณสำหรับคำสั่งซื้อ!"</h2>
            <p>"ร้านได้รับรายการของคุณแล้ว"</p>
            <button class="btn-back" on:click=move |_| store.page().set(Page::Menu)>"กลับไปหน้าเมนู"</button>
        </section>
    }
}
