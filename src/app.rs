//! Hiwjang Frontend App
//!
//! Root component: loads the saved cart, counts the visit and switches
//! between the menu, checkout, contact and confirmation pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::CartManager;
use crate::components::{
    CartPanel, CheckoutSummary, ContactSection, CustomizationModal, MenuSection, NavBar,
    OrderConfirmed, PromoCarousel, VisitorBadge,
};
use crate::config::SiteConfig;
use crate::store::{AppState, AppStateStoreFields, Page};
use crate::visitor;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::default();
    provide_context(config);

    let cart = CartManager::browser(config.cart_key).load();
    let store = Store::new(AppState::new(cart));
    provide_context(store);

    store.visitor_count().set(visitor::record_browser_visit(&config));

    view! {
        <NavBar />
        <main class="page">
            {move || match store.page().get() {
                Page::Menu => view! {
                    <PromoCarousel />
                    <div class="menu-layout">
                        <MenuSection />
                        <CartPanel />
                    </div>
                }.into_any(),
                Page::Checkout => view! { <CheckoutSummary /> }.into_any(),
                Page::Contact => view! { <ContactSection /> }.into_any(),
                Page::Confirmed => view! { <OrderConfirmed /> }.into_any(),
            }}
        </main>
        <footer class="main-footer">
            <VisitorBadge />
        </footer>
        <CustomizationModal />
    }
}
