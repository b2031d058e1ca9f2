//! Menu Section Component
//!
//! Category buttons, search box and the grid of menu cards.

use leptos::prelude::*;

use crate::catalog;
use crate::components::MenuCard;
use crate::models::Category;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuSection() -> impl IntoView {
    let store = use_app_store();

    let items = Memo::new(move |_| {
        catalog::visible_items(store.category().get(), &store.search().get())
    });

    view! {
        <section class="menu-section">
            <div class="category-bar">
                {Category::ALL.iter().map(|&category| {
                    // No category is highlighted while a search is active
                    let is_active = move || {
                        store.category().get() == category && store.search().read().trim().is_empty()
                    };
                    view! {
                        <button
                            class=move || if is_active() { "category-btn active" } else { "category-btn" }
                            on:click=move |_| {
                                store.search().set(String::new());
                                store.category().set(category);
                            }
                        >
                            {category.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <input
                type="search"
                id="menu-search-input"
                placeholder="ค้นหาเมนู..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />

            <div class="menu-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| view! { <MenuCard item=item /> }
                />
            </div>

            <Show when=move || items.read().is_empty()>
                <p class="menu-empty">"ไม่พบเมนูที่ค้นหา"</p>
            </Show>
        </section>
    }
}
