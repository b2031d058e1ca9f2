//! Visitor Badge Component

use leptos::prelude::*;

use crate::format::format_count;
use crate::store::{use_app_store, AppStateStoreFields};

/// Footer badge showing the visitor count
#[component]
pub fn VisitorBadge() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="visitor-counter">
            "ผู้เข้าชมทั้งหมด "
            <span id="visitor-count-display">{move || format_count(store.visitor_count().get())}</span>
            " ครั้ง"
        </div>
    }
}
