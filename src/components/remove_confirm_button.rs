//! Remove Confirm Button Component
//!
//! Trash button that asks for inline confirmation before removing a line.

use leptos::prelude::*;

/// Inline remove confirmation
///
/// Shows a trash button first. Clicking it swaps in "ลบ?" with ✓/✗.
#[component]
pub fn RemoveConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="btn-remove"
                    title="ลบรายการ"
                    on:click=move |_| set_confirming.set(true)
                >
                    "🗑"
                </button>
            }
        >
            <span class="remove-confirm">
                <span class="remove-confirm-text">"ลบ?"</span>
                <button class="confirm-btn" on:click=move |_| on_confirm.run(())>"✓"</button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>"✗"</button>
            </span>
        </Show>
    }
}
