//! Customization Dialog
//!
//! Option groups, note, quantity and live price for the item being added.
//! Rendered only while the store holds a draft.

use leptos::prelude::*;

use crate::catalog;
use crate::config::use_config;
use crate::format::format_price;
use crate::models::{GroupKind, OptionGroup};
use crate::store::{
    store_close_customization, store_commit_customization, store_update_draft, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn CustomizationModal() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    // Only re-render the dialog when a different item is opened,
    // not on every selection change
    let open_item = Memo::new(move |_| store.draft().with(|d| d.as_ref().map(|d| d.item().id)));

    let quantity = move || store.draft().with(|d| d.as_ref().map(|d| d.quantity()).unwrap_or(1));
    let final_price = move || {
        let price = store.draft().with(|d| d.as_ref().map(|d| d.final_price()).unwrap_or(0.0));
        format_price(price, config.currency)
    };

    move || open_item.get().and_then(catalog::find).map(|item| {
        let groups = catalog::option_groups(item.category);
        view! {
            <div class="modal" on:click=move |_| store_close_customization(&store)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| store_close_customization(&store)>"×"</button>
                    <h2 id="modal-item-title">{item.title}</h2>
                    <p id="modal-item-price">{format_price(item.price, config.currency)}</p>

                    <form id="customizationForm" on:submit=|ev| ev.prevent_default()>
                        {groups.iter().map(|group| view! { <OptionGroupField group=group /> }).collect_view()}

                        <label for="special-notes">"หมายเหตุเพิ่มเติม"</label>
                        <textarea
                            id="special-notes"
                            placeholder="เช่น ไม่ใส่ผัก"
                            on:input=move |ev| {
                                let note = event_target_value(&ev);
                                store_update_draft(&store, |d| d.set_note(&note));
                            }
                        ></textarea>
                    </form>

                    <div class="modal-quantity">
                        <button class="btn-qty" on:click=move |_| store_update_draft(&store, |d| d.change_quantity(-1))>"-"</button>
                        <span id="modal-quantity">{quantity}</span>
                        <button class="btn-qty" on:click=move |_| store_update_draft(&store, |d| d.change_quantity(1))>"+"</button>
                    </div>

                    <button class="btn-confirm" on:click=move |_| store_commit_customization(&store, &config)>
                        "เพิ่มลงตะกร้า " <span id="modal-final-price">{final_price}</span>
                    </button>
                </div>
            </div>
        }
    })
}

/// Radio or checkbox group inside the dialog
#[component]
fn OptionGroupField(group: &'static OptionGroup) -> impl IntoView {
    let store = use_app_store();
    let config = use_config();
    let input_type = match group.kind {
        GroupKind::Single => "radio",
        GroupKind::Multiple => "checkbox",
    };

    view! {
        <fieldset class="option-group">
            <legend>{group.label}</legend>
            {group.options.iter().map(|option| {
                let attribute = group.attribute;
                let value = option.value;
                let checked = move || {
                    store.draft().with(|d| d.as_ref().map(|d| d.is_selected(attribute, value)).unwrap_or(false))
                };
                let surcharge = (option.surcharge > 0.0)
                    .then(|| format!(" (+{})", format_price(option.surcharge, config.currency)));
                view! {
                    <label class="option">
                        <input
                            type=input_type
                            name=attribute
                            value=value
                            prop:checked=checked
                            on:change=move |_| store_update_draft(&store, |d| match group.kind {
                                GroupKind::Single => d.select(attribute, value),
                                GroupKind::Multiple => d.toggle(attribute, value),
                            })
                        />
                        {value}
                        {surcharge}
                    </label>
                }
            }).collect_view()}
        </fieldset>
    }
}
