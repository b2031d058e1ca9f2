//! Contact Section Component
//!
//! Contact form with a simulated send.

use leptos::prelude::*;

use crate::contact::{ContactForm, INCOMPLETE_MESSAGE};
use crate::error::ShopError;

#[component]
pub fn ContactSection() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    // Ok = sent, Err = validation message
    let (status, set_status) = signal::<Option<Result<String, String>>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };
        match form.submit() {
            Ok(thanks) => {
                set_status.set(Some(Ok(thanks)));
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
            Err(ShopError::Contact(msg)) => set_status.set(Some(Err(msg))),
            Err(e) => {
                log::error!("[CONTACT] {}", e);
                set_status.set(Some(Err(INCOMPLETE_MESSAGE.to_string())));
            }
        }
    };

    view! {
        <section class="contact-section">
            <h2>"ติดต่อเรา"</h2>
            <form id="contactForm" on:submit=on_submit>
                <input
                    type="text"
                    id="contact-name"
                    placeholder="ชื่อของคุณ"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    id="contact-email"
                    placeholder="อีเมล"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    id="contact-message"
                    placeholder="ข้อความ"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"ส่งข้อความ"</button>
            </form>
            {move || status.get().map(|status| match status {
                Ok(msg) => view! { <p id="contact-message-status" class="contact-status success">{msg}</p> }.into_any(),
                Err(msg) => view! { <p id="contact-message-status" class="contact-status error">{msg}</p> }.into_any(),
            })}
        </section>
    }
}
