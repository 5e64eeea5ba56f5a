use std::collections::BTreeSet;

use leptos::{ev::SubmitEvent, html, prelude::*};

use super::toast::use_toaster;
use crate::error::PageError;
use crate::ux::validate::{validate_form, FieldInput, SubmitOutcome};

#[component]
pub fn ContactForm() -> impl IntoView {
    let toaster = use_toaster();
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let marked = RwSignal::new(BTreeSet::<String>::new());

    let field_class = move |name: &'static str| {
        move || {
            if marked.with(|m| m.contains(name)) {
                "form-input error"
            } else {
                "form-input"
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(form), Some(name), Some(email), Some(message)) = (
            form_ref.get_untracked(),
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            log::warn!("{}", PageError::MissingElement("contact form"));
            return;
        };

        let fields = [
            FieldInput::new("name", name.value()).required(),
            FieldInput::new("email", email.value()).required().email(),
            FieldInput::new("message", message.value()).required(),
        ];
        let report = validate_form(&fields);
        marked.update(|m| report.apply_to(m));

        let outcome = SubmitOutcome::from(&report);
        if outcome.reset {
            log::info!("Form submitted successfully");
            form.reset();
        } else {
            log::debug!("form rejected with {} error(s)", report.errors.len());
        }
        toaster.show(outcome.message, outcome.toast);
    };

    view! {
        <form node_ref=form_ref class="contact-form" novalidate=true on:submit=on_submit>
            <label for="contact-name">"Name"</label>
            <input node_ref=name_ref id="contact-name" name="name" type="text" required=true class=field_class("name") />
            <label for="contact-email">"Email"</label>
            <input node_ref=email_ref id="contact-email" name="email" type="email" required=true class=field_class("email") />
            <label for="contact-message">"Message"</label>
            <textarea node_ref=message_ref id="contact-message" name="message" rows="5" required=true class=field_class("message")></textarea>
            <button type="submit" class="submit-button">"Send"</button>
        </form>
    }
}
