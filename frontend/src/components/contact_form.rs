use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{ContactAction, ContactFormState, ContactSubmitter, HttpContactTransport};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(ContactFormState::default);
    let submitter = use_memo(
        |_| ContactSubmitter::new(HttpContactTransport::new(config::get_contact_endpoint())),
        (),
    );

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetEmail(input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetMessage(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ticket = submitter.issue();
            form.dispatch(ContactAction::Submitted(ticket));
            let form = form.clone();
            let submitter = submitter.clone();
            let email = form.email.clone();
            let message = form.message.clone();
            spawn_local(async move {
                let submission = submitter.submit(ticket, &email, &message).await;
                form.dispatch(ContactAction::Resolved(submission));
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <input
                type="email"
                placeholder="Your email"
                required=true
                value={form.email.clone()}
                oninput={on_email}
            />
            <textarea
                placeholder="Your message"
                required=true
                rows="5"
                value={form.message.clone()}
                oninput={on_message}
            />
            <button type="submit" class="contact-submit">{"Send"}</button>
            if !form.response.is_empty() {
                <p class="contact-response">{ form.response.clone() }</p>
            }
        </form>
    }
}
