use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::canvas::{MatrixCanvas, MatrixStyle};
use crate::components::PageLoader;
use crate::config::SiteConfig;
use crate::dom::Timeout;
use crate::models::{ContactForm, ContactFormState, SubmitStatus};

type FieldSetter = fn(&mut ContactForm, String);

#[component]
fn ContactFormView() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let delay_ms = config.contact_submit_delay_ms;
    let state = RwSignal::new(ContactFormState::default());
    // Dropping the pending timer cancels the simulated send.
    let pending = StoredValue::new(None::<SendWrapper<Timeout>>);

    let bind = move |set: FieldSetter| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            state.update(|s| set(&mut s.form, value));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        state.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        log::debug!("Contact form submitted");
        match Timeout::new(delay_ms, move || {
            state.update(ContactFormState::complete_submit);
        }) {
            Ok(timer) => pending.set_value(Some(SendWrapper::new(timer))),
            Err(err) => {
                log::warn!("Send timer unavailable: {err}");
                state.update(ContactFormState::complete_submit);
            }
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <h2 class="form-title">"Send Us a Message"</h2>
            {move || {
                state
                    .with(ContactFormState::status_message)
                    .map(|message| {
                        view! {
                            <div class="form-success" role="status">
                                <p>{message}</p>
                                <button
                                    type="button"
                                    class="form-dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| state.update(ContactFormState::dismiss)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
            <label>
                "Name"
                <input
                    type="text"
                    required
                    placeholder="Your full name"
                    prop:value=move || state.with(|s| s.form.name.clone())
                    on:input=bind(|f, v| f.name = v)
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    required
                    placeholder="your.email@example.com"
                    prop:value=move || state.with(|s| s.form.email.clone())
                    on:input=bind(|f, v| f.email = v)
                />
            </label>
            <label>
                "Subject"
                <input
                    type="text"
                    required
                    placeholder="What's this about?"
                    prop:value=move || state.with(|s| s.form.subject.clone())
                    on:input=bind(|f, v| f.subject = v)
                />
            </label>
            <label>
                "Organization " <span class="optional">"(Optional)"</span>
                <input
                    type="text"
                    placeholder="Your company or school"
                    prop:value=move || state.with(|s| s.form.organization.clone())
                    on:input=bind(|f, v| f.organization = v)
                />
            </label>
            <label>
                "Message"
                <textarea
                    required
                    rows="5"
                    placeholder="Tell us about your project, question, or just say hi..."
                    prop:value=move || state.with(|s| s.form.message.clone())
                    on:input=bind(|f, v| f.message = v)
                ></textarea>
            </label>
            <button
                type="submit"
                class="button button-primary"
                prop:disabled=move || state.with(ContactFormState::is_submitting)
            >
                {move || match state.with(ContactFormState::status) {
                    SubmitStatus::Submitting => "SENDING",
                    SubmitStatus::Idle | SubmitStatus::Success => "SEND MESSAGE",
                }}
            </button>
        </form>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageLoader>
            <div class="page contact-page">
                <header class="page-header contact-header">
                    <MatrixCanvas style=MatrixStyle::Binary class="contact-matrix" />
                    <h1 class="section-heading">"Contact"</h1>
                    <p class="page-lead">
                        "Let's connect the circuits. Reach out to us with your questions or proposals."
                    </p>
                </header>
                <ContactFormView />
            </div>
        </PageLoader>
    }
}
