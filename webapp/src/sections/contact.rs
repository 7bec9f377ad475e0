use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{error, info};

use api::{
    contact::{ContactForm, Field, STATUS_RESET_MS, SubmitStatus},
    email::{EmailConfig, Mailer, Transport},
    profile::{EMAIL, SOCIAL_LINKS, mailto},
    reveal::RevealOptions,
};

use crate::common::{
    icons::{Icon, SvgIcon},
    reveal::use_scroll_reveal,
};

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    form: Signal<ContactForm>,
    field: Field,
    label: &'static str,
    id: &'static str,
    #[props(default)]
    multiline: bool,
    #[props(default = "text")]
    input_type: &'static str,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let mut form = props.form;
    let field = props.field;

    let value = form.read().value(field).to_owned();
    let error = form.read().errors.get(field).map(str::to_owned);
    let invalid = if error.is_some() { "invalid" } else { "" };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: props.id, "{props.label}" }
            if props.multiline {
                textarea {
                    id: props.id,
                    class: "form-textarea {invalid}",
                    rows: 4,
                    value: "{value}",
                    oninput: move |evt| form.write().edit(field, evt.value()),
                }
            } else {
                input {
                    id: props.id,
                    r#type: props.input_type,
                    class: "form-input {invalid}",
                    value: "{value}",
                    oninput: move |evt| form.write().edit(field, evt.value()),
                }
            }
            if let Some(error) = error {
                p { class: "form-error", "{error}" }
            }
        }
    }
}

#[component]
fn StatusBanner(status: SubmitStatus) -> Element {
    match status {
        SubmitStatus::Success => rsx! {
            div { class: "banner banner-success", "Thanks! Your message has been sent." }
        },
        SubmitStatus::Error => rsx! {
            div { class: "banner banner-error",
                "Sorry, something went wrong sending your message. Please email me directly at "
                a { href: mailto(), "{EMAIL}" }
                "."
            }
        },
        SubmitStatus::Idle | SubmitStatus::Submitting => rsx! {},
    }
}

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut reveal = use_scroll_reveal(RevealOptions::once());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        // validation errors are already on the form at this point
        let Some(message) = form.write().begin_submit() else {
            return;
        };
        let submission = form.read().submission();

        spawn(async move {
            let transport = Transport::from_config(EmailConfig::from_env());
            if transport.is_simulated() {
                info!("email delivery is not configured, simulating the send");
            }

            let outcome = transport.send(&message).await;
            if let Err(err) = &outcome {
                error!("failed to send contact message: {err}");
            }

            form.write().finish(&outcome);

            // the section may be gone by the time this fires
            Timeout::new(STATUS_RESET_MS, move || {
                if let Ok(mut form) = form.try_write() {
                    form.settle(submission);
                }
            })
            .forget();
        });
    };

    let status = form.read().status;
    let submitting = status == SubmitStatus::Submitting;

    rsx! {
        section { id: "contact", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Get In Touch" }

                div {
                    class: "contact-grid",
                    style: reveal.style(),
                    onmounted: move |evt| reveal.observe(evt),

                    form {
                        class: "card contact-form",
                        novalidate: true,
                        onsubmit: submit,

                        StatusBanner { status }

                        FormField { form, field: Field::Name, label: "Name", id: "name" }
                        FormField {
                            form,
                            field: Field::Email,
                            label: "Email",
                            id: "email",
                            input_type: "email",
                        }
                        FormField {
                            form,
                            field: Field::Message,
                            label: "Message",
                            id: "message",
                            multiline: true,
                        }

                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting {
                                "Sending..."
                            } else {
                                "Send Message"
                            }
                        }
                    }

                    div { class: "contact-channels",
                        h3 { "Connect with me" }
                        for link in SOCIAL_LINKS.iter() {
                            a {
                                key: "{link.name}",
                                class: format!("channel channel-{}", link.name.to_lowercase()),
                                href: link.url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                SvgIcon { icon: Icon::for_social(link.name) }
                                span { "{link.name}" }
                            }
                        }
                        a { class: "channel channel-email", href: mailto(),
                            SvgIcon { icon: Icon::Mail }
                            span { "{EMAIL}" }
                        }
                    }
                }
            }
        }
    }
}
