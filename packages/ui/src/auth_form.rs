//! The sign-in / sign-up form.

use dioxus::prelude::*;

use crate::auth::{submit_credentials, AuthValues, FieldErrors, FormMode};
use crate::components::{use_toast, Button, FormField};
use crate::effects::{RouterNavigator, ToastNotifier};

/// Labeled auth form with client-side validation. A valid submit shows
/// a success toast and redirects; nothing is sent to a backend.
#[component]
pub fn AuthForm(mode: FormMode) -> Element {
    let toast = use_toast();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let values = AuthValues {
            name: name(),
            email: email(),
            password: password(),
        };

        match submit_credentials(
            mode,
            &values,
            &ToastNotifier::new(toast),
            &RouterNavigator::new(nav),
        ) {
            Ok(()) => errors.set(FieldErrors::default()),
            Err(field_errors) => errors.set(field_errors),
        }
    };

    rsx! {
        div {
            class: "auth-card",

            div {
                class: "auth-brand",
                img { class: "auth-logo", src: crate::LOGO, alt: "logo" }
                h2 { "PrepWise" }
            }
            h3 { class: "auth-tagline", "Practice the job interview with AI." }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if mode == FormMode::SignUp {
                    FormField {
                        label: "Name",
                        placeholder: "Your name",
                        value: name(),
                        error: errors().name,
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                FormField {
                    label: "Email",
                    r#type: "email",
                    placeholder: "Your email",
                    value: email(),
                    error: errors().email,
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                FormField {
                    label: "Password",
                    r#type: "password",
                    placeholder: "Your password",
                    value: password(),
                    error: errors().password,
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                Button {
                    class: "auth-submit",
                    r#type: "submit",
                    {mode.submit_label()}
                }
            }

            p {
                class: "auth-footer",
                {mode.footer_prompt()}
                " "
                Link {
                    class: "auth-switch",
                    to: mode.counterpart_target(),
                    {mode.counterpart_label()}
                }
            }
        }
    }
}
