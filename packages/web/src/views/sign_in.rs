use dioxus::prelude::*;
use ui::{AuthForm, FormMode};

/// Sign-in page.
#[component]
pub fn SignIn() -> Element {
    rsx! {
        div {
            class: "auth-page",
            AuthForm { mode: FormMode::SignIn }
        }
    }
}
