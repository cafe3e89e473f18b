use dioxus::prelude::*;
use ui::{AuthForm, FormMode};

/// Sign-up page.
#[component]
pub fn SignUp() -> Element {
    rsx! {
        div {
            class: "auth-page",
            AuthForm { mode: FormMode::SignUp }
        }
    }
}
