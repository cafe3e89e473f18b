use dioxus::prelude::*;

/// Landing page reached after a successful sign-in.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { "Welcome to PrepWise" }
                p { "You are signed in. Practice interviews will show up here." }
                p {
                    Link { class: "auth-switch", to: "/sign-in", "Back to sign in" }
                }
            }
        }
    }
}
