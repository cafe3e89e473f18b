use dioxus::prelude::*;

/// Styled form label.
#[component]
pub fn Label(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        label { class: "label {class}", {children} }
    }
}
