use dioxus::prelude::*;

/// Styled text input.
#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type,
            placeholder,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
