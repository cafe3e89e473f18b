use dioxus::prelude::*;

use super::{Input, Label};

/// Labeled input with an inline validation message.
#[component]
pub fn FormField(
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(!optional)] error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label { "{label}" }
            Input {
                r#type,
                placeholder,
                value,
                oninput: move |evt: FormEvent| oninput.call(evt),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
