//! Small styled building blocks shared by the views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod form_field;
pub use form_field::FormField;

mod toast;
pub use toast::{use_toast, Toast, ToastApi, ToastKind, ToastOptions, ToastProvider, ToastStack};
