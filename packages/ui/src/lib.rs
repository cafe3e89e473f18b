//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

mod auth;
pub use auth::{submit_credentials, validate_credentials, AuthValues, FieldErrors, FormMode};

mod effects;
pub use effects::{NavigationError, Navigator, Notifier, RouterNavigator, ToastNotifier};

mod auth_form;
pub use auth_form::AuthForm;

pub const LOGO: Asset = asset!("/assets/logo.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
