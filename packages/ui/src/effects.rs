//! Capability traits for the side effects the auth flow performs.
//!
//! The submit path talks to these instead of the toast and router
//! globals directly, so it can run under test with in-memory doubles.

use crate::components::{ToastApi, ToastOptions};

/// Shows transient user-visible messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Performs client-side navigation.
pub trait Navigator {
    fn push(&self, path: &str) -> Result<(), NavigationError>;
}

/// A navigation attempt the router rejected.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct NavigationError(pub String);

/// [`Notifier`] backed by the toast context.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    api: ToastApi,
}

impl ToastNotifier {
    pub fn new(api: ToastApi) -> Self {
        Self { api }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.api.success(message.to_string(), ToastOptions::new());
    }

    fn error(&self, message: &str) {
        self.api.error(message.to_string(), ToastOptions::new());
    }
}

/// [`Navigator`] backed by the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    nav: dioxus::prelude::Navigator,
}

impl RouterNavigator {
    pub fn new(nav: dioxus::prelude::Navigator) -> Self {
        Self { nav }
    }
}

impl Navigator for RouterNavigator {
    fn push(&self, path: &str) -> Result<(), NavigationError> {
        match self.nav.push(path) {
            Some(failure) => Err(NavigationError(format!("{failure:?}"))),
            None => Ok(()),
        }
    }
}
