//! Transient notifications with timed auto-dismiss.
//!
//! [`ToastProvider`] owns the stack and exposes it through context;
//! call [`use_toast`] from any descendant to push messages.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastOptions {
    pub duration: Duration,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(4),
        }
    }
}

/// Plain toast state, kept separate from the signal so it can be
/// exercised without a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle for pushing toasts, available through context under a
/// [`ToastProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct ToastApi {
    stack: Signal<ToastStack>,
}

impl ToastApi {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.show(ToastKind::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.show(ToastKind::Error, message, options);
    }

    pub fn dismiss(&self, id: u64) {
        let mut stack = self.stack;
        stack.write().dismiss(id);
    }

    fn show(&self, kind: ToastKind, message: String, options: ToastOptions) {
        let mut stack = self.stack;
        let id = stack.write().push(kind, message);
        let duration = options.duration;

        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(duration).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(duration).await;

            let mut stack = stack;
            stack.write().dismiss(id);
        });
    }
}

/// Get the toast handle. Panics outside a [`ToastProvider`].
pub fn use_toast() -> ToastApi {
    use_context::<ToastApi>()
}

/// Provider component that owns the toast stack and renders the
/// viewport on top of its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let stack = use_signal(ToastStack::default);
    use_context_provider(|| ToastApi { stack });

    rsx! {
        {children}
        ToastViewport {}
    }
}

#[component]
fn ToastViewport() -> Element {
    let api = use_toast();
    let toasts = api.stack.read().toasts().to_vec();

    rsx! {
        div {
            class: "toast-viewport",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "{toast.kind.class()}",
                    onclick: move |_| api.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
