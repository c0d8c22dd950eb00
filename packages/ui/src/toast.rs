//! Notification context: short-lived toasts rendered above the page.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Queue a notification; it dismisses itself after five seconds.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let id = {
        let mut state = toasts.write();
        let id = state.next_id;
        state.next_id += 1;
        state.entries.push(Toast {
            id,
            message: message.into(),
            level,
        });
        id
    };

    let mut toasts = *toasts;
    spawn(async move {
        sleep(Duration::from_secs(5)).await;
        toasts.write().entries.retain(|t| t.id != id);
    });
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

fn toast_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast toast-success",
        ToastLevel::Error => "toast toast-error",
    }
}

/// Provides the toast context and renders the toast container.
/// Place this once near the root of the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        div {
            class: "toast-container",
            for toast in toasts().entries {
                div {
                    key: "{toast.id}",
                    class: toast_class(toast.level),
                    "{toast.message}"
                }
            }
        }
    }
}
