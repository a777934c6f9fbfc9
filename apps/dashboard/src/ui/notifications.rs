use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
            Self::Error => ("border-red-500 bg-red-50", "text-red-700"),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub on_close: EventHandler<MouseEvent>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let (container_class, accent_text) = props.kind.accent_classes();

    rsx! {
        div { class: format!("pointer-events-auto rounded-lg border-l-4 p-4 shadow-lg {}", container_class),
            div { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: format!("text-sm font-semibold {}", accent_text), "{props.title}" }
                    p { class: "text-xs text-slate-700", "{props.message}" }
                }
                button {
                    class: "rounded bg-slate-200 px-2 py-1 text-[11px] text-slate-600 transition hover:bg-slate-300",
                    onclick: move |evt| props.on_close.call(evt),
                    "Dismiss"
                }
            }
        }
    }
}

/// Overlay stacking operation notices and load failures in the corner.
#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let snapshot = use_app_state().read().clone();

    let mut toasts: Vec<Element> = Vec::new();

    if let Some(notice) = snapshot.operation.notice.clone() {
        let title = snapshot
            .operation
            .context
            .clone()
            .unwrap_or_else(|| "Done".to_string());
        toasts.push(rsx! {
            Toast {
                key: "operation-notice",
                kind: ToastKind::Success,
                title,
                message: notice,
                on_close: move |_| actions.clear_operation_status(),
            }
        });
    }

    if let Some(error) = snapshot.queue.error.clone() {
        toasts.push(rsx! {
            Toast {
                key: "queue-error",
                kind: ToastKind::Error,
                title: "Case queue unavailable".to_string(),
                message: error,
                on_close: move |_| actions.set_queue_error(None),
            }
        });
    }

    if toasts.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "pointer-events-none fixed right-4 top-4 z-50 flex w-80 flex-col gap-3",
            for toast in toasts {
                {toast}
            }
        }
    }
}
