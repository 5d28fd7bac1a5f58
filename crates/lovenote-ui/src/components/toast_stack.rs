//! Toast Stack
//!
//! Bottom-centre stack of toast notifications. Each toast can be dismissed
//! by clicking it; otherwise it expires on its own.

use dioxus::prelude::*;
use lovenote_core::{Toast, ToastId};

#[component]
pub fn ToastStack(toasts: Vec<Toast>, on_dismiss: EventHandler<ToastId>) -> Element {
    if toasts.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for toast in toasts.iter() {
                {
                    let id = toast.id();
                    rsx! {
                        div {
                            key: "{id.as_u64()}",
                            class: "toast {toast.kind().class()}",
                            onclick: move |_| {
                                tracing::debug!("Toast {} dismissed", id.as_u64());
                                on_dismiss.call(id);
                            },
                            span { class: "toast__icon", "{toast.kind().icon()}" }
                            span { class: "toast__message", "{toast.message()}" }
                        }
                    }
                }
            }
        }
    }
}
