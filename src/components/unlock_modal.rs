//! Unlock Modal
//!
//! Shown once every memory card has been flipped.

use dioxus::prelude::*;
use lovenote_core::content::UnlockModal;
use lovenote_ui::{Button, ButtonVariant};

#[component]
pub fn UnlockModalView(
    modal: UnlockModal,
    on_open: EventHandler<()>,
    on_stay: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "unlock-title",
                div { class: "modal__icon", "🔓" }
                h2 { id: "unlock-title", class: "modal__title", "{modal.title}" }
                p { class: "modal__message handwritten", "{modal.message}" }
                div { class: "modal__actions",
                    Button {
                        variant: ButtonVariant::Pill,
                        onclick: move |_| on_open.call(()),
                        "{modal.open_label}"
                    }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| on_stay.call(()),
                        "{modal.stay_label}"
                    }
                }
            }
        }
    }
}
