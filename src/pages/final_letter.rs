//! Final letter scene.
//!
//! The body is markdown from the card content, rendered to HTML once per
//! render.

use dioxus::prelude::*;
use lovenote_core::Event;
use lovenote_ui::{Button, ButtonVariant, DecorCorners};

use crate::context::{use_card, use_card_events};

#[component]
pub fn FinalLetter() -> Element {
    let card = use_card();
    let events = use_card_events();
    let final_letter = card.read().content().final_letter.clone();
    let body = final_letter.body_html();

    rsx! {
        section { class: "scene scene--final",
            DecorCorners {}
            h1 { class: "scene-title", "{final_letter.heading}" }

            article { class: "final-letter",
                div { class: "final-letter__body", dangerous_inner_html: "{body}" }
                p { class: "final-letter__signoff", "{final_letter.signoff}" }
            }

            div { class: "scene-actions",
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| events.send(Event::Restart),
                    "{final_letter.restart_label}"
                }
            }
        }
    }
}
