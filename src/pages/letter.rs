//! Letter scene - envelope, love letter, and the typed signature.
//!
//! Clicking the sealed envelope opens the flap; shortly after, the letter
//! slides out and the signature and stamp start typing themselves in.

use dioxus::prelude::*;
use lovenote_core::{Event, StampLine, TypeLine};
use lovenote_ui::{Button, ButtonVariant, DecorCorners, HeartStamp};

use crate::context::{use_card, use_card_events};

#[component]
pub fn Letter() -> Element {
    let card = use_card();
    let phase = card.read().phase();
    let letter = card.read().content().letter.clone();

    rsx! {
        section { class: "scene scene--letter",
            DecorCorners {}
            h1 { class: "scene-title", "{letter.heading}" }
            p { class: "scene-subtitle", "{letter.subheading}" }

            if phase.is_letter_shown() {
                LetterSheet {}
            } else {
                Envelope { open: phase.is_envelope_open() }
            }
        }
    }
}

#[component]
fn Envelope(open: bool) -> Element {
    let card = use_card();
    let events = use_card_events();
    let letter = card.read().content().letter.clone();
    let open_class = if open { " envelope--open" } else { "" };

    rsx! {
        div { class: "envelope-wrap",
            div {
                class: "envelope{open_class}",
                role: "button",
                tabindex: "0",
                "aria-label": "Open the envelope",
                onclick: move |_| events.send(Event::OpenEnvelope),
                div { class: "envelope__flap" }
                div { class: "envelope__seal", "💌" }
            }
            if !open {
                p { class: "envelope__hint", "{letter.envelope_hint}" }
            }
            span { class: "delivery-badge", "{letter.delivery_badge}" }
        }
    }
}

#[component]
fn LetterSheet() -> Element {
    let card = use_card();
    let events = use_card_events();

    let snapshot = card.read();
    let letter = snapshot.content().letter.clone();
    let signature = snapshot.signature_text().to_string();
    let signature_done = snapshot.is_typed(TypeLine::Signature);
    let stamp_top = snapshot.stamp_text(StampLine::Love).to_string();
    let stamp_bottom = snapshot.stamp_text(StampLine::Stamped).to_string();
    let can_continue = snapshot.can_continue();
    drop(snapshot);

    let copy_events = events.clone();

    rsx! {
        article { class: "letter",
            img { class: "letter__decoration float", src: "{letter.decoration_image}", alt: "" }
            div { class: "letter__header",
                span { class: "letter__label", "{letter.header_label}" }
                Button {
                    variant: ButtonVariant::Soft,
                    aria_label: "Copy the letter".to_string(),
                    onclick: move |_| copy_events.send(Event::CopyLetter),
                    "{letter.copy_label}"
                }
            }
            p { class: "letter__salutation", "{letter.salutation}" }
            p { class: "letter__body", "{letter.body}" }
            p { class: "letter__signature",
                "{signature}"
                if signature_done {
                    span { class: "letter__sparkle", "✨" }
                } else {
                    span { class: "typing-cursor" }
                }
            }
            HeartStamp { top: stamp_top, bottom: stamp_bottom }
        }

        if can_continue {
            div { class: "scene-actions",
                Button {
                    variant: ButtonVariant::Pill,
                    onclick: move |_| events.send(Event::Continue),
                    "{letter.continue_label}"
                }
            }
        }
    }
}
