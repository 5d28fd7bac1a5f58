//! Hero scene - the closed greeting card.
//!
//! A little window-framed card with the greeting and the "open" button,
//! over a field of drifting particles.

use dioxus::prelude::*;
use lovenote_core::particles::DEFAULT_FLOATING_COUNT;
use lovenote_core::{Event, FloatingParticle};
use lovenote_ui::{Button, ButtonVariant, DecorCorners, ParticleField};

use crate::context::{use_card, use_card_events};

#[component]
pub fn Hero() -> Element {
    let card = use_card();
    let events = use_card_events();
    let particles = use_hook(|| FloatingParticle::field(&mut rand::rng(), DEFAULT_FLOATING_COUNT));
    let hero = card.read().content().hero.clone();

    rsx! {
        section { class: "scene scene--hero",
            ParticleField { particles }
            DecorCorners {}

            div { class: "hero-card",
                div { class: "window-bar", "aria-hidden": "true",
                    span { class: "window-dot" }
                    span { class: "window-dot" }
                    span { class: "window-dot" }
                }
                div { class: "hero-body",
                    img { class: "hero-image float-slow", src: "{hero.intro_image}", alt: "" }
                    div { class: "hero-badge", "{hero.badge}" }
                    h1 { class: "hero-greeting", "{hero.greeting}" }
                    for (i, line) in hero.lines.iter().enumerate() {
                        p { key: "{i}", class: "hero-line", "{line}" }
                    }
                    p { class: "hero-cta", "{hero.call_to_action}" }
                    Button {
                        variant: ButtonVariant::Pill,
                        class: "pulse".to_string(),
                        onclick: move |_| events.send(Event::OpenGift),
                        "{hero.button_label}"
                    }
                    p { class: "hero-signoff", "{hero.signoff}" }
                }
                img { class: "hero-corner bounce-slow", src: "{hero.corner_image}", alt: "" }
            }
        }
    }
}
