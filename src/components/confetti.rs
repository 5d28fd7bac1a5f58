//! Confetti Layer
//!
//! Full-window burst shown while the card's confetti is active. Each new
//! burst gets freshly randomised pieces.

use dioxus::prelude::*;
use lovenote_core::particles::DEFAULT_CONFETTI_COUNT;
use lovenote_core::ConfettiBurst;

use crate::context::use_card;

#[component]
pub fn ConfettiLayer() -> Element {
    let card = use_card();
    let bursts = use_memo(move || card.read().confetti_bursts());
    let burst = use_memo(move || {
        let n = bursts();
        tracing::debug!("Generating confetti burst #{}", n);
        ConfettiBurst::generate(&mut rand::rng(), DEFAULT_CONFETTI_COUNT)
    });

    if !card.read().confetti_active() {
        return VNode::empty();
    }

    rsx! {
        div { key: "{bursts}", class: "confetti", "aria-hidden": "true",
            for (i, piece) in burst.read().pieces().iter().enumerate() {
                div {
                    key: "{i}",
                    class: "confetti-piece {piece.shape.class()}",
                    style: "{piece.style()}",
                }
            }
        }
    }
}
