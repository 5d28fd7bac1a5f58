//! Memory Card
//!
//! Flip card in the gallery: photo on the front, a short message on the
//! back. A photo that fails to load is hidden and the gradient shows
//! through with a heart placeholder.

use dioxus::prelude::*;
use lovenote_core::content::MemoryCard;

#[component]
pub fn MemoryCardTile(card: MemoryCard, flipped: bool, on_flip: EventHandler<u32>) -> Element {
    let mut image_failed = use_signal(|| false);
    let id = card.id;
    let flipped_class = if flipped { " flip-card--flipped" } else { "" };

    rsx! {
        div {
            class: "flip-card{flipped_class}",
            style: "animation-delay: {card.delay_secs}s;",
            role: "button",
            tabindex: "0",
            "aria-pressed": "{flipped}",
            "aria-label": "{card.alt_text()}",
            onclick: move |_| on_flip.call(id),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter || evt.key() == Key::Character(" ".to_string()) {
                    on_flip.call(id);
                }
            },
            div { class: "flip-card__inner",
                div {
                    class: "flip-card__face flip-card__front",
                    style: "background: {card.gradient};",
                    if image_failed() {
                        span { class: "flip-card__placeholder", "💗" }
                    } else {
                        img {
                            src: "{card.image}",
                            alt: "{card.alt_text()}",
                            onerror: move |_| {
                                tracing::warn!("Memory card {} image failed to load", id);
                                image_failed.set(true);
                            },
                        }
                    }
                    span { class: "flip-card__tap", "Tap!" }
                }
                div {
                    class: "flip-card__face flip-card__back",
                    style: "background: {card.gradient};",
                    p { "{card.message}" }
                    span { class: "flip-card__back-hint", "Tap to flip back" }
                }
            }
        }
    }
}
