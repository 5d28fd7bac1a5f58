//! Gallery scene - memory cards to flip.
//!
//! Flipping every card opens the unlock modal after a short pause. From the
//! modal the final letter is one click away.

use dioxus::prelude::*;
use lovenote_core::Event;
use lovenote_ui::{DecorCorners, ProgressBar};

use crate::components::{MemoryCardTile, UnlockModalView};
use crate::context::{use_card, use_card_events};

#[component]
pub fn Gallery() -> Element {
    let card = use_card();
    let events = use_card_events();
    let flip_events = events.clone();
    let on_flip = use_callback(move |id: u32| flip_events.send(Event::FlipCard(id)));

    let snapshot = card.read();
    let gallery = snapshot.content().gallery.clone();
    let deck = snapshot.deck().clone();
    let modal_open = snapshot.modal_open();
    drop(snapshot);

    let label = format!("{} / {} memories", deck.flipped_count(), deck.len());
    let open_events = events.clone();

    rsx! {
        section { class: "scene scene--gallery",
            DecorCorners {}
            h1 { class: "scene-title", "{gallery.heading}" }
            p { class: "scene-subtitle", "{gallery.subheading}" }

            div { class: "memory-grid",
                for memory in gallery.cards.iter() {
                    MemoryCardTile {
                        key: "{memory.id}",
                        card: memory.clone(),
                        flipped: deck.is_flipped(memory.id),
                        on_flip,
                    }
                }
            }

            p { class: "gallery-hint", "{gallery.hint}" }
            ProgressBar { percent: deck.progress_percent(), label }
        }

        if modal_open {
            UnlockModalView {
                modal: gallery.modal.clone(),
                on_open: move |_| open_events.send(Event::OpenFinalLetter),
                on_stay: move |_| events.send(Event::StayHere),
            }
        }
    }
}
