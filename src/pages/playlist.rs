//! Playlist scene - a short list of songs.

use dioxus::prelude::*;
use lovenote_core::Event;
use lovenote_ui::{Button, ButtonVariant, DecorCorners};

use crate::context::{use_card, use_card_events};

#[component]
pub fn Playlist() -> Element {
    let card = use_card();
    let events = use_card_events();
    let playlist = card.read().content().playlist.clone();

    rsx! {
        section { class: "scene scene--playlist",
            DecorCorners {}
            h1 { class: "scene-title", "{playlist.heading}" }
            p { class: "scene-subtitle", "{playlist.subheading}" }

            ol { class: "track-list",
                for (i, track) in playlist.tracks.iter().enumerate() {
                    li { key: "{i}", class: "track",
                        span { class: "track__number", "{i + 1}" }
                        div {
                            div { class: "track__title", "{track.title}" }
                            div { class: "track__artist", "{track.artist}" }
                        }
                        if let Some(link) = &track.link {
                            a {
                                class: "track__link",
                                href: "{link}",
                                target: "_blank",
                                "aria-label": "Listen to {track.title}",
                                "▶"
                            }
                        }
                    }
                }
            }

            div { class: "scene-actions",
                Button {
                    variant: ButtonVariant::Pill,
                    onclick: move |_| events.send(Event::Continue),
                    "{playlist.continue_label}"
                }
            }
        }
    }
}
