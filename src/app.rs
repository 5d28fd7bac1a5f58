use dioxus::prelude::*;
use lovenote_core::{CardMachine, Conductor, Event, Scene};
use lovenote_ui::ToastStack;

use crate::clipboard::SystemClipboard;
use crate::components::{ConfettiLayer, Footer, HeadMeta};
use crate::context::{get_settings, use_card, use_card_events, CardEvents};
use crate::pages::{FinalLetter, Gallery, Hero, Letter, Playlist};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Starts the card conductor, mirrors its snapshots into a signal, and
/// provides both to every scene.
#[component]
pub fn App() -> Element {
    let events = use_hook(|| {
        let settings = get_settings();
        let machine = CardMachine::new(settings.content.clone(), settings.timings)
            .with_confetti(settings.confetti);
        let (conductor, handle) = Conductor::new(machine, SystemClipboard);
        spawn(conductor.run());
        tracing::info!("Card conductor started");
        CardEvents::new(handle)
    });

    let mut card: Signal<CardMachine> = use_signal(|| events.handle().snapshot());

    use_context_provider(|| card);
    use_context_provider(|| events.clone());

    // Mirror conductor snapshots into the signal
    use_hook(|| {
        let mut snapshots = events.handle().subscribe();
        spawn(async move {
            while snapshots.changed().await.is_ok() {
                let next = snapshots.borrow_and_update().clone();
                if next.scene() != card.peek().scene() {
                    tracing::debug!("Scene: {}", next.scene());
                }
                card.set(next);
            }
            tracing::debug!("Card conductor closed");
        })
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        HeadMeta {}
        main { class: "app-main",
            SceneView {}
            Footer {}
        }
        ConfettiLayer {}
        Toasts {}
    }
}

/// Renders whichever scene the card is on.
#[component]
fn SceneView() -> Element {
    let card = use_card();
    let scene = card.read().scene();

    match scene {
        Scene::Hero => rsx! { Hero {} },
        Scene::Letter => rsx! { Letter {} },
        Scene::Playlist => rsx! { Playlist {} },
        Scene::Gallery => rsx! { Gallery {} },
        Scene::FinalLetter => rsx! { FinalLetter {} },
    }
}

#[component]
fn Toasts() -> Element {
    let card = use_card();
    let events = use_card_events();
    let toasts: Vec<_> = card.read().toasts().cloned().collect();

    rsx! {
        ToastStack {
            toasts,
            on_dismiss: move |id| events.send(Event::DismissToast(id)),
        }
    }
}
