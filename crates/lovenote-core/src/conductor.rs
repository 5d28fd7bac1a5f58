//! Async runner for the card state machine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  Event   ┌─────────────────────────────┐  snapshot  ┌──────────┐
//! │ UI / handles │ ───────▶ │ Conductor::run              │ ─────────▶ │ watch rx │
//! └──────────────┘  (mpsc)  │  machine.handle(event)      │            └──────────┘
//!        ▲                  │  Schedule → sleep task ─┐   │
//!        │                  │  CopyToClipboard → clip │   │
//!        │                  └─────────────────────────┼───┘
//!        └──────────── Event::Timer after delay ──────┘
//! ```
//!
//! All state changes go through the single event loop. Timer tasks only post
//! events back into it, so nothing else ever touches the machine.

use std::collections::VecDeque;

use tokio::sync::{mpsc, watch};

use crate::clipboard::Clipboard;
use crate::machine::{CardMachine, Effect, Event, TimerFired};

/// Owns the machine and clipboard; consumed by [`Conductor::run`].
pub struct Conductor<C: Clipboard> {
    machine: CardMachine,
    clipboard: C,
    events_rx: mpsc::UnboundedReceiver<Event>,
    /// Weak so the loop ends once every handle and pending timer is gone
    events_tx: mpsc::WeakUnboundedSender<Event>,
    snapshot_tx: watch::Sender<CardMachine>,
}

/// Cheap, cloneable front door to a running conductor.
#[derive(Clone)]
pub struct ConductorHandle {
    events_tx: mpsc::UnboundedSender<Event>,
    snapshot_rx: watch::Receiver<CardMachine>,
}

impl<C: Clipboard> Conductor<C> {
    /// Build a conductor and its handle without starting it.
    ///
    /// Drive it with [`Conductor::run`] on whatever executor the caller
    /// uses (the desktop app spawns it on the Dioxus runtime).
    pub fn new(machine: CardMachine, clipboard: C) -> (Self, ConductorHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(machine.clone());

        let conductor = Self {
            machine,
            clipboard,
            events_rx,
            events_tx: events_tx.downgrade(),
            snapshot_tx,
        };
        let handle = ConductorHandle {
            events_tx,
            snapshot_rx,
        };
        (conductor, handle)
    }

    /// Build a conductor and run it on the current tokio runtime.
    pub fn spawn(machine: CardMachine, clipboard: C) -> ConductorHandle {
        let (conductor, handle) = Self::new(machine, clipboard);
        tokio::spawn(conductor.run());
        handle
    }

    /// Process events until every sender is dropped.
    pub async fn run(mut self) {
        tracing::debug!("Conductor started");
        while let Some(event) = self.events_rx.recv().await {
            self.apply(event);
        }
        tracing::debug!("Conductor stopped");
    }

    fn apply(&mut self, event: Event) {
        let mut pending = VecDeque::from([event]);

        while let Some(event) = pending.pop_front() {
            for effect in self.machine.handle(event) {
                match effect {
                    Effect::Schedule { after, cue, epoch } => {
                        let Some(tx) = self.events_tx.upgrade() else {
                            tracing::debug!(?cue, "No live handles, not scheduling");
                            continue;
                        };
                        tokio::spawn(async move {
                            tokio::time::sleep(after).await;
                            let _ = tx.send(Event::Timer(TimerFired { cue, epoch }));
                        });
                    }
                    Effect::LaunchConfetti => {
                        tracing::debug!(burst = self.machine.confetti_bursts(), "Confetti launched");
                    }
                    Effect::CopyToClipboard(text) => {
                        let result = self.clipboard.set_text(&text).map_err(|e| e.to_string());
                        pending.push_back(Event::CopyFinished(result));
                    }
                }
            }
        }

        self.snapshot_tx.send_replace(self.machine.clone());
    }
}

impl ConductorHandle {
    /// Queue an event. Returns `false` if the conductor has stopped.
    pub fn send(&self, event: Event) -> bool {
        self.events_tx.send(event).is_ok()
    }

    /// Receiver that wakes on every processed event.
    pub fn subscribe(&self) -> watch::Receiver<CardMachine> {
        self.snapshot_rx.clone()
    }

    /// Latest machine state.
    pub fn snapshot(&self) -> CardMachine {
        self.snapshot_rx.borrow().clone()
    }
}
