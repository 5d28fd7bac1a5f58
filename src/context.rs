//! Card context for the desktop app.
//!
//! The root component owns the running conductor. Children read the latest
//! machine snapshot and send events through the hooks here.
//!
//! ## Usage
//!
//! ```ignore
//! let card = use_card();
//! let events = use_card_events();
//!
//! if card.read().can_continue() {
//!     events.send(Event::Continue);
//! }
//! ```

use dioxus::prelude::*;
use lovenote_core::{CardMachine, ConductorHandle, Event};

use crate::Settings;

/// Get the card settings chosen on the command line.
pub fn get_settings() -> &'static Settings {
    crate::get_settings()
}

/// Event sender shared through context.
#[derive(Clone)]
pub struct CardEvents(ConductorHandle);

impl CardEvents {
    pub fn new(handle: ConductorHandle) -> Self {
        Self(handle)
    }

    /// Queue an event for the conductor.
    pub fn send(&self, event: Event) {
        if !self.0.send(event) {
            tracing::warn!("Card conductor has stopped; event dropped");
        }
    }

    pub fn handle(&self) -> &ConductorHandle {
        &self.0
    }
}

/// Hook to read the latest card state.
///
/// Re-renders the caller whenever the conductor publishes a new snapshot.
pub fn use_card() -> Signal<CardMachine> {
    use_context::<Signal<CardMachine>>()
}

/// Hook to send events to the card conductor.
pub fn use_card_events() -> CardEvents {
    use_context::<CardEvents>()
}
