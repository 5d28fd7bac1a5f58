//! Scene-sequencing state machine.
//!
//! [`CardMachine`] owns every flag the card reads: which scene is visible,
//! how far the envelope has opened, the three typewriters, the flip deck,
//! the unlock modal, confetti and toasts. It is a pure reducer:
//! [`CardMachine::handle`] applies one [`Event`] and returns the
//! [`Effect`]s the caller must run. Timers come back as [`Event::Timer`].
//!
//! ## Letter choreography
//!
//! ```text
//! t=0       OpenEnvelope          phase = Opening
//! t=400     RevealLetter          phase = Revealed, signature starts typing
//! t=1400    StartStamp(Love)      "LOVE" types, 100 ms per step
//! t=2200    StartStamp(Stamped)   "STAMPED" types, 100 ms per step
//! ...       all three complete    continue button appears
//! ```
//!
//! ## Cancellation
//!
//! Every scheduled cue carries an epoch. `Restart` bumps the session epoch
//! and every flip bumps the unlock epoch; a cue whose epoch no longer
//! matches is dropped when it fires. Toast expiry is keyed by toast id and
//! never goes stale.

use std::sync::Arc;
use std::time::Duration;

use crate::choreography::{Cue, StampLine, Timings, TypeLine};
use crate::content::CardContent;
use crate::gallery::FlipDeck;
use crate::scene::{LetterPhase, Scene};
use crate::toast::{Toast, ToastId, ToastKind, Toaster};
use crate::typewriter::Typewriter;

/// Input to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Hero button
    OpenGift,
    /// Click on the sealed envelope
    OpenEnvelope,
    /// Continue button on the letter or playlist
    Continue,
    /// Click on a memory card
    FlipCard(u32),
    /// Unlock modal: go to the final letter
    OpenFinalLetter,
    /// Unlock modal: close and stay in the gallery
    StayHere,
    /// Copy the love letter to the clipboard
    CopyLetter,
    /// Outcome of a [`Effect::CopyToClipboard`]
    CopyFinished(Result<(), String>),
    DismissToast(ToastId),
    /// Back to the hero card
    Restart,
    Timer(TimerFired),
}

/// A scheduled cue coming back after its delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub cue: Cue,
    pub epoch: u64,
}

/// Work the caller performs on behalf of the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Deliver `Event::Timer(TimerFired { cue, epoch })` after `after`
    Schedule { after: Duration, cue: Cue, epoch: u64 },
    /// Start a new confetti burst
    LaunchConfetti,
    /// Write text to the clipboard, then report `Event::CopyFinished`
    CopyToClipboard(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardMachine {
    content: Arc<CardContent>,
    timings: Timings,
    confetti_enabled: bool,

    scene: Scene,
    phase: LetterPhase,
    signature: Option<Typewriter>,
    love: Option<Typewriter>,
    stamped: Option<Typewriter>,
    deck: FlipDeck,
    modal_open: bool,
    confetti_active: bool,
    /// Bumped on every burst so the UI regenerates particles
    confetti_bursts: u64,
    toaster: Toaster,

    session: u64,
    unlock_epoch: u64,
}

impl CardMachine {
    pub fn new(content: CardContent, timings: Timings) -> Self {
        let deck = FlipDeck::new(content.gallery.card_ids());
        Self {
            content: Arc::new(content),
            timings,
            confetti_enabled: true,
            scene: Scene::Hero,
            phase: LetterPhase::Sealed,
            signature: None,
            love: None,
            stamped: None,
            deck,
            modal_open: false,
            confetti_active: false,
            confetti_bursts: 0,
            toaster: Toaster::new(),
            session: 0,
            unlock_epoch: 0,
        }
    }

    /// Turn the confetti burst on gift opening on or off.
    pub fn with_confetti(mut self, enabled: bool) -> Self {
        self.confetti_enabled = enabled;
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn content(&self) -> &CardContent {
        &self.content
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn phase(&self) -> LetterPhase {
        self.phase
    }

    /// Signature typed so far. Empty until the letter is revealed.
    pub fn signature_text(&self) -> &str {
        self.signature.as_ref().map(Typewriter::visible).unwrap_or("")
    }

    /// Stamp arc typed so far. Empty until that arc starts.
    pub fn stamp_text(&self, line: StampLine) -> &str {
        self.stamp(line).map(Typewriter::visible).unwrap_or("")
    }

    pub fn is_typed(&self, line: TypeLine) -> bool {
        self.typewriter(line).is_some_and(Typewriter::is_complete)
    }

    /// The letter's continue button is shown.
    pub fn can_continue(&self) -> bool {
        self.is_typed(TypeLine::Signature)
            && self.is_typed(TypeLine::Stamp(StampLine::Love))
            && self.is_typed(TypeLine::Stamp(StampLine::Stamped))
    }

    pub fn deck(&self) -> &FlipDeck {
        &self.deck
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn confetti_active(&self) -> bool {
        self.confetti_active
    }

    pub fn confetti_bursts(&self) -> u64 {
        self.confetti_bursts
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toaster.visible()
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    // ------------------------------------------------------------------
    // Reducer
    // ------------------------------------------------------------------

    /// Apply one event and return the effects to run.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::OpenGift => self.open_gift(),
            Event::OpenEnvelope => self.open_envelope(),
            Event::Continue => self.continue_on(),
            Event::FlipCard(id) => self.flip_card(id),
            Event::OpenFinalLetter => self.open_final_letter(),
            Event::StayHere => {
                self.modal_open = false;
                Vec::new()
            }
            // Only the body goes on the clipboard, not the salutation or signature
            Event::CopyLetter => vec![Effect::CopyToClipboard(self.content.letter.body.clone())],
            Event::CopyFinished(result) => self.copy_finished(result),
            Event::DismissToast(id) => self.dismiss_toast(id),
            Event::Restart => self.restart(),
            Event::Timer(fired) => self.timer_fired(fired),
        }
    }

    fn open_gift(&mut self) -> Vec<Effect> {
        if self.scene != Scene::Hero {
            tracing::debug!(scene = %self.scene, "Ignoring OpenGift outside hero");
            return Vec::new();
        }

        self.enter(Scene::Letter);
        self.reset_letter();

        if !self.confetti_enabled {
            return Vec::new();
        }

        self.confetti_active = true;
        self.confetti_bursts += 1;
        vec![
            Effect::LaunchConfetti,
            self.schedule(self.timings.confetti_lifetime, Cue::ConfettiFinished),
        ]
    }

    fn open_envelope(&mut self) -> Vec<Effect> {
        if self.scene != Scene::Letter || self.phase != LetterPhase::Sealed {
            return Vec::new();
        }

        self.phase = LetterPhase::Opening;
        tracing::debug!("Envelope opening");
        vec![self.schedule(self.timings.letter_reveal, Cue::RevealLetter)]
    }

    fn continue_on(&mut self) -> Vec<Effect> {
        if self.scene == Scene::Letter && !self.can_continue() {
            tracing::debug!("Continue pressed before the letter finished typing");
            return Vec::new();
        }

        match self.scene.after_continue() {
            Some(next) => {
                if next == Scene::Gallery {
                    self.deck.reset();
                    self.modal_open = false;
                }
                self.enter(next);
            }
            None => tracing::debug!(scene = %self.scene, "Continue has no target"),
        }
        Vec::new()
    }

    fn flip_card(&mut self, id: u32) -> Vec<Effect> {
        if self.scene != Scene::Gallery || self.modal_open {
            return Vec::new();
        }

        match self.deck.toggle(id) {
            Ok(flipped) => {
                tracing::debug!(card = id, flipped, "Card toggled");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring flip");
                return Vec::new();
            }
        }

        // Any change in the flipped set cancels a pending unlock
        self.unlock_epoch += 1;

        if self.deck.all_flipped() {
            vec![Effect::Schedule {
                after: self.timings.unlock_modal_delay,
                cue: Cue::RevealUnlockModal,
                epoch: self.unlock_epoch,
            }]
        } else {
            Vec::new()
        }
    }

    fn open_final_letter(&mut self) -> Vec<Effect> {
        if self.scene != Scene::Gallery || !self.modal_open {
            return Vec::new();
        }
        self.modal_open = false;
        self.enter(Scene::FinalLetter);
        Vec::new()
    }

    fn copy_finished(&mut self, result: Result<(), String>) -> Vec<Effect> {
        let (kind, message) = match result {
            Ok(()) => (ToastKind::Success, self.content.toast.copied.clone()),
            Err(reason) => {
                tracing::warn!(%reason, "Copying the letter failed");
                (ToastKind::Error, self.content.toast.error.clone())
            }
        };

        let lifetime = self.timings.toast_lifetime;
        let (id, shown) = self.toaster.push(kind, message, lifetime);
        if shown {
            vec![self.schedule(lifetime, Cue::ExpireToast(id))]
        } else {
            Vec::new()
        }
    }

    fn dismiss_toast(&mut self, id: ToastId) -> Vec<Effect> {
        match self.toaster.dismiss(id) {
            Some(promoted) => promoted
                .iter()
                .map(|t| self.schedule(t.lifetime(), Cue::ExpireToast(t.id())))
                .collect(),
            None => Vec::new(),
        }
    }

    fn restart(&mut self) -> Vec<Effect> {
        self.session += 1;
        self.unlock_epoch += 1;
        self.reset_letter();
        self.deck.reset();
        self.modal_open = false;
        self.confetti_active = false;
        self.enter(Scene::Hero);
        Vec::new()
    }

    fn timer_fired(&mut self, fired: TimerFired) -> Vec<Effect> {
        let current = match fired.cue {
            Cue::RevealUnlockModal => self.unlock_epoch,
            Cue::ExpireToast(_) => fired.epoch,
            _ => self.session,
        };
        if fired.epoch != current {
            tracing::trace!(cue = ?fired.cue, epoch = fired.epoch, current, "Dropping stale cue");
            return Vec::new();
        }

        match fired.cue {
            Cue::RevealLetter => self.reveal_letter(),
            Cue::StartStamp(line) => self.start_stamp(line),
            Cue::TypeTick(line) => self.type_tick(line),
            Cue::RevealUnlockModal => {
                if self.scene == Scene::Gallery && self.deck.all_flipped() {
                    self.modal_open = true;
                    tracing::info!("All memory cards unlocked");
                }
                Vec::new()
            }
            Cue::ConfettiFinished => {
                self.confetti_active = false;
                Vec::new()
            }
            Cue::ExpireToast(id) => self.dismiss_toast(id),
        }
    }

    fn reveal_letter(&mut self) -> Vec<Effect> {
        if self.scene != Scene::Letter || self.phase != LetterPhase::Opening {
            return Vec::new();
        }

        self.phase = LetterPhase::Revealed;
        let signature = Typewriter::over(
            self.content.letter.signature.clone(),
            self.timings.signature_duration,
        );
        let step = signature.step();
        self.signature = Some(signature);

        vec![
            self.schedule(step, Cue::TypeTick(TypeLine::Signature)),
            self.schedule(
                self.timings.stamp_start(StampLine::Love),
                Cue::StartStamp(StampLine::Love),
            ),
            self.schedule(
                self.timings.stamp_start(StampLine::Stamped),
                Cue::StartStamp(StampLine::Stamped),
            ),
        ]
    }

    fn start_stamp(&mut self, line: StampLine) -> Vec<Effect> {
        if self.phase != LetterPhase::Revealed || self.stamp(line).is_some() {
            return Vec::new();
        }

        let text = match line {
            StampLine::Love => self.content.letter.stamp_top.clone(),
            StampLine::Stamped => self.content.letter.stamp_bottom.clone(),
        };
        let typewriter = Typewriter::stepped(text, self.timings.stamp_step);
        let step = typewriter.step();
        match line {
            StampLine::Love => self.love = Some(typewriter),
            StampLine::Stamped => self.stamped = Some(typewriter),
        }

        vec![self.schedule(step, Cue::TypeTick(line.into()))]
    }

    fn type_tick(&mut self, line: TypeLine) -> Vec<Effect> {
        let Some(typewriter) = self.typewriter_mut(line) else {
            return Vec::new();
        };

        if typewriter.tick() {
            let step = typewriter.step();
            return vec![self.schedule(step, Cue::TypeTick(line))];
        }

        tracing::debug!(?line, "Typewriter finished");
        if self.can_continue() {
            tracing::info!("Letter fully written, continue available");
        }
        Vec::new()
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn schedule(&self, after: Duration, cue: Cue) -> Effect {
        Effect::Schedule {
            after,
            cue,
            epoch: self.session,
        }
    }

    fn enter(&mut self, scene: Scene) {
        if self.scene != scene {
            tracing::info!(from = %self.scene, to = %scene, "Scene change");
        }
        self.scene = scene;
    }

    fn reset_letter(&mut self) {
        self.phase = LetterPhase::Sealed;
        self.signature = None;
        self.love = None;
        self.stamped = None;
    }

    fn stamp(&self, line: StampLine) -> Option<&Typewriter> {
        match line {
            StampLine::Love => self.love.as_ref(),
            StampLine::Stamped => self.stamped.as_ref(),
        }
    }

    fn typewriter(&self, line: TypeLine) -> Option<&Typewriter> {
        match line {
            TypeLine::Signature => self.signature.as_ref(),
            TypeLine::Stamp(stamp) => self.stamp(stamp),
        }
    }

    fn typewriter_mut(&mut self, line: TypeLine) -> Option<&mut Typewriter> {
        match line {
            TypeLine::Signature => self.signature.as_mut(),
            TypeLine::Stamp(StampLine::Love) => self.love.as_mut(),
            TypeLine::Stamp(StampLine::Stamped) => self.stamped.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> CardMachine {
        CardMachine::new(CardContent::default(), Timings::default())
    }

    /// Run every scheduled cue immediately, depth first, until none remain.
    fn drain(machine: &mut CardMachine, mut effects: Vec<Effect>) {
        while let Some(effect) = effects.pop() {
            if let Effect::Schedule { cue, epoch, .. } = effect {
                effects.extend(machine.handle(Event::Timer(TimerFired { cue, epoch })));
            }
        }
    }

    fn scheduled(effects: &[Effect]) -> Vec<(Duration, Cue)> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Schedule { after, cue, .. } => Some((*after, *cue)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn open_gift_moves_to_letter_with_confetti() {
        let mut m = machine();
        let effects = m.handle(Event::OpenGift);
        assert_eq!(m.scene(), Scene::Letter);
        assert_eq!(m.phase(), LetterPhase::Sealed);
        assert!(m.confetti_active());
        assert_eq!(m.confetti_bursts(), 1);
        assert!(effects.contains(&Effect::LaunchConfetti));
        assert_eq!(
            scheduled(&effects),
            vec![(Duration::from_millis(4000), Cue::ConfettiFinished)]
        );
    }

    #[test]
    fn confetti_can_be_disabled() {
        let mut m = machine().with_confetti(false);
        let effects = m.handle(Event::OpenGift);
        assert!(effects.is_empty());
        assert!(!m.confetti_active());
        assert_eq!(m.scene(), Scene::Letter);
    }

    #[test]
    fn open_gift_ignored_outside_hero() {
        let mut m = machine();
        m.handle(Event::OpenGift);
        assert!(m.handle(Event::OpenGift).is_empty());
        assert_eq!(m.confetti_bursts(), 1);
    }

    #[test]
    fn envelope_schedules_reveal_once() {
        let mut m = machine();
        m.handle(Event::OpenGift);
        let effects = m.handle(Event::OpenEnvelope);
        assert_eq!(m.phase(), LetterPhase::Opening);
        assert_eq!(
            scheduled(&effects),
            vec![(Duration::from_millis(400), Cue::RevealLetter)]
        );
        assert!(m.handle(Event::OpenEnvelope).is_empty());
    }

    #[test]
    fn reveal_schedules_signature_and_both_stamps() {
        let mut m = machine();
        m.handle(Event::OpenGift);
        m.handle(Event::OpenEnvelope);
        let effects = m.handle(Event::Timer(TimerFired {
            cue: Cue::RevealLetter,
            epoch: 0,
        }));
        assert_eq!(m.phase(), LetterPhase::Revealed);
        let cues = scheduled(&effects);
        assert!(cues.contains(&(Duration::from_millis(1000), Cue::StartStamp(StampLine::Love))));
        assert!(cues.contains(&(Duration::from_millis(1800), Cue::StartStamp(StampLine::Stamped))));
        assert!(cues.iter().any(|(_, c)| *c == Cue::TypeTick(TypeLine::Signature)));
        assert_eq!(m.stamp_text(StampLine::Love), "");
    }

    #[test]
    fn continue_requires_all_typewriters() {
        let mut m = machine();
        m.handle(Event::OpenGift);
        let effects = m.handle(Event::OpenEnvelope);
        m.handle(Event::Continue);
        assert_eq!(m.scene(), Scene::Letter);

        drain(&mut m, effects);
        assert!(m.can_continue());
        assert_eq!(m.stamp_text(StampLine::Love), "LOVE");
        assert_eq!(m.stamp_text(StampLine::Stamped), "STAMPED");
        assert_eq!(m.signature_text(), "With all my love, Always yours 💕");

        m.handle(Event::Continue);
        assert_eq!(m.scene(), Scene::Playlist);
        m.handle(Event::Continue);
        assert_eq!(m.scene(), Scene::Gallery);
    }

    fn machine_in_gallery() -> CardMachine {
        let mut m = machine();
        m.handle(Event::OpenGift);
        let effects = m.handle(Event::OpenEnvelope);
        drain(&mut m, effects);
        m.handle(Event::Continue);
        m.handle(Event::Continue);
        assert_eq!(m.scene(), Scene::Gallery);
        m
    }

    #[test]
    fn flipping_all_cards_schedules_unlock() {
        let mut m = machine_in_gallery();
        assert!(m.handle(Event::FlipCard(1)).is_empty());
        assert!(m.handle(Event::FlipCard(2)).is_empty());
        let effects = m.handle(Event::FlipCard(3));
        assert_eq!(
            scheduled(&effects),
            vec![(Duration::from_millis(3500), Cue::RevealUnlockModal)]
        );
        assert!(!m.modal_open());
        drain(&mut m, effects);
        assert!(m.modal_open());
    }

    #[test]
    fn unflip_cancels_pending_unlock() {
        let mut m = machine_in_gallery();
        m.handle(Event::FlipCard(1));
        m.handle(Event::FlipCard(2));
        let pending = m.handle(Event::FlipCard(3));
        m.handle(Event::FlipCard(3));
        drain(&mut m, pending);
        assert!(!m.modal_open());
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut m = machine_in_gallery();
        assert!(m.handle(Event::FlipCard(99)).is_empty());
        assert_eq!(m.deck().flipped_count(), 0);
    }

    #[test]
    fn stay_here_then_open_final_letter() {
        let mut m = machine_in_gallery();
        m.handle(Event::FlipCard(1));
        m.handle(Event::FlipCard(2));
        let effects = m.handle(Event::FlipCard(3));
        drain(&mut m, effects);

        m.handle(Event::StayHere);
        assert!(!m.modal_open());
        assert_eq!(m.scene(), Scene::Gallery);
        assert!(m.deck().all_flipped());

        // Closed modal cannot be used to leave
        m.handle(Event::OpenFinalLetter);
        assert_eq!(m.scene(), Scene::Gallery);

        m.handle(Event::FlipCard(2));
        let effects = m.handle(Event::FlipCard(2));
        drain(&mut m, effects);
        m.handle(Event::OpenFinalLetter);
        assert_eq!(m.scene(), Scene::FinalLetter);
        assert!(!m.modal_open());
    }

    #[test]
    fn restart_drops_pending_cues() {
        let mut m = machine();
        m.handle(Event::OpenGift);
        let pending = m.handle(Event::OpenEnvelope);
        m.handle(Event::Restart);
        assert_eq!(m.scene(), Scene::Hero);
        assert_eq!(m.phase(), LetterPhase::Sealed);

        m.handle(Event::OpenGift);
        drain(&mut m, pending);
        assert_eq!(m.phase(), LetterPhase::Sealed);
        assert_eq!(m.signature_text(), "");
    }

    #[test]
    fn copy_success_and_failure_toasts() {
        let mut m = machine();
        let effects = m.handle(Event::CopyLetter);
        assert_eq!(
            effects,
            vec![Effect::CopyToClipboard(CardContent::default().letter.body)]
        );

        let effects = m.handle(Event::CopyFinished(Ok(())));
        assert_eq!(scheduled(&effects).len(), 1);
        m.handle(Event::CopyFinished(Err("no display".to_string())));

        let toasts: Vec<_> = m.toasts().map(|t| (t.kind(), t.message().to_string())).collect();
        assert_eq!(
            toasts,
            vec![
                (ToastKind::Success, "Letter copied to clipboard 💌".to_string()),
                (ToastKind::Error, "Couldn't copy the letter 😢".to_string()),
            ]
        );

        drain(&mut m, effects);
        assert_eq!(m.toaster().visible_count(), 1);
    }

    #[test]
    fn toast_expiry_survives_restart() {
        let mut m = machine();
        let effects = m.handle(Event::CopyFinished(Ok(())));
        m.handle(Event::Restart);
        drain(&mut m, effects);
        assert!(m.toaster().is_empty());
    }
}
