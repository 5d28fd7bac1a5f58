//! Animation timings and timer cues.
//!
//! Every delay the card waits on is listed in [`Timings`]. The state machine
//! never sleeps itself; it emits a [`Cue`] to be delivered after a delay and
//! reacts when that cue comes back.

use std::time::Duration;

use crate::error::{CardError, CardResult};
use crate::toast::ToastId;

/// Envelope open → letter shown
const LETTER_REVEAL_MS: u64 = 400;
/// Letter shown → "LOVE" starts typing
const LOVE_STAMP_DELAY_MS: u64 = 1000;
/// "LOVE" starts → "STAMPED" starts
const STAMPED_STAGGER_MS: u64 = 800;
/// One character step of the stamp typewriters
const STAMP_STEP_MS: u64 = 100;
/// Whole signature line
const SIGNATURE_DURATION_MS: u64 = 2000;
/// Last card flipped → unlock modal, leaves time to read the back of the card
const UNLOCK_MODAL_DELAY_MS: u64 = 3500;
const CONFETTI_LIFETIME_MS: u64 = 4000;
const TOAST_LIFETIME_MS: u64 = 3000;

/// Slowest allowed `--speed`; keeps every delay well inside `Duration`
pub const MAX_SPEED_FACTOR: f64 = 100.0;

/// Which arc of the heart stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StampLine {
    /// Top arc
    Love,
    /// Bottom arc
    Stamped,
}

/// A line of text that is typed out character by character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeLine {
    Signature,
    Stamp(StampLine),
}

impl From<StampLine> for TypeLine {
    fn from(line: StampLine) -> Self {
        TypeLine::Stamp(line)
    }
}

/// Timer-driven transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Envelope finished opening, show the letter
    RevealLetter,
    /// Begin typing one of the stamp arcs
    StartStamp(StampLine),
    /// Advance a running typewriter by one step
    TypeTick(TypeLine),
    /// Every card has stayed flipped long enough
    RevealUnlockModal,
    /// The confetti burst has fallen off screen
    ConfettiFinished,
    /// Auto-dismiss a toast
    ExpireToast(ToastId),
}

/// Delays used by the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub letter_reveal: Duration,
    pub love_stamp_delay: Duration,
    pub stamped_stagger: Duration,
    pub stamp_step: Duration,
    pub signature_duration: Duration,
    pub unlock_modal_delay: Duration,
    pub confetti_lifetime: Duration,
    pub toast_lifetime: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            letter_reveal: Duration::from_millis(LETTER_REVEAL_MS),
            love_stamp_delay: Duration::from_millis(LOVE_STAMP_DELAY_MS),
            stamped_stagger: Duration::from_millis(STAMPED_STAGGER_MS),
            stamp_step: Duration::from_millis(STAMP_STEP_MS),
            signature_duration: Duration::from_millis(SIGNATURE_DURATION_MS),
            unlock_modal_delay: Duration::from_millis(UNLOCK_MODAL_DELAY_MS),
            confetti_lifetime: Duration::from_millis(CONFETTI_LIFETIME_MS),
            toast_lifetime: Duration::from_millis(TOAST_LIFETIME_MS),
        }
    }
}

impl Timings {
    /// Multiply every delay by `factor`.
    ///
    /// `0.5` plays the card twice as fast. The factor must be finite,
    /// strictly positive and at most [`MAX_SPEED_FACTOR`].
    pub fn scaled(&self, factor: f64) -> CardResult<Self> {
        if !factor.is_finite() || factor <= 0.0 || factor > MAX_SPEED_FACTOR {
            return Err(CardError::InvalidTiming(factor));
        }
        let scale = |d: Duration| {
            Duration::try_from_secs_f64(d.as_secs_f64() * factor)
                .map_err(|_| CardError::InvalidTiming(factor))
        };
        Ok(Self {
            letter_reveal: scale(self.letter_reveal)?,
            love_stamp_delay: scale(self.love_stamp_delay)?,
            stamped_stagger: scale(self.stamped_stagger)?,
            stamp_step: scale(self.stamp_step)?,
            signature_duration: scale(self.signature_duration)?,
            unlock_modal_delay: scale(self.unlock_modal_delay)?,
            confetti_lifetime: scale(self.confetti_lifetime)?,
            toast_lifetime: scale(self.toast_lifetime)?,
        })
    }

    /// Delay between the letter being shown and a stamp arc starting to type.
    pub fn stamp_start(&self, line: StampLine) -> Duration {
        match line {
            StampLine::Love => self.love_stamp_delay,
            StampLine::Stamped => self.love_stamp_delay + self.stamped_stagger,
        }
    }
}
