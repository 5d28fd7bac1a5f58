//! Character-by-character text reveal.
//!
//! A typewriter shows prefixes of length `0, 1, ..., n` on successive ticks
//! and reports completion on the tick after the full text has been shown, so
//! a line of `n` characters needs `n + 2` ticks. Lengths are counted in
//! `char`s, so emoji are never split.

use std::time::Duration;

/// Smallest step a typewriter will run at.
const MIN_STEP: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    step: Duration,
    /// Next prefix length to show
    cursor: usize,
    /// Byte length of the prefix currently shown
    shown: usize,
    complete: bool,
}

impl Typewriter {
    /// Typewriter that advances one character per `step`.
    pub fn stepped(text: impl Into<String>, step: Duration) -> Self {
        Self {
            text: text.into(),
            step: step.max(MIN_STEP),
            cursor: 0,
            shown: 0,
            complete: false,
        }
    }

    /// Typewriter that spreads the whole text over roughly `total`.
    pub fn over(text: impl Into<String>, total: Duration) -> Self {
        let text = text.into();
        let chars = text.chars().count().max(1) as u32;
        Self::stepped(text, total / chars)
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// The prefix revealed so far.
    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance by one step.
    ///
    /// Returns `true` while another tick is needed, `false` once the
    /// typewriter has completed (including every call after completion).
    pub fn tick(&mut self) -> bool {
        if self.complete {
            return false;
        }

        let char_count = self.text.chars().count();
        if self.cursor <= char_count {
            self.shown = self
                .text
                .char_indices()
                .nth(self.cursor)
                .map(|(i, _)| i)
                .unwrap_or(self.text.len());
            self.cursor += 1;
            true
        } else {
            self.complete = true;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_love_in_six_ticks() {
        let mut tw = Typewriter::stepped("LOVE", Duration::from_millis(100));
        let mut seen = Vec::new();
        while tw.tick() {
            seen.push(tw.visible().to_string());
        }
        assert_eq!(seen, vec!["", "L", "LO", "LOV", "LOVE"]);
        assert!(tw.is_complete());
        assert_eq!(tw.visible(), "LOVE");
    }

    #[test]
    fn emoji_are_not_split() {
        let mut tw = Typewriter::stepped("a💕b", Duration::from_millis(10));
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible(), "a");
        tw.tick();
        assert_eq!(tw.visible(), "a💕");
    }

    #[test]
    fn over_divides_duration_by_chars() {
        let tw = Typewriter::over("abcd", Duration::from_millis(2000));
        assert_eq!(tw.step(), Duration::from_millis(500));
    }

    #[test]
    fn empty_text_completes_after_two_ticks() {
        let mut tw = Typewriter::over("", Duration::from_millis(2000));
        assert!(tw.tick());
        assert!(!tw.tick());
        assert!(tw.is_complete());
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn step_has_a_floor() {
        let tw = Typewriter::stepped("x", Duration::ZERO);
        assert_eq!(tw.step(), MIN_STEP);
    }
}
