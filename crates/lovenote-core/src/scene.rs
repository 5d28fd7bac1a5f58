//! Scenes of the card and the envelope sub-phases.

use std::fmt;

/// One full-screen phase of the card. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Scene {
    /// Greeting card with the "open" button
    #[default]
    Hero,
    /// Envelope that opens into the love letter
    Letter,
    /// Music playlist prompt
    Playlist,
    /// Flip-card memory gallery
    Gallery,
    /// Closing letter with restart
    FinalLetter,
}

impl Scene {
    /// All scenes in the order the reader walks through them.
    pub const ALL: [Scene; 5] = [
        Scene::Hero,
        Scene::Letter,
        Scene::Playlist,
        Scene::Gallery,
        Scene::FinalLetter,
    ];

    /// Scene reached by the "continue" action, if this scene has one.
    ///
    /// Hero and Gallery advance through their own events (open gift, open
    /// final letter), so they return `None` here.
    pub fn after_continue(self) -> Option<Scene> {
        match self {
            Scene::Letter => Some(Scene::Playlist),
            Scene::Playlist => Some(Scene::Gallery),
            Scene::Hero | Scene::Gallery | Scene::FinalLetter => None,
        }
    }

    /// Stable lowercase name, used in logs and CSS classes.
    pub fn slug(self) -> &'static str {
        match self {
            Scene::Hero => "hero",
            Scene::Letter => "letter",
            Scene::Playlist => "playlist",
            Scene::Gallery => "gallery",
            Scene::FinalLetter => "final-letter",
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Envelope state inside [`Scene::Letter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterPhase {
    /// Closed envelope, waiting for a click
    #[default]
    Sealed,
    /// Flap is folding back; the letter is not shown yet
    Opening,
    /// Letter is visible and the typewriters are running
    Revealed,
}

impl LetterPhase {
    pub fn is_envelope_open(self) -> bool {
        !matches!(self, LetterPhase::Sealed)
    }

    pub fn is_letter_shown(self) -> bool {
        matches!(self, LetterPhase::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_chain() {
        assert_eq!(Scene::Letter.after_continue(), Some(Scene::Playlist));
        assert_eq!(Scene::Playlist.after_continue(), Some(Scene::Gallery));
        assert_eq!(Scene::Hero.after_continue(), None);
        assert_eq!(Scene::Gallery.after_continue(), None);
        assert_eq!(Scene::FinalLetter.after_continue(), None);
    }

    #[test]
    fn scenes_are_ordered() {
        let mut sorted = Scene::ALL;
        sorted.sort();
        assert_eq!(sorted, Scene::ALL);
        assert_eq!(Scene::default(), Scene::Hero);
    }

    #[test]
    fn letter_phase_flags() {
        assert!(!LetterPhase::Sealed.is_envelope_open());
        assert!(LetterPhase::Opening.is_envelope_open());
        assert!(!LetterPhase::Opening.is_letter_shown());
        assert!(LetterPhase::Revealed.is_letter_shown());
    }

    #[test]
    fn slug_display() {
        assert_eq!(Scene::FinalLetter.to_string(), "final-letter");
    }
}
