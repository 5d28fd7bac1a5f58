//! Card content: every string and image path the card shows.
//!
//! Content is plain data. It ships with a built-in default card and can be
//! replaced by a JSON file; sections missing from the file fall back to the
//! defaults.
//!
//! ```json
//! {
//!   "letter": { "salutation": "Hi you," },
//!   "gallery": { "cards": [ { "id": 1, "image": "/a.png", "message": "hey" } ] }
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};
use crate::meta::PageMeta;

/// Number of message characters kept in a memory card's alt text.
const ALT_TEXT_PREVIEW_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardContent {
    pub meta: PageMeta,
    pub hero: HeroContent,
    pub letter: LetterContent,
    pub playlist: PlaylistContent,
    pub gallery: GalleryContent,
    pub final_letter: FinalLetterContent,
    pub toast: ToastMessages,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    /// Title bar label
    pub badge: String,
    pub greeting: String,
    pub lines: Vec<String>,
    pub call_to_action: String,
    pub button_label: String,
    pub signoff: String,
    pub intro_image: String,
    pub corner_image: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            badge: "A Note for You".to_string(),
            greeting: "Dear, Divya".to_string(),
            lines: vec![
                "Happy propose day. Since I can not be with you, please accept this virtual card."
                    .to_string(),
            ],
            call_to_action: "Click below to see what it is! ✨".to_string(),
            button_label: "Open My Heart 💖".to_string(),
            signoff: "Made with love, only for you 💕".to_string(),
            intro_image: "/assets/intro-DzUiguR4.webp".to_string(),
            corner_image: "/assets/intro-BrJOTFFc.webp".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterContent {
    pub heading: String,
    pub subheading: String,
    pub envelope_hint: String,
    pub delivery_badge: String,
    pub header_label: String,
    pub salutation: String,
    pub body: String,
    pub signature: String,
    /// Top arc of the heart stamp
    pub stamp_top: String,
    /// Bottom arc of the heart stamp
    pub stamp_bottom: String,
    pub decoration_image: String,
    pub copy_label: String,
    pub continue_label: String,
}

impl Default for LetterContent {
    fn default() -> Self {
        Self {
            heading: "A Love Letter 💌".to_string(),
            subheading: "From my heart to yours".to_string(),
            envelope_hint: "Click to open the envelope".to_string(),
            delivery_badge: "Special Delivery 💌".to_string(),
            header_label: "My Sweetest Love".to_string(),
            salutation: "My dearest Divya,".to_string(),
            body: "You make me the happiest person. You are perfect and everything I have \
                   ever wanted. Having you in my life is the best feeling for me. I want to \
                   spend every day for the rest of my life with you, and I'm grateful for you \
                   being so much patient with me. I will be with you forever, under any \
                   circumstances."
                .to_string(),
            signature: "With all my love, Always yours 💕".to_string(),
            stamp_top: "LOVE".to_string(),
            stamp_bottom: "STAMPED".to_string(),
            decoration_image: "/assets/letter-C680mUtz.webp".to_string(),
            copy_label: "Copy letter 📋".to_string(),
            continue_label: "Continue To See More ✨".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistContent {
    pub heading: String,
    pub subheading: String,
    pub tracks: Vec<Track>,
    pub continue_label: String,
}

impl Default for PlaylistContent {
    fn default() -> Self {
        let track = |title: &str, artist: &str| Track {
            title: title.to_string(),
            artist: artist.to_string(),
            link: None,
        };
        Self {
            heading: "A Little Playlist For You 🎵".to_string(),
            subheading: "Press play and keep going".to_string(),
            tracks: vec![
                track("Perfect", "Ed Sheeran"),
                track("All of Me", "John Legend"),
                track("Until I Found You", "Stephen Sanchez"),
            ],
            continue_label: "Continue 🎶".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryCard {
    pub id: u32,
    pub image: String,
    pub message: String,
    /// CSS gradient for the front overlay
    #[serde(default = "default_gradient")]
    pub gradient: String,
    /// Entrance animation delay in seconds
    #[serde(default)]
    pub delay_secs: f32,
}

fn default_gradient() -> String {
    "linear-gradient(135deg, #fbcfe8, #e9d5ff)".to_string()
}

impl MemoryCard {
    /// Accessible description: id plus the start of the message.
    pub fn alt_text(&self) -> String {
        let preview: String = self.message.chars().take(ALT_TEXT_PREVIEW_CHARS).collect();
        format!("Memory card {} - {}...", self.id, preview)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockModal {
    pub title: String,
    pub message: String,
    pub open_label: String,
    pub stay_label: String,
}

impl Default for UnlockModal {
    fn default() -> Self {
        Self {
            title: "All Messages Unlocked!".to_string(),
            message: "With love your, Hijraboii".to_string(),
            open_label: "Open the Final Letter 💌".to_string(),
            stay_label: "Stay here a bit longer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryContent {
    pub heading: String,
    pub subheading: String,
    pub hint: String,
    pub cards: Vec<MemoryCard>,
    pub modal: UnlockModal,
}

impl Default for GalleryContent {
    fn default() -> Self {
        Self {
            heading: "Some Special Cards For You".to_string(),
            subheading: "Click each card to reveal a special message!".to_string(),
            hint: "Start by tapping any card above ✨".to_string(),
            cards: vec![
                MemoryCard {
                    id: 1,
                    image: "/assets/pic1.png".to_string(),
                    message: "I Love u Divya 💕".to_string(),
                    gradient: "linear-gradient(135deg, #fbcfe8, #e9d5ff)".to_string(),
                    delay_secs: 0.0,
                },
                MemoryCard {
                    id: 2,
                    image: "/assets/pic2.png".to_string(),
                    message: "You don't even have to try, you just make everything around you feel lighter, warmer, better. ✨".to_string(),
                    gradient: "linear-gradient(135deg, #bfdbfe, #99f6e4)".to_string(),
                    delay_secs: 0.2,
                },
                MemoryCard {
                    id: 3,
                    image: "/assets/pic3.png".to_string(),
                    message: "The little things you do, your expressions, your laughter, the way you talk, they've all become my favorite details. 🌸".to_string(),
                    gradient: "linear-gradient(135deg, #fef08a, #fed7aa)".to_string(),
                    delay_secs: 0.4,
                },
            ],
            modal: UnlockModal::default(),
        }
    }
}

impl GalleryContent {
    pub fn card_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.cards.iter().map(|c| c.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalLetterContent {
    pub heading: String,
    /// Markdown; rendered with [`FinalLetterContent::body_html`]
    pub body_markdown: String,
    pub signoff: String,
    pub restart_label: String,
}

impl Default for FinalLetterContent {
    fn default() -> Self {
        Self {
            heading: "One Last Letter 💌".to_string(),
            body_markdown: "You made it to the end, but this is only the *beginning*.\n\n\
                            Every card, every song and every word here was made thinking of \
                            you. Whatever the distance, **you are my favourite place**.\n\n\
                            Will you keep choosing me, the way I keep choosing you?"
                .to_string(),
            signoff: "Forever yours, Hijraboii".to_string(),
            restart_label: "Read it all again 💞".to_string(),
        }
    }
}

impl FinalLetterContent {
    /// Render the markdown body to HTML.
    pub fn body_html(&self) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(&self.body_markdown, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastMessages {
    pub copied: String,
    pub error: String,
}

impl Default for ToastMessages {
    fn default() -> Self {
        Self {
            copied: "Letter copied to clipboard 💌".to_string(),
            error: "Couldn't copy the letter 😢".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub occasion: String,
    pub made_with: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            occasion: "National Princess Day".to_string(),
            made_with: "Made with 💕".to_string(),
        }
    }
}

impl CardContent {
    /// Load and validate a card from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let content = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded card content");
        Ok(content)
    }

    /// Parse and validate a card from a JSON string.
    pub fn from_json(raw: &str) -> CardResult<Self> {
        let content: CardContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the rules the state machine relies on.
    pub fn validate(&self) -> CardResult<()> {
        if self.gallery.cards.is_empty() {
            return Err(CardError::InvalidContent("gallery has no cards".to_string()));
        }

        let mut seen = HashSet::new();
        for card in &self.gallery.cards {
            if !seen.insert(card.id) {
                return Err(CardError::InvalidContent(format!(
                    "duplicate gallery card id {}",
                    card.id
                )));
            }
        }

        if self.letter.stamp_top.trim().is_empty() || self.letter.stamp_bottom.trim().is_empty() {
            return Err(CardError::InvalidContent("stamp text is empty".to_string()));
        }
        if self.letter.signature.trim().is_empty() {
            return Err(CardError::InvalidContent("letter signature is empty".to_string()));
        }
        if self.letter.body.trim().is_empty() {
            return Err(CardError::InvalidContent("letter body is empty".to_string()));
        }

        Ok(())
    }
}
