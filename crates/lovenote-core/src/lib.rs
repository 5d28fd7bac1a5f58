//! Lovenote Core Library
//!
//! Scene sequencing, choreography and content model for a single-page
//! interactive greeting card.
//!
//! ## Overview
//!
//! The card walks the reader through five scenes:
//!
//! ```text
//! Hero ──open gift──▶ Letter ──continue──▶ Playlist ──continue──▶ Gallery ──open──▶ FinalLetter
//!   ▲                                                                                  │
//!   └──────────────────────────────────── restart ─────────────────────────────────────┘
//! ```
//!
//! Inside the letter scene the envelope opens, the letter fades in, and three
//! typewriters (signature, "LOVE", "STAMPED") type out on staggered timers.
//! The continue button only appears once all three finish.
//!
//! All of this lives in [`CardMachine`], a pure reducer. Timers are expressed
//! as [`Effect::Schedule`] values and executed by the [`Conductor`] on tokio.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lovenote_core::{CardContent, CardMachine, Conductor, Event, Timings};
//!
//! let machine = CardMachine::new(CardContent::default(), Timings::default());
//! let handle = Conductor::spawn(machine, my_clipboard);
//!
//! handle.send(Event::OpenGift);
//! handle.send(Event::OpenEnvelope);
//!
//! let mut rx = handle.subscribe();
//! while rx.changed().await.is_ok() {
//!     println!("scene: {:?}", rx.borrow().scene());
//! }
//! ```

pub mod choreography;
pub mod clipboard;
pub mod conductor;
pub mod content;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod machine;
pub mod meta;
pub mod particles;
pub mod scene;
pub mod toast;
pub mod typewriter;

// Re-exports
pub use choreography::{Cue, StampLine, Timings, TypeLine};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use conductor::{Conductor, ConductorHandle};
pub use content::CardContent;
pub use error::{CardError, CardResult};
pub use gallery::FlipDeck;
pub use machine::{CardMachine, Effect, Event, TimerFired};
pub use meta::{HeadTag, PageMeta};
pub use particles::{ConfettiBurst, ConfettiPiece, ConfettiShape, FloatingParticle};
pub use scene::{LetterPhase, Scene};
pub use toast::{Toast, ToastId, ToastKind, Toaster};
pub use typewriter::Typewriter;
