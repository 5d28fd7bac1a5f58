//! App-level components that read the card context.
//!
//! Context-free building blocks live in the `lovenote-ui` crate.

mod confetti;
mod footer;
mod head_meta;
mod memory_card;
mod unlock_modal;

pub use confetti::ConfettiLayer;
pub use footer::Footer;
pub use head_meta::HeadMeta;
pub use memory_card::MemoryCardTile;
pub use unlock_modal::UnlockModalView;
