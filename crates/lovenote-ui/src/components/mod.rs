//! Reusable UI components
//!
//! All components share the pastel stationery look:
//! - Rounded "pill" buttons with a soft pink glow
//! - Floating decorative stars, clouds and hearts
//! - Handwriting font for letters

mod button;
mod decorations;
mod heart_stamp;
mod progress_bar;
mod toast_stack;

pub use button::*;
pub use decorations::*;
pub use heart_stamp::*;
pub use progress_bar::*;
pub use toast_stack::*;
