//! Lovenote UI Components
//!
//! Dioxus building blocks for the greeting card, in a soft pastel
//! stationery style:
//! - **Rose (#f04299)**: primary actions, headings, the heart stamp
//! - **Mauve (#9a4c73)**: captions and hints
//! - **Cream (#fff8e7)**: card surfaces
//! - **Ink (#1b0d14)**: body text
//!
//! The CSS these components rely on lives in the desktop app's theme.

pub mod components;

pub use components::*;
