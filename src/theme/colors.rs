//! Color constants for the pastel stationery palette.

#![allow(dead_code)]

// === SURFACES ===
pub const CREAM: &str = "#fff8e7";
pub const PAPER: &str = "#ffffff";
pub const BLUSH: &str = "#ffe4e6";

/// Window background while the webview loads, matches `CREAM`
pub const CREAM_RGBA: (u8, u8, u8, u8) = (255, 248, 231, 255);

// === ROSE (Actions, headings, the stamp) ===
pub const ROSE: &str = "#f04299";
pub const ROSE_GLOW: &str = "rgba(240, 66, 153, 0.35)";
pub const ROSE_DARK: &str = "#b23a4b";

// === TEXT ===
pub const INK: &str = "#1b0d14";
pub const MAUVE: &str = "#9a4c73";

// === ORNAMENTS ===
pub const BUTTER: &str = "#fff7a1";
pub const POWDER: &str = "#b0e0e6";
pub const PETAL: &str = "#ffd1dc";
pub const LILAC: &str = "#cdb4db";
