//! Floating Decorations
//!
//! Small pastel SVG ornaments (stars, clouds, hearts, sparkles) that drift
//! around every scene, plus the background particle field of the hero card.

use dioxus::prelude::*;
use lovenote_core::FloatingParticle;

/// Ornament shapes, each a single 24x24 path
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DecorShape {
    Star,
    Cloud,
    Heart,
    Sparkle,
}

impl DecorShape {
    /// SVG path data in a 24x24 view box
    pub fn path(&self) -> &'static str {
        match self {
            DecorShape::Star => "M12 2l2.39 4.84L19 8.1l-3.5 3.41.82 5.04L12 15.77 7.68 16.55l.82-5.04L5 8.1l4.61-1.26L12 2z",
            DecorShape::Cloud => "M20 17.58A4.42 4.42 0 0115.58 22H7.42A4.42 4.42 0 013 17.58 4.5 4.5 0 017.5 13H8a5 5 0 019.9-1.2A3.5 3.5 0 0120 17.58z",
            DecorShape::Heart => "M12 21s-6-4.35-8.5-6.5C1.85 12.73 3 9 6 8c2.28-.75 3.5 1 6 1s3.72-1.75 6-1c3 1 4.15 4.73 2.5 6.5C18 16.65 12 21 12 21z",
            DecorShape::Sparkle => "M12 2l1.5 3.5L17 7l-3.5 1L12 12l-1.5-4L7 7l3.5-1L12 2z",
        }
    }

    /// Default pastel fill
    pub fn fill(&self) -> &'static str {
        match self {
            DecorShape::Star => "#FFF7A1",
            DecorShape::Cloud => "#B0E0E6",
            DecorShape::Heart => "#FFD1DC",
            DecorShape::Sparkle => "#FFD1DC",
        }
    }
}

/// Properties for the Decor component
#[derive(Clone, PartialEq, Props)]
pub struct DecorProps {
    pub shape: DecorShape,
    /// Positioning and animation classes (e.g. "decor decor--top-left float-slow")
    pub class: String,
    /// Overrides the shape's default fill
    #[props(default)]
    pub fill: Option<String>,
}

/// A single floating ornament
#[component]
pub fn Decor(props: DecorProps) -> Element {
    let fill = props
        .fill
        .clone()
        .unwrap_or_else(|| props.shape.fill().to_string());

    rsx! {
        svg {
            class: "{props.class}",
            view_box: "0 0 24 24",
            fill: "none",
            "aria-hidden": "true",
            path { d: props.shape.path(), fill: "{fill}" }
        }
    }
}

/// Star, cloud and heart in three corners, shared by every scene
#[component]
pub fn DecorCorners() -> Element {
    rsx! {
        Decor { shape: DecorShape::Star, class: "decor decor--top-left float-slow".to_string() }
        Decor { shape: DecorShape::Cloud, class: "decor decor--top-right float".to_string() }
        Decor { shape: DecorShape::Heart, class: "decor decor--bottom-left float-slow".to_string() }
    }
}

/// Slow-drifting dots behind the hero card
///
/// # Example
///
/// ```rust,ignore
/// let particles = use_hook(|| FloatingParticle::field(&mut rand::rng(), 15));
/// rsx! { ParticleField { particles } }
/// ```
#[component]
pub fn ParticleField(particles: Vec<FloatingParticle>) -> Element {
    rsx! {
        div { class: "floating-particles", "aria-hidden": "true",
            for (i, particle) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: "{particle.style()}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_a_path() {
        for shape in [
            DecorShape::Star,
            DecorShape::Cloud,
            DecorShape::Heart,
            DecorShape::Sparkle,
        ] {
            assert!(shape.path().starts_with('M'));
            assert!(shape.fill().starts_with('#'));
        }
    }
}
