//! Confetti and floating background particles.
//!
//! Only the numbers are generated here; the UI turns each piece into an
//! absolutely positioned element animated by CSS keyframes.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Pastel palette shared by the confetti pieces.
pub const CONFETTI_COLORS: [&str; 6] = [
    "#f04299", "#ffd1dc", "#fff7a1", "#b0e0e6", "#cdb4db", "#b1f2b1",
];

/// Default number of pieces in one burst.
pub const DEFAULT_CONFETTI_COUNT: usize = 120;

/// Default number of hero background particles.
pub const DEFAULT_FLOATING_COUNT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiShape {
    Square,
    Circle,
    Ribbon,
}

impl ConfettiShape {
    const ALL: [ConfettiShape; 3] = [
        ConfettiShape::Square,
        ConfettiShape::Circle,
        ConfettiShape::Ribbon,
    ];

    pub fn class(self) -> &'static str {
        match self {
            ConfettiShape::Square => "confetti-piece--square",
            ConfettiShape::Circle => "confetti-piece--circle",
            ConfettiShape::Ribbon => "confetti-piece--ribbon",
        }
    }
}

/// One falling piece of confetti.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal start position, percent of viewport width
    pub left: f64,
    /// Seconds before the piece starts falling
    pub delay: f64,
    /// Seconds to fall across the viewport
    pub duration: f64,
    /// Initial rotation in degrees
    pub rotation: f64,
    /// Edge length in pixels
    pub size: f64,
    pub color: &'static str,
    pub shape: ConfettiShape,
}

impl ConfettiPiece {
    /// Inline CSS for this piece.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; transform: rotate({:.0}deg); animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left,
            self.size,
            if self.shape == ConfettiShape::Ribbon { self.size * 0.4 } else { self.size },
            self.color,
            self.rotation,
            self.delay,
            self.duration,
        )
    }
}

/// A full burst of confetti.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
}

impl ConfettiBurst {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let pieces = (0..count)
            .map(|_| ConfettiPiece {
                left: rng.random_range(0.0..100.0),
                delay: rng.random_range(0.0..0.8),
                duration: rng.random_range(2.5..4.0),
                rotation: rng.random_range(0.0..360.0),
                size: rng.random_range(6.0..12.0),
                color: CONFETTI_COLORS.choose(rng).copied().unwrap_or("#f04299"),
                shape: ConfettiShape::ALL
                    .choose(rng)
                    .copied()
                    .unwrap_or(ConfettiShape::Square),
            })
            .collect();
        Self { pieces }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Slow-drifting dot behind the hero card.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingParticle {
    /// Percent of container width
    pub left: f64,
    /// Percent of container height
    pub top: f64,
    /// Seconds
    pub delay: f64,
    /// Seconds
    pub duration: f64,
}

impl FloatingParticle {
    pub fn field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Self> {
        (0..count)
            .map(|_| FloatingParticle {
                left: rng.random_range(0.0..100.0),
                top: rng.random_range(0.0..100.0),
                delay: rng.random_range(0.0..20.0),
                duration: 15.0 + rng.random_range(0.0..10.0),
            })
            .collect()
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_pieces_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let burst = ConfettiBurst::generate(&mut rng, DEFAULT_CONFETTI_COUNT);
        assert_eq!(burst.len(), DEFAULT_CONFETTI_COUNT);
        for piece in burst.pieces() {
            assert!((0.0..100.0).contains(&piece.left));
            assert!((0.0..0.8).contains(&piece.delay));
            assert!((2.5..4.0).contains(&piece.duration));
            assert!(CONFETTI_COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn same_seed_same_burst() {
        let a = ConfettiBurst::generate(&mut StdRng::seed_from_u64(1), 10);
        let b = ConfettiBurst::generate(&mut StdRng::seed_from_u64(1), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn floating_particles_match_hero_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = FloatingParticle::field(&mut rng, DEFAULT_FLOATING_COUNT);
        assert_eq!(field.len(), 15);
        for p in &field {
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..20.0).contains(&p.delay));
            assert!((15.0..25.0).contains(&p.duration));
        }
    }

    #[test]
    fn ribbon_is_flat() {
        let piece = ConfettiPiece {
            left: 10.0,
            delay: 0.0,
            duration: 3.0,
            rotation: 45.0,
            size: 10.0,
            color: "#f04299",
            shape: ConfettiShape::Ribbon,
        };
        assert!(piece.style().contains("height: 4.0px"));
        assert!(piece.style().contains("rotate(45deg)"));
    }
}
