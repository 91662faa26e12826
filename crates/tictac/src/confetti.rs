//! Confetti particle system for the end-of-game celebration.
//!
//! Particles are launched upward from the bottom edge, fall back under a
//! constant gravity and are dropped once they leave the screen.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

const GRAVITY: f32 = 0.12;
const DRAG: f32 = 0.99;
const MAX_TICKS: u32 = 200;
const GLYPHS: [char; 6] = ['*', '+', 'o', '•', '✦', '·'];

/// One piece of confetti.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Column, in cells.
    pub x: f32,
    /// Row, in cells.
    pub y: f32,
    /// Horizontal velocity, cells per tick.
    pub vx: f32,
    /// Vertical velocity, cells per tick; negative is up.
    pub vy: f32,
    /// Character drawn for this particle.
    pub glyph: char,
    /// Palette index, resolved to a color when rendering.
    pub hue: u8,
}

/// A running confetti burst.
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    width: u16,
    height: u16,
    ticks: u32,
}

impl Confetti {
    /// Launches `count` particles from the bottom of a `width` x `height` area.
    #[instrument]
    pub fn burst(width: u16, height: u16, count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let center = f32::from(width) / 2.0;
        let spread = (f32::from(width) / 4.0).max(1.0);
        let lift = (f32::from(height) / 12.0).max(1.0);

        let particles = (0..count)
            .map(|_| Particle {
                x: center + rng.random_range(-spread..spread),
                y: f32::from(height.saturating_sub(1)),
                vx: rng.random_range(-1.2..1.2),
                vy: -rng.random_range(lift * 0.5..lift),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                hue: rng.random_range(0..6),
            })
            .collect();

        debug!(count, "Confetti launched");
        Self {
            particles,
            width,
            height,
            ticks: 0,
        }
    }

    /// Advances every particle one step and drops those that left the area.
    pub fn tick(&mut self) {
        self.ticks += 1;
        let (width, height) = (f32::from(self.width), f32::from(self.height));
        for p in &mut self.particles {
            p.vy += GRAVITY;
            p.vx *= DRAG;
            p.x += p.vx;
            p.y += p.vy;
        }
        self.particles
            .retain(|p| p.x >= 0.0 && p.x < width && p.y < height);
    }

    /// Updates the area particles live in, after a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// True once nothing is left to draw.
    pub fn is_done(&self) -> bool {
        self.particles.is_empty() || self.ticks >= MAX_TICKS
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
