//! Decorative backdrop: a drifting field of soft dots behind the hero.
//!
//! The layout is derived from a fixed seed so the server and the browser render the
//! same markup and hydration never has to patch it.

use leptos::{
    html::div,
    prelude::*,
    svg::{circle, svg},
};

const SEED: u64 = 0x5EED_CAFE;
const PARTICLES: usize = 48;
const PALETTE: [&str; 3] = ["#3b82f6", "#8b5cf6", "#10b981"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in a 100x100 viewBox.
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
    /// Animation delay in seconds.
    pub delay: f64,
    pub color: &'static str,
}

/// Small linear congruential generator; quality is irrelevant here, determinism is not.
struct Lcg(u64);

impl Lcg {
    #[allow(clippy::cast_precision_loss)]
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        // Top 53 bits, scaled into [0, 1).
        (self.0 >> 11) as f64 / 9_007_199_254_740_992.0
    }

    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}

/// The particle layout for `seed`.
#[must_use]
pub fn particles(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|index| Particle {
            x: rng.range(0.0, 100.0),
            y: rng.range(0.0, 100.0),
            radius: rng.range(0.15, 0.6),
            opacity: rng.range(0.2, 0.7),
            delay: rng.range(0.0, 6.0),
            color: PALETTE[index % PALETTE.len()],
        })
        .collect()
}

pub fn component() -> impl IntoView {
    let dots = particles(PARTICLES, SEED)
        .into_iter()
        .map(|particle| {
            circle()
                .attr("cx", format!("{:.2}", particle.x))
                .attr("cy", format!("{:.2}", particle.y))
                .attr("r", format!("{:.2}", particle.radius))
                .attr("fill", particle.color)
                .attr("fill-opacity", format!("{:.2}", particle.opacity))
                .attr("class", "animate-pulse")
                .attr("style", format!("animation-delay: {:.2}s; animation-duration: 4s;", particle.delay))
        })
        .collect_view();

    div()
        .class("overflow-hidden absolute inset-0 pointer-events-none bg-[radial-gradient(circle_at_center,rgba(30,58,138,0.45),transparent_70%)]")
        .attr("aria-hidden", "true")
        .child(
            svg()
                .attr("viewBox", "0 0 100 100")
                .attr("preserveAspectRatio", "xMidYMid slice")
                .class("w-full h-full")
                .child(dots),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(particles(16, SEED), particles(16, SEED));
        assert_ne!(particles(16, SEED), particles(16, SEED + 1));
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        for particle in particles(PARTICLES, SEED) {
            assert!((0.0..=100.0).contains(&particle.x));
            assert!((0.0..=100.0).contains(&particle.y));
            assert!((0.15..=0.6).contains(&particle.radius));
            assert!((0.2..=0.7).contains(&particle.opacity));
        }
    }
}
