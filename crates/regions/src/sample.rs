//! Random simple polygons (star-shaped, radial jitter + replay tokens).
//!
//! Purpose
//! - Feed benches and property tests with reproducible polygons that are
//!   simple by construction, so every draw must pass `validate_polygon`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, keep the angular order. Sorted distinct angles with
//!   positive radii give a polygon that is star-shaped around the origin.
//! - Output repeats the first vertex at the end (closed ring).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{point, Point};

/// Corner count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter. Radii = `base_radius * (1 + u)`, `u∈[-radial_jitter, radial_jitter]`, clamped positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Translation applied after drawing.
    pub center: (f64, f64),
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            center: (0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a closed star-shaped polygon (first vertex repeated at the end).
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let (cx, cy) = cfg.center;
    let mut ring: Vec<Point> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-3) * r0;
            point(cx + th.cos() * r, cy + th.sin() * r)
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// Star draw with corners 1 and 2 swapped, so edges `0 -> 2` and `1 -> 3` cross.
///
/// The crossing is guaranteed when corners sit on a circle (`radial_jitter = 0`)
/// and there are at least 4 of them. Used as the rejecting counterpart of
/// `draw_star_polygon` in benches.
pub fn draw_crossing_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point> {
    let mut ring = draw_star_polygon(cfg, tok);
    if ring.len() > 4 {
        ring.swap(1, 2);
    }
    ring
}
