//! Ambient background blobs: clusters of 3-6 "atom" circles that drift,
//! rotate, and pulse in opacity.
//!
//! Seeding is grid-based over the visual region, but the grid is currently
//! configured to zero rows and columns, so no blobs are produced. The layer
//! stays wired so it can be re-enabled by changing the grid constants.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::*;
use crate::layout::Viewport;

#[derive(Clone, Copy, Debug)]
pub struct Atom {
    pub offset: Vec2,
    pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct Blob {
    pub pos: Vec2,
    pub rot: f32,
    pub opacity: f32,
    pub atoms: SmallVec<[Atom; 6]>,
    vel: Vec2,
    rot_speed: f32,
    phase: f32,
}

impl Blob {
    fn new(pos: Vec2, rng: &mut StdRng) -> Self {
        let atom_count = rng.gen_range(BLOB_ATOM_MIN..=BLOB_ATOM_MAX);
        let atoms = (0..atom_count)
            .map(|_| {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let dist = rng.gen_range(0.0..BLOB_ATOM_SPREAD);
                Atom {
                    offset: Vec2::new(angle.cos(), angle.sin()) * dist,
                    radius: rng.gen_range(BLOB_ATOM_RADIUS_MIN..=BLOB_ATOM_RADIUS_MAX),
                }
            })
            .collect();
        let heading = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(0.0..=BLOB_SPEED_MAX);
        Self {
            pos,
            rot: rng.gen_range(0.0..std::f32::consts::TAU),
            opacity: 0.0,
            atoms,
            vel: Vec2::new(heading.cos(), heading.sin()) * speed,
            rot_speed: rng.gen_range(-BLOB_ROT_SPEED_MAX..=BLOB_ROT_SPEED_MAX),
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }

    /// Integrate one frame: drift, rotate, pulse opacity, and wrap
    /// toroidally at the padded bounds.
    pub fn step(&mut self, dt: f32, clock: f32, bounds: Vec2) {
        self.pos += self.vel * dt;
        self.rot += self.rot_speed * dt;
        self.opacity = ((clock * BLOB_OPACITY_RATE + self.phase).sin() * 0.5 + 0.5)
            * BLOB_OPACITY_MAX;

        let pad = BLOB_WRAP_PADDING;
        if self.pos.x < -pad {
            self.pos.x = bounds.x + pad;
        } else if self.pos.x > bounds.x + pad {
            self.pos.x = -pad;
        }
        if self.pos.y < -pad {
            self.pos.y = bounds.y + pad;
        } else if self.pos.y > bounds.y + pad {
            self.pos.y = -pad;
        }
    }
}

/// Seed blobs on an evenly subdivided grid over the visual (left) region,
/// one blob jittered around each cell center.
pub fn spawn_grid(viewport: &Viewport, rows: usize, cols: usize, seed: u64) -> Vec<Blob> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let region = Vec2::new(viewport.split_x(), viewport.height);
    let cell = Vec2::new(region.x / cols as f32, region.y / rows as f32);
    let mut rng = StdRng::seed_from_u64(seed ^ 0xB5AD_4ECE_DA1C_E2A9);
    let mut blobs = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let center = Vec2::new(
                (col as f32 + 0.5) * cell.x,
                (row as f32 + 0.5) * cell.y,
            );
            let jitter = Vec2::new(
                rng.gen_range(-0.4..=0.4) * cell.x,
                rng.gen_range(-0.4..=0.4) * cell.y,
            );
            blobs.push(Blob::new(center + jitter, &mut rng));
        }
    }
    blobs
}
