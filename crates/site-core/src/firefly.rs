//! Firefly layer: small glow points drifting through the visual region with
//! a slow sinusoidal flicker. Drawn underneath the helix.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::layout::Viewport;

#[derive(Clone, Debug)]
pub struct Firefly {
    pub pos: Vec2,
    vel: Vec2,
    phase: f32,
}

impl Firefly {
    pub fn step(&mut self, dt: f32, bounds: Vec2) {
        self.pos += self.vel * dt;

        // Same wrap discipline as blobs.
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

    pub fn alpha(&self, clock: f32) -> f32 {
        let flicker = (clock * FIREFLY_FLICKER_RATE + self.phase).sin() * 0.5 + 0.5;
        FIREFLY_ALPHA_BASE + FIREFLY_ALPHA_SPAN * flicker
    }
}

pub fn spawn(viewport: &Viewport, seed: u64) -> Vec<Firefly> {
    let region = Vec2::new(viewport.split_x(), viewport.height);
    if region.x <= 0.0 || region.y <= 0.0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed ^ 0x2545_F491_4F6C_DD1D);
    (0..FIREFLY_COUNT)
        .map(|_| {
            let heading = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(0.0..=FIREFLY_SPEED_MAX);
            Firefly {
                pos: Vec2::new(
                    rng.gen_range(0.0..=region.x),
                    rng.gen_range(0.0..=region.y),
                ),
                vel: Vec2::new(heading.cos(), heading.sin()) * speed,
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
            }
        })
        .collect()
}
