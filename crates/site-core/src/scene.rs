//! Scene state: the single owner of all animated collections.
//!
//! Collections are replaced wholesale on resize and mutated only from
//! `tick`; `frame` is a read-only projection into draw commands. This keeps
//! the update/draw pair the only two code paths touching animation state.

use glam::Vec2;

use crate::blob::{self, Blob};
use crate::constants::*;
use crate::firefly::{self, Firefly};
use crate::helix::{self, HelixGeometry, HelixParams, Particle};
use crate::layout::Viewport;
use crate::ripple::Ripple;

#[derive(Clone, Debug)]
pub struct BlobSprite {
    pub pos: Vec2,
    pub rot: f32,
    pub opacity: f32,
    pub atoms: smallvec::SmallVec<[crate::blob::Atom; 6]>,
}

#[derive(Clone, Copy, Debug)]
pub struct FireflySprite {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Everything the renderer needs for one frame, in paint order.
#[derive(Clone, Debug)]
pub struct FramePlan {
    pub width: f32,
    pub height: f32,
    pub split_x: f32,
    pub narrow: bool,
    pub blobs: Vec<BlobSprite>,
    pub fireflies: Vec<FireflySprite>,
    pub helix: HelixGeometry,
}

pub struct Scene {
    viewport: Viewport,
    particles: Vec<Particle>,
    blobs: Vec<Blob>,
    fireflies: Vec<Firefly>,
    ripples: Vec<Ripple>,
    global_angle: f32,
    clock: f32,
    ripple_timer: f32,
    seed: u64,
}

impl Scene {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let mut scene = Self {
            viewport,
            particles: Vec::new(),
            blobs: Vec::new(),
            fireflies: Vec::new(),
            ripples: Vec::new(),
            global_angle: 0.0,
            clock: 0.0,
            ripple_timer: 0.0,
            seed,
        };
        scene.resize(viewport);
        scene
    }

    /// Rebuild every collection for the new dimensions. Idempotent for
    /// equal dimensions: spawning is seeded, so repeated calls produce
    /// identical sets.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.particles = helix::spawn_particles(&viewport, self.seed);
        self.blobs = blob::spawn_grid(&viewport, BLOB_GRID_ROWS, BLOB_GRID_COLS, self.seed);
        self.fireflies = firefly::spawn(&viewport, self.seed);
        self.ripples.clear();
        log::debug!(
            "scene resize {}x{} dpr={} particles={} blobs={} fireflies={}",
            viewport.width,
            viewport.height,
            viewport.dpr,
            self.particles.len(),
            self.blobs.len(),
            self.fireflies.len()
        );
    }

    /// Advance one frame. The twist angle grows without wraparound; it only
    /// ever reaches trigonometric functions, so unbounded growth is safe for
    /// the life of the page.
    pub fn tick(&mut self, dt: f32) {
        self.global_angle += GLOBAL_ANGLE_INCREMENT;
        self.clock += dt;

        for particle in &mut self.particles {
            particle.pulse(self.global_angle);
        }

        let bounds = Vec2::new(self.viewport.split_x(), self.viewport.height);
        for blob in &mut self.blobs {
            blob.step(dt, self.clock, bounds);
        }
        for firefly in &mut self.fireflies {
            firefly.step(dt, bounds);
        }

        // Ripples grow and retire but are never drawn (disabled effect).
        self.ripple_timer += dt;
        if self.ripple_timer >= RIPPLE_SPAWN_INTERVAL_SEC {
            self.ripple_timer -= RIPPLE_SPAWN_INTERVAL_SEC;
            self.ripples.push(Ripple::new(bounds * 0.5));
        }
        for ripple in &mut self.ripples {
            ripple.step(dt);
        }
        self.ripples.retain(|r| r.active);
    }

    /// Produce draw commands for the current state. Only the default helix
    /// instance is emitted; layered instances go through
    /// `helix::build_geometry` with non-default params.
    pub fn frame(&self) -> FramePlan {
        let helix = helix::build_geometry(
            &self.particles,
            self.global_angle,
            self.viewport.orientation(),
            &HelixParams::default(),
            self.viewport.visual_center(),
        );
        FramePlan {
            width: self.viewport.width,
            height: self.viewport.height,
            split_x: self.viewport.split_x(),
            narrow: self.viewport.is_narrow(),
            blobs: self
                .blobs
                .iter()
                .map(|b| BlobSprite {
                    pos: b.pos,
                    rot: b.rot,
                    opacity: b.opacity,
                    atoms: b.atoms.clone(),
                })
                .collect(),
            fireflies: self
                .fireflies
                .iter()
                .map(|f| FireflySprite {
                    pos: f.pos,
                    radius: FIREFLY_RADIUS,
                    alpha: f.alpha(self.clock),
                })
                .collect(),
            helix,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn global_angle(&self) -> f32 {
        self.global_angle
    }

    pub fn ripple_count(&self) -> usize {
        self.ripples.len()
    }
}
