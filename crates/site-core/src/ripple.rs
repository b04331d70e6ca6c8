//! Expanding surface ripples. The scene spawns and steps these on a clock,
//! but no draw pass consumes them: the effect is currently disabled and the
//! data is kept only so it can be switched back on without re-plumbing.

use glam::Vec2;

use crate::constants::{RIPPLE_GROWTH_SPEED, RIPPLE_MAX_RADIUS};

#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub speed: f32,
    pub active: bool,
}

impl Ripple {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: 0.0,
            max_radius: RIPPLE_MAX_RADIUS,
            speed: RIPPLE_GROWTH_SPEED,
            active: true,
        }
    }

    pub fn step(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.radius += self.speed * dt;
        if self.radius >= self.max_radius {
            self.radius = self.max_radius;
            self.active = false;
        }
    }
}
