//! Double-helix spine geometry.
//!
//! Each particle is a fixed point along the helix's long axis; the two
//! strands place it on a circle around that axis at phases pi radians apart.
//! Everything here is a pure function of (particles, global angle, layout),
//! returned as draw command lists so the frontend only has to execute them.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::layout::{Orientation, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strand {
    Primary,
    Secondary,
}

impl Strand {
    #[inline]
    pub fn phase_shift(self) -> f32 {
        match self {
            Strand::Primary => 0.0,
            Strand::Secondary => std::f32::consts::PI,
        }
    }
}

/// One spine point. Identity fields are fixed at spawn; only
/// `current_radius` changes between frames.
#[derive(Clone, Debug)]
pub struct Particle {
    pub longitudinal: f32,
    pub angular_offset: f32,
    pub pulse_offset: f32,
    pub base_radius: f32,
    pub current_radius: f32,
}

impl Particle {
    /// Sinusoidal radius pulse keyed to the global angle, clamped so the
    /// radius can never go negative.
    pub fn pulse(&mut self, global_angle: f32) {
        self.current_radius = (self.base_radius
            + (RADIUS_PULSE_RATE * global_angle + self.pulse_offset).sin())
        .max(0.0);
    }
}

/// Rebuilds the full particle set for a viewport. Longitudinal positions are
/// evenly spaced over 2.5x the diagonal, centered at zero, so the helix
/// overfills the visible area with no seam at either end. Deterministic for
/// a given seed and dimensions.
pub fn spawn_particles(viewport: &Viewport, seed: u64) -> Vec<Particle> {
    let span = viewport.diagonal() * HELIX_SPAN_DIAGONAL_FACTOR;
    let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    (0..PARTICLE_COUNT)
        .map(|i| {
            let t = if PARTICLE_COUNT > 1 {
                i as f32 / (PARTICLE_COUNT - 1) as f32
            } else {
                0.5
            };
            let base_radius = PARTICLE_BASE_RADIUS
                + rng.gen_range(-PARTICLE_RADIUS_JITTER..=PARTICLE_RADIUS_JITTER);
            Particle {
                longitudinal: (t - 0.5) * span,
                angular_offset: i as f32 * ANGULAR_STEP,
                pulse_offset: i as f32 * PULSE_PHASE_STEP,
                base_radius,
                current_radius: base_radius,
            }
        })
        .collect()
}

/// Per-instance multipliers. Only the default instance is drawn today, but
/// the geometry pipeline accepts offsets and scales for layered copies.
#[derive(Clone, Copy, Debug)]
pub struct HelixParams {
    pub offset: Vec2,
    pub scale: f32,
    pub alpha: f32,
    pub radius_mul: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            alpha: 1.0,
            radius_mul: 1.0,
        }
    }
}

/// A strand point after projection, keeping the unprojected depth and
/// longitudinal position for sorting.
#[derive(Clone, Copy, Debug)]
pub struct StrandPoint {
    pub screen: Vec2,
    pub depth: f32,
    pub scale: f32,
    pub longitudinal: f32,
    pub radius: f32,
}

/// Position in the tilt plane before rotation and projection:
/// x is the radial coordinate, y the longitudinal one.
#[inline]
pub fn planar_position(particle: &Particle, global_angle: f32, strand: Strand) -> Vec2 {
    let theta = particle.angular_offset + global_angle + strand.phase_shift();
    Vec2::new(HELIX_RADIUS * theta.cos(), particle.longitudinal)
}

/// Depth of a strand point along the camera axis.
#[inline]
pub fn strand_depth(particle: &Particle, global_angle: f32, strand: Strand) -> f32 {
    let theta = particle.angular_offset + global_angle + strand.phase_shift();
    HELIX_RADIUS * theta.sin()
}

/// Tilt the plane by the fixed lean angle, then perspective-divide.
/// Returns the projected planar position and the projected scale.
#[inline]
pub fn project(planar: Vec2, depth: f32) -> (Vec2, f32) {
    let (sin_t, cos_t) = HELIX_TILT_RADIANS.sin_cos();
    let tilted = Vec2::new(
        planar.x * cos_t - planar.y * sin_t,
        planar.x * sin_t + planar.y * cos_t,
    );
    let scale = FOCAL_LENGTH / (FOCAL_LENGTH + depth);
    (tilted * scale, scale)
}

fn strand_point(
    particle: &Particle,
    global_angle: f32,
    strand: Strand,
    orientation: Orientation,
    params: &HelixParams,
    center: Vec2,
) -> StrandPoint {
    let planar = planar_position(particle, global_angle, strand) * params.scale;
    let depth = strand_depth(particle, global_angle, strand) * params.scale;
    let (projected, scale) = project(planar, depth);
    let mapped = match orientation {
        Orientation::LongAxisVertical => projected,
        Orientation::LongAxisHorizontal => Vec2::new(projected.y, projected.x),
    };
    StrandPoint {
        screen: center + params.offset + mapped,
        depth,
        scale,
        longitudinal: particle.longitudinal,
        radius: particle.current_radius,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct DotCmd {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Draw commands for one helix instance, in paint order: rungs first, then
/// strand segments, then depth-sorted dots on top.
#[derive(Clone, Debug, Default)]
pub struct HelixGeometry {
    pub base_pairs: Vec<LineCmd>,
    pub strand_segments: Vec<LineCmd>,
    pub dots: Vec<DotCmd>,
}

pub fn build_geometry(
    particles: &[Particle],
    global_angle: f32,
    orientation: Orientation,
    params: &HelixParams,
    center: Vec2,
) -> HelixGeometry {
    let primary: Vec<StrandPoint> = particles
        .iter()
        .map(|p| strand_point(p, global_angle, Strand::Primary, orientation, params, center))
        .collect();
    let secondary: Vec<StrandPoint> = particles
        .iter()
        .map(|p| {
            strand_point(
                p,
                global_angle,
                Strand::Secondary,
                orientation,
                params,
                center,
            )
        })
        .collect();

    let mut geometry = HelixGeometry::default();

    // Rungs: connect strand pairs that are both in front of the camera and
    // close enough on screen. Opacity follows the average projected scale.
    let pair_limit = BASE_PAIR_DIST_SQ_MAX * params.scale * params.scale;
    for (a, b) in primary.iter().zip(secondary.iter()) {
        if a.scale <= 0.0 || b.scale <= 0.0 {
            continue;
        }
        if a.screen.distance_squared(b.screen) >= pair_limit {
            continue;
        }
        let avg_scale = (a.scale + b.scale) * 0.5;
        geometry.base_pairs.push(LineCmd {
            from: a.screen,
            to: b.screen,
            alpha: (params.alpha * BASE_PAIR_ALPHA * avg_scale).clamp(0.0, 1.0),
        });
    }

    // Strand backbones: walk each strand in longitudinal order and skip
    // segments that jump too far on screen (near/far crossover artifacts).
    let segment_limit = STRAND_SEGMENT_DIST_SQ_MAX * params.scale * params.scale;
    for strand in [&primary, &secondary] {
        let mut ordered: Vec<&StrandPoint> = strand.iter().collect();
        ordered.sort_by(|a, b| a.longitudinal.total_cmp(&b.longitudinal));
        for pair in ordered.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.screen.distance_squared(b.screen) > segment_limit {
                continue;
            }
            let avg_scale = (a.scale + b.scale) * 0.5;
            geometry.strand_segments.push(LineCmd {
                from: a.screen,
                to: b.screen,
                alpha: (params.alpha * STRAND_ALPHA * avg_scale).clamp(0.0, 1.0),
            });
        }
    }

    // Dots: both strands merged, painted far-to-near so near points overdraw.
    let mut all: Vec<&StrandPoint> = primary.iter().chain(secondary.iter()).collect();
    all.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    for p in all {
        geometry.dots.push(DotCmd {
            pos: p.screen,
            radius: (p.radius * p.scale * params.radius_mul).max(0.0),
            alpha: (params.alpha * DOT_ALPHA * p.scale).clamp(DOT_ALPHA_MIN, 1.0),
        });
    }

    geometry
}
