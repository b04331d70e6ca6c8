use glam::Vec2;
use site_core::helix::{
    build_geometry, planar_position, project, spawn_particles, strand_depth, HelixParams,
    Particle, Strand,
};
use site_core::{Orientation, Viewport, HELIX_RADIUS, PARTICLE_COUNT};

fn test_viewport() -> Viewport {
    Viewport::new(1000.0, 800.0, 1.0)
}

fn particle(longitudinal: f32, angular_offset: f32) -> Particle {
    Particle {
        longitudinal,
        angular_offset,
        pulse_offset: 0.0,
        base_radius: 2.5,
        current_radius: 2.5,
    }
}

#[test]
fn radius_pulse_never_goes_negative() {
    let mut particles = spawn_particles(&test_viewport(), 7);
    let mut angle = 0.0_f32;
    for _ in 0..10_000 {
        angle += 0.003;
        for p in &mut particles {
            p.pulse(angle);
            assert!(p.current_radius >= 0.0, "radius {}", p.current_radius);
        }
    }
}

#[test]
fn projected_scale_is_finite_and_positive_in_front_of_camera() {
    for z in [-799.0, -400.0, -80.0, 0.0, 80.0, 400.0, 10_000.0] {
        let (_, scale) = project(Vec2::new(10.0, 20.0), z);
        assert!(scale.is_finite());
        assert!(scale > 0.0, "z={z} scale={scale}");
    }
}

#[test]
fn strands_are_pi_apart_for_every_particle() {
    let particles = spawn_particles(&test_viewport(), 3);
    for angle in [0.0_f32, 0.4, 1.7, 100.0] {
        for p in &particles {
            let a = planar_position(p, angle, Strand::Primary);
            let b = planar_position(p, angle, Strand::Secondary);
            // Opposite sides of the axis, same longitudinal position.
            assert!((a.x + b.x).abs() < 1e-3, "radial {} vs {}", a.x, b.x);
            assert_eq!(a.y, b.y);
            let za = strand_depth(p, angle, Strand::Primary);
            let zb = strand_depth(p, angle, Strand::Secondary);
            assert!((za + zb).abs() < 1e-3);
        }
    }
}

#[test]
fn zero_phase_particle_sits_on_the_radial_axis() {
    let p = particle(42.0, 0.0);
    let primary = planar_position(&p, 0.0, Strand::Primary);
    let secondary = planar_position(&p, 0.0, Strand::Secondary);
    assert!((primary.x - HELIX_RADIUS).abs() < 1e-3);
    assert_eq!(primary.y, 42.0);
    assert!((secondary.x + HELIX_RADIUS).abs() < 1e-3);
    assert_eq!(secondary.y, 42.0);
}

#[test]
fn geometry_emits_two_dots_per_particle() {
    let particles = spawn_particles(&test_viewport(), 9);
    let geometry = build_geometry(
        &particles,
        1.23,
        Orientation::LongAxisVertical,
        &HelixParams::default(),
        Vec2::new(275.0, 400.0),
    );
    assert_eq!(geometry.dots.len(), 2 * PARTICLE_COUNT);
    assert!(geometry.base_pairs.len() <= PARTICLE_COUNT);
    assert!(geometry.strand_segments.len() <= 2 * (PARTICLE_COUNT - 1));
}

#[test]
fn depth_sort_tolerates_equal_keys() {
    // Two identical particles give exactly equal depths on each strand.
    let particles = vec![particle(0.0, 0.0), particle(0.0, 0.0)];
    let geometry = build_geometry(
        &particles,
        0.0,
        Orientation::LongAxisVertical,
        &HelixParams::default(),
        Vec2::ZERO,
    );
    assert_eq!(geometry.dots.len(), 4);
}

#[test]
fn dots_are_ordered_far_to_near() {
    let particles = spawn_particles(&test_viewport(), 11);
    let geometry = build_geometry(
        &particles,
        0.7,
        Orientation::LongAxisVertical,
        &HelixParams::default(),
        Vec2::ZERO,
    );
    // Far points project smaller; scales must be non-decreasing in paint
    // order since alpha and radius derive from them.
    for pair in geometry.dots.windows(2) {
        assert!(pair[0].alpha <= pair[1].alpha + 1e-6);
    }
}

#[test]
fn distant_spine_points_do_not_connect() {
    // A huge longitudinal gap exceeds the segment threshold, so the strand
    // polyline skips it, while the per-particle rungs survive.
    let particles = vec![particle(0.0, 0.0), particle(10_000.0, 0.2)];
    let geometry = build_geometry(
        &particles,
        0.0,
        Orientation::LongAxisVertical,
        &HelixParams::default(),
        Vec2::ZERO,
    );
    assert_eq!(geometry.strand_segments.len(), 0);
    // The near-origin particle still gets its rung.
    assert!(!geometry.base_pairs.is_empty());
    assert_eq!(geometry.dots.len(), 4);
}

#[test]
fn orientation_swaps_screen_axes() {
    let particles = vec![particle(100.0, 0.0)];
    let wide = build_geometry(
        &particles,
        0.0,
        Orientation::LongAxisVertical,
        &HelixParams::default(),
        Vec2::ZERO,
    );
    let narrow = build_geometry(
        &particles,
        0.0,
        Orientation::LongAxisHorizontal,
        &HelixParams::default(),
        Vec2::ZERO,
    );
    let a = wide.dots[0].pos;
    let b = narrow.dots[0].pos;
    assert!((a.x - b.y).abs() < 1e-3);
    assert!((a.y - b.x).abs() < 1e-3);
}

#[test]
fn instance_alpha_multiplier_caps_opacity() {
    let particles = spawn_particles(&test_viewport(), 5);
    let faint = HelixParams {
        alpha: 0.1,
        ..Default::default()
    };
    let geometry = build_geometry(
        &particles,
        0.0,
        Orientation::LongAxisVertical,
        &faint,
        Vec2::ZERO,
    );
    for line in geometry.base_pairs.iter().chain(&geometry.strand_segments) {
        assert!(line.alpha <= 0.1 + 1e-6);
        assert!(line.alpha >= 0.0);
    }
}
