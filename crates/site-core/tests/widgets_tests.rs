use site_core::carousel::active_indicator;
use site_core::dial::{
    chart_path, expression_level, knob_angle_deg, pointer_value, DIAL_START_DEG, DIAL_SWEEP_DEG,
};
use site_core::spiral::{bob_offset, break_offset, BOB_OFFSET_PX, BREAK_OFFSET_PX};

#[test]
fn dial_endpoints_map_to_zero_and_one() {
    // Lower-left (135 degrees) is the start of the sweep.
    assert!((pointer_value(-1.0, 1.0) - 0.0).abs() < 1e-3);
    // Lower-right (45 degrees) is the end.
    assert!((pointer_value(1.0, 1.0) - 1.0).abs() < 1e-3);
    // Straight up is the midpoint.
    assert!((pointer_value(0.0, -1.0) - 0.5).abs() < 1e-3);
}

#[test]
fn dial_dead_zone_clamps_to_the_nearest_end() {
    // Slightly left of straight-down is nearest the sweep start.
    assert_eq!(pointer_value(-0.05, 1.0), 0.0);
    // Slightly right of straight-down is nearest the sweep end.
    assert_eq!(pointer_value(0.05, 1.0), 1.0);
}

#[test]
fn knob_angle_covers_the_sweep() {
    assert_eq!(knob_angle_deg(0.0), DIAL_START_DEG);
    assert_eq!(knob_angle_deg(1.0), DIAL_START_DEG + DIAL_SWEEP_DEG);
    // Out-of-range values clamp.
    assert_eq!(knob_angle_deg(2.0), DIAL_START_DEG + DIAL_SWEEP_DEG);
    assert_eq!(knob_angle_deg(-1.0), DIAL_START_DEG);
}

#[test]
fn expression_level_scales_with_the_dial() {
    assert_eq!(expression_level(0.0, 0.9), 0.0);
    let half = expression_level(0.5, 0.9);
    let full = expression_level(1.0, 0.9);
    assert!(full > half && half > 0.0);
    // Monotonic in dose for a fixed dial value.
    let lo = expression_level(1.0, 0.1);
    let hi = expression_level(1.0, 0.9);
    assert!(hi > lo);
}

#[test]
fn chart_path_is_a_well_formed_polyline() {
    let path = chart_path(0.7, 260.0, 120.0, 40);
    assert!(path.starts_with("M "));
    assert_eq!(path.matches(" L ").count(), 39);
    // Degenerate sample counts are raised to a drawable minimum.
    let tiny = chart_path(0.7, 260.0, 120.0, 0);
    assert!(tiny.starts_with("M "));
    assert_eq!(tiny.matches(" L ").count(), 1);
}

#[test]
fn spiral_bob_direction_follows_the_coin_flip() {
    assert_eq!(bob_offset(0.0), -BOB_OFFSET_PX);
    assert_eq!(bob_offset(0.49), -BOB_OFFSET_PX);
    assert_eq!(bob_offset(0.5), BOB_OFFSET_PX);
    assert_eq!(bob_offset(0.99), BOB_OFFSET_PX);
}

#[test]
fn logo_break_splits_the_halves() {
    // Even count: half lift, half drop, split at the middle.
    let offsets: Vec<f32> = (0..6).map(|i| break_offset(i, 6)).collect();
    assert_eq!(offsets.iter().filter(|o| **o < 0.0).count(), 3);
    assert_eq!(offsets[2], -BREAK_OFFSET_PX);
    assert_eq!(offsets[3], BREAK_OFFSET_PX);
    // Odd count: the middle line joins the lower half.
    assert_eq!(break_offset(1, 5), -BREAK_OFFSET_PX);
    assert_eq!(break_offset(2, 5), BREAK_OFFSET_PX);
}

#[test]
fn carousel_indicator_snaps_and_clamps() {
    assert_eq!(active_indicator(0.0, 300.0, 5), 0);
    assert_eq!(active_indicator(140.0, 300.0, 5), 0);
    assert_eq!(active_indicator(160.0, 300.0, 5), 1);
    assert_eq!(active_indicator(310.0, 300.0, 5), 1);
    assert_eq!(active_indicator(1.0e9, 300.0, 5), 4);
    assert_eq!(active_indicator(-50.0, 300.0, 5), 0);
    // Degenerate inputs.
    assert_eq!(active_indicator(100.0, 0.0, 5), 0);
    assert_eq!(active_indicator(100.0, 300.0, 0), 0);
}
