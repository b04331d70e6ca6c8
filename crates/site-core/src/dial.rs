//! Circular dial control: maps a pointer position on the dial face to a
//! normalized value and renders the SVG response curve the value drives.

/// Knob sweep: 270 degrees starting at the lower-left (135 deg, measured
/// clockwise from screen-east with y pointing down).
pub const DIAL_START_DEG: f32 = 135.0;
pub const DIAL_SWEEP_DEG: f32 = 270.0;

/// Steepness of the expression response curve.
const RESPONSE_STEEPNESS: f32 = 8.0;

/// Normalized dial value for a pointer offset from the dial center.
/// Positions in the dead zone below the dial clamp to the nearest end.
pub fn pointer_value(dx: f32, dy: f32) -> f32 {
    let deg = dy.atan2(dx).to_degrees();
    let rel = (deg - DIAL_START_DEG).rem_euclid(360.0);
    if rel <= DIAL_SWEEP_DEG {
        rel / DIAL_SWEEP_DEG
    } else if rel < DIAL_SWEEP_DEG + (360.0 - DIAL_SWEEP_DEG) * 0.5 {
        1.0
    } else {
        0.0
    }
}

/// Knob rotation in degrees for a value.
pub fn knob_angle_deg(value: f32) -> f32 {
    DIAL_START_DEG + value.clamp(0.0, 1.0) * DIAL_SWEEP_DEG
}

/// Reporter expression level for a dial value: a sigmoid dose response
/// scaled by the value, in [0, 1].
pub fn expression_level(value: f32, dose: f32) -> f32 {
    let v = value.clamp(0.0, 1.0);
    let sigmoid = 1.0 / (1.0 + (-RESPONSE_STEEPNESS * (dose - 0.5)).exp());
    (v * sigmoid).clamp(0.0, 1.0)
}

/// SVG path for the response curve at a given dial value, sampled across
/// the chart box. Emitted as an M/L polyline.
pub fn chart_path(value: f32, width: f32, height: f32, samples: usize) -> String {
    let samples = samples.max(2);
    let mut path = String::new();
    for i in 0..samples {
        let t = i as f32 / (samples - 1) as f32;
        let x = t * width;
        let y = height * (1.0 - expression_level(value, t));
        if i == 0 {
            path.push_str(&format!("M {x:.1} {y:.1}"));
        } else {
            path.push_str(&format!(" L {x:.1} {y:.1}"));
        }
    }
    path
}
