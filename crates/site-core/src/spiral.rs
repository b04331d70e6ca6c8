//! Header spiral-line interactions: the hover bob and the logo-click
//! break-apart split. Pure offset math; the frontend applies the results as
//! CSS transforms.

pub const BOB_OFFSET_PX: f32 = 5.0;
pub const BOB_DURATION_MS: i32 = 200;
pub const BOB_RESET_MS: i32 = 400;

pub const BREAK_OFFSET_PX: f32 = 20.0;
pub const BREAK_DURATION_MS: i32 = 500;
pub const BREAK_RESET_MS: i32 = 1000;

/// Vertical hover offset: a coin flip on `roll` in [0, 1) sends the line up
/// or down by the bob distance.
pub fn bob_offset(roll: f32) -> f32 {
    if roll < 0.5 {
        -BOB_OFFSET_PX
    } else {
        BOB_OFFSET_PX
    }
}

/// Vertical offset for line `index` of `total` when the logo is clicked:
/// the top half lifts, the bottom half (including the middle line of an odd
/// count) drops.
pub fn break_offset(index: usize, total: usize) -> f32 {
    if index < total / 2 {
        -BREAK_OFFSET_PX
    } else {
        BREAK_OFFSET_PX
    }
}
