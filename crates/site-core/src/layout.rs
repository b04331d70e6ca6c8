//! Viewport measurements and the left/right column split.
//!
//! All values are in CSS pixels; the device pixel ratio is carried along so
//! the renderer can scale its backing store without re-measuring.

use glam::Vec2;

use crate::constants::{MID_BREAKPOINT, MOBILE_BREAKPOINT, SPLIT_RATIO_MID, SPLIT_RATIO_WIDE};

/// Which screen axis the helix's long axis maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Wide layouts: long axis runs vertically down the left column.
    LongAxisVertical,
    /// Narrow (single-column) layouts: long axis runs horizontally.
    LongAxisHorizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: dpr.max(1.0),
        }
    }

    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    pub fn orientation(&self) -> Orientation {
        if self.is_narrow() {
            Orientation::LongAxisHorizontal
        } else {
            Orientation::LongAxisVertical
        }
    }

    /// X coordinate of the boundary between the visual left region and the
    /// empty right region. Narrow layouts use the full width; otherwise the
    /// split sits at 50% up to the mid breakpoint and 55% above it.
    pub fn split_x(&self) -> f32 {
        if self.is_narrow() {
            self.width
        } else if self.width <= MID_BREAKPOINT {
            self.width * SPLIT_RATIO_MID
        } else {
            self.width * SPLIT_RATIO_WIDE
        }
    }

    /// Center of the visual region; the helix is drawn around this point.
    pub fn visual_center(&self) -> Vec2 {
        Vec2::new(self.split_x() * 0.5, self.height * 0.5)
    }
}
