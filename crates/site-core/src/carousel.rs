//! Carousel indicator math.

/// Nearest-slide index for a scroll offset, clamped to the dot count.
pub fn active_indicator(scroll_left: f32, stride: f32, count: usize) -> usize {
    if count == 0 || stride <= 0.0 {
        return 0;
    }
    let index = (scroll_left / stride).round();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(count - 1)
    }
}
