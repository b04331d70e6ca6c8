pub mod carousel;
pub mod dial;
pub mod popup;
pub mod spiral;
pub mod switch_demo;
