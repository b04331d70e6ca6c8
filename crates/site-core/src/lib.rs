pub mod advisors;
pub mod blob;
pub mod carousel;
pub mod constants;
pub mod dial;
pub mod firefly;
pub mod helix;
pub mod layout;
pub mod ripple;
pub mod scene;
pub mod sequence;
pub mod spiral;
pub mod structure;

pub use constants::*;
pub use layout::{Orientation, Viewport};
pub use scene::{FramePlan, Scene};
