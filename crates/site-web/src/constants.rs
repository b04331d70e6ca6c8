// Element ids and colors shared across the web modules.

// Canvas and scene
pub const HELIX_CANVAS_ID: &str = "helix-canvas";
pub const SCENE_SEED: u64 = 42;

// Structure viewer
pub const VIEWER_CONTAINER_ID: &str = "structure-canvas";
pub const SPIN_BUTTON_ID: &str = "btn-spin";
pub const RESET_BUTTON_ID: &str = "btn-reset";

// Sequence display
pub const SEQUENCE_CONTAINER_ID: &str = "seq-display";

// Advisor popup
pub const POPUP_ID: &str = "advisor-popup";
pub const POPUP_CLOSE_ID: &str = "advisor-close";
pub const POPUP_NAME_ID: &str = "advisor-name";
pub const POPUP_TITLE_ID: &str = "advisor-title";
pub const POPUP_BIO_ID: &str = "advisor-bio";
pub const POPUP_PHOTO_ID: &str = "advisor-photo";

// Carousel
pub const CAROUSEL_TRACK_ID: &str = "carousel-track";
pub const CAROUSEL_DOT_SELECTOR: &str = "#carousel-dots [data-dot]";

// Transcription-factor switch demo
pub const SWITCH_TOGGLE_ID: &str = "tf-switch-toggle";
pub const SWITCH_PROMOTER_ID: &str = "tf-promoter";
pub const SWITCH_REPORTER_ID: &str = "tf-reporter";

// Dial
pub const DIAL_ID: &str = "dial";
pub const DIAL_KNOB_ID: &str = "dial-knob";
pub const DIAL_CHART_PATH_ID: &str = "dial-chart-path";
pub const DIAL_READOUT_ID: &str = "dial-readout";
pub const DIAL_CHART_WIDTH: f32 = 260.0;
pub const DIAL_CHART_HEIGHT: f32 = 120.0;
pub const DIAL_CHART_SAMPLES: usize = 40;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Palette (r, g, b triples formatted into rgba() at draw time)
pub const STRAND_RGB: (u8, u8, u8) = (79, 70, 229);
pub const BASE_PAIR_RGB: (u8, u8, u8) = (99, 102, 241);
pub const DOT_RGB: (u8, u8, u8) = (49, 46, 129);
pub const BLOB_RGB: (u8, u8, u8) = (13, 148, 136);
pub const FIREFLY_RGB: (u8, u8, u8) = (250, 204, 21);
