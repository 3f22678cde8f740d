// Blob placement
pub const DEFAULT_MIN_DISTANCE: f64 = 100.0;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;
pub const MIN_PERCENT: u32 = 5;
pub const MAX_PERCENT: u32 = 95;

// Decorative blobs
pub const DEFAULT_BLOB_COUNT: usize = 4;
pub const DEFAULT_BLOB_SIZE: f64 = 200.0;

// Tilt cards
pub const TILT_MAX_ROTATION: f64 = 30.0;
pub const TILT_ROTATION_FACTOR: f64 = 30.0;
pub const TILT_PERSPECTIVE: f64 = 2000.0;
pub const TILT_HOVER_SCALE: f64 = 0.95;

// Page state
pub const ACTIVE_CLASS: &str = "active";
pub const FILTER_ALL: &str = "all";
