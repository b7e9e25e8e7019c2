/// Picsum endpoint returning a random 1000x800 JPEG on every request.
pub const PICSUM_URL: &str = "https://picsum.photos/1000/800";

/// Number of images fetched per batch.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Per-request timeout for the batch fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Title of the main window.
pub const WINDOW_TITLE: &str = "Image Viewer";

/// Initial inner window width in logical pixels.
pub const WINDOW_WIDTH: f32 = 1000.0;

/// Initial inner window height in logical pixels.
pub const WINDOW_HEIGHT: f32 = 800.0;
