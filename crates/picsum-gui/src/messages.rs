use std::time::Duration;

use picsum_core::config::SourceConfig;
use picsum_core::picture::PictureSequence;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Download a fresh batch of images.
    FetchBatch { source: SourceConfig },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    BatchReady {
        sequence: PictureSequence,
        elapsed: Duration,
    },
    /// The whole batch was dropped; nothing to show.
    BatchFailed { message: String },
}
