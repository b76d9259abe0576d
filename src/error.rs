use std::io;
use thiserror::Error;

/// Failures of the I/O stages around the core fold.
///
/// Nothing the classifier or the aggregator does can fail a run; a
/// malformed line only loses that line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read game log: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write reports: {0}")]
    Write(#[source] io::Error),

    #[error("failed to serialize reports: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stage stopped receiving before its producer finished.
    #[error("pipeline stage `{0}` hung up early")]
    Disconnected(&'static str),

    #[error("pipeline stage `{0}` panicked")]
    StagePanicked(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
