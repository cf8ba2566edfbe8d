//! Error types for loading settings and opening sources.
//!
//! Sink failures are not wrapped: the formatter returns the sink's own
//! `io::Error` unchanged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur outside the write loop.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings could not be loaded or deserialized.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A timestamp file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
