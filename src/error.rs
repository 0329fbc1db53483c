//! Error types for report rendering.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while rendering a report.
///
/// There are only two failure categories: the output sink failed, or the
/// input violated the canonical-link precondition.  There is no recoverable
/// error path — a render either completes or produces an error the host must
/// handle.
#[derive(Debug, Error)]
pub enum Error {
    /// Opening, writing, or flushing the output sink failed.  Propagated
    /// unmodified; the renderer performs no retry.
    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),

    /// A channel was supplied with an empty link sequence, so it has no
    /// canonical link to display.
    #[error("channel \"{title}\" has no links")]
    ChannelWithoutLink { title: String },

    /// An item was supplied with an empty link sequence.
    #[error("item \"{title}\" has no links")]
    ItemWithoutLink { title: String },
}
