use std::io;
use std::path::PathBuf;

/// Errors reported by [`MaxHeap`](crate::heap::MaxHeap) operations.
#[derive(Debug, thiserror::Error)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,
    #[error("cannot read integers from {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HeapError>;
