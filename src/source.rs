//! Integer source consumed by [`MaxHeap::build_heap_from_file`](crate::heap::MaxHeap::build_heap_from_file).

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{HeapError, Result};

/// Parses whitespace separated integers, stopping at the first token that
/// is not an `i32`.
pub fn parse_integers(text: &str) -> Vec<i32> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        match token.parse::<i32>() {
            Ok(v) => values.push(v),
            Err(e) => {
                warn!("stopped reading at non-integer token {:?}: {}", token, e);
                break;
            }
        }
    }
    values
}

/// Reads every integer from the file at `path`.
pub fn read_integers<P: AsRef<Path>>(path: P) -> Result<Vec<i32>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| HeapError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let values = parse_integers(&text);
    debug!("read {} integers from {}", values.len(), path.display());
    Ok(values)
}
