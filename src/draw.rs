use std::path::PathBuf;

pub mod events;
pub mod list;
pub mod range;

pub use events::{DrawEvent, DrawLog};
pub use list::{ListDraw, ListStatus, ListView, LoadSummary};
pub use range::{RangeDraw, RangeState, RangeStatus};

/// Failures of a draw-pool operation.
///
/// All of them are recoverable: the operation that produced one has not
/// mutated anything, except `InvalidBound`, which leaves the range
/// controller unconfigured.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("nothing left to draw; the pool is empty")]
    EmptyPool,
    #[error("the range has not been configured; set N first")]
    Unconfigured,
    #[error("invalid bound {0}; N must be a positive integer")]
    InvalidBound(i64),
    #[error("cannot open `{}`: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read `{}`: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write `{}`: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_message_names_path() {
        let err = DrawError::FileOpen {
            path: PathBuf::from("missing/names.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing/names.txt"));
    }

    #[test]
    fn test_read_and_open_failures_are_worded_apart() {
        let source = || std::io::Error::from(std::io::ErrorKind::InvalidData);
        let path = PathBuf::from("names.txt");
        let open = DrawError::FileOpen {
            path: path.clone(),
            source: source(),
        };
        let read = DrawError::FileRead {
            path,
            source: source(),
        };
        assert!(open.to_string().starts_with("cannot open `names.txt`"));
        assert!(read.to_string().starts_with("cannot read `names.txt`"));
    }
}
