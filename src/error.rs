//! Error types for softraster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while allocating, drawing into, or presenting a pixel buffer.
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel storage could not be allocated (zero dimension, size overflow, or out of memory).
    #[error("Cannot allocate pixel buffer of {width}x{height}")]
    Allocation {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A pixel write targeted a coordinate outside the buffer.
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        /// Buffer column of the rejected write.
        x: i32,
        /// Buffer row of the rejected write.
        y: i32,
        /// Buffer width.
        width: u32,
        /// Buffer height.
        height: u32,
    },

    /// A primitive whose parameters cannot be rasterized (e.g. negative radius).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

impl Error {
    /// Whether this error came from a single bad pixel coordinate.
    ///
    /// The frame driver uses this to decide that skipping the primitive is enough.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Allocation {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::OutOfBounds {
            x: -3,
            y: 20,
            width: 10,
            height: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("(-3, 20)"));
        assert!(msg.contains("10x10"));
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_degenerate_input() {
        let err = Error::DegenerateInput("negative radius -4".into());
        assert!(err.to_string().contains("-4"));
        assert!(!err.is_out_of_bounds());
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
