use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a single image conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source path is not an existing, readable file
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Source file is not a decodable raster image
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Destination directory does not exist
    #[error("output directory does not exist: {}", .0.display())]
    OutputDirectoryMissing(PathBuf),

    /// Any other failure while writing the output
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
