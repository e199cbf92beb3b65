//! Image decoding and channel normalization.
//!
//! Every source is normalized to either RGB8 or RGBA8 here, so the packer
//! only ever sees 8-bit truecolor samples.

use std::io;
use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage, RgbaImage};
use tracing::debug;

use crate::color::ColorFormat;
use crate::error::{ConvertError, Result};

/// How the alpha channel of the source is carried into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Keep alpha only if the source image has an alpha channel
    #[default]
    Auto,
    /// Always emit alpha; opaque sources get 0xFF
    Force,
    /// Never emit alpha
    Strip,
}

impl AlphaMode {
    fn keeps_alpha(self, source_has_alpha: bool) -> bool {
        match self {
            AlphaMode::Auto => source_has_alpha,
            AlphaMode::Force => true,
            AlphaMode::Strip => false,
        }
    }
}

/// Decoded pixels, one variant per channel layout
#[derive(Debug, Clone)]
pub enum PixelGrid {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl PixelGrid {
    pub fn width(&self) -> u32 {
        match self {
            PixelGrid::Rgb(img) => img.width(),
            PixelGrid::Rgba(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            PixelGrid::Rgb(img) => img.height(),
            PixelGrid::Rgba(img) => img.height(),
        }
    }

    pub fn format(&self) -> ColorFormat {
        ColorFormat::from_alpha(matches!(self, PixelGrid::Rgba(_)))
    }

    fn from_dynamic(img: DynamicImage, alpha: AlphaMode) -> Self {
        if alpha.keeps_alpha(img.color().has_alpha()) {
            PixelGrid::Rgba(img.into_rgba8())
        } else {
            PixelGrid::Rgb(img.into_rgb8())
        }
    }
}

/// A decoded source image ready for serialization
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// File name of the source, used in the emitted comment
    pub name: String,
    pub pixels: PixelGrid,
}

impl SourceImage {
    /// Wrap pixels that did not come from a file
    pub fn from_grid(name: impl Into<String>, pixels: PixelGrid) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }
}

/// An input that exists but cannot be opened or read
fn unreadable_input(path: &Path, source: io::Error) -> ConvertError {
    debug!(path = %path.display(), error = %source, "cannot read input");
    ConvertError::InputNotFound(path.to_path_buf())
}

/// Decode an image file, detecting its format from the content
pub fn decode_file(path: &Path, alpha: AlphaMode) -> Result<SourceImage> {
    if !path.is_file() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| unreadable_input(path, source))?;

    let img = reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded source image"
    );

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(SourceImage {
        name,
        pixels: PixelGrid::from_dynamic(img, alpha),
    })
}
