//! Conversion of raster images into LVGL C image sources.
//!
//! Pixels are packed as big-endian RGB565, optionally followed by an 8-bit
//! alpha byte, in row-major order. The packed bytes are emitted as a
//! `uint8_t` array together with an `lv_img_dsc_t` describing it.

pub mod color;
pub mod convert;
pub mod decode;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod naming;
pub mod scan;

pub use color::{pack_rgb, pack_rgba, rgb565, ColorFormat};
pub use convert::{inspect_file, Conversion, ConversionReport, EncodedImage, CRC16};
pub use decode::{decode_file, AlphaMode, PixelGrid, SourceImage};
pub use descriptor::ImageDescriptor;
pub use emit::{render, write_atomic, EmitOptions, BYTES_PER_LINE};
pub use error::{ConvertError, Result};
pub use naming::AssetNames;
pub use scan::serialize;
