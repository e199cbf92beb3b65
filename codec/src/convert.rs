use std::path::{Path, PathBuf};

use crc::{Crc, CRC_16_IBM_SDLC};
use tracing::{debug, info};

use crate::decode::{decode_file, AlphaMode, SourceImage};
use crate::descriptor::ImageDescriptor;
use crate::emit::{output_dir, render, write_atomic, EmitOptions};
use crate::error::{ConvertError, Result};
use crate::naming::AssetNames;
use crate::scan::serialize;

/// CRC-16 over the packed pixel data, reported to the operator
pub const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_SDLC);

/// Packed pixels plus the descriptor that describes them
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub descriptor: ImageDescriptor,
    pub data: Vec<u8>,
}

impl EncodedImage {
    pub fn encode(image: &SourceImage) -> Self {
        let data = serialize(&image.pixels);
        let descriptor = ImageDescriptor::new(
            image.pixels.width(),
            image.pixels.height(),
            image.pixels.format(),
            &data,
        );
        Self { descriptor, data }
    }

    pub fn checksum(&self) -> u16 {
        CRC16.checksum(&self.data)
    }
}

/// Outcome of a completed conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub symbol: String,
    pub descriptor: ImageDescriptor,
    pub checksum: u16,
}

/// One image-to-C conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub names: AssetNames,
    pub alpha: AlphaMode,
    pub emit: EmitOptions,
}

impl Conversion {
    pub fn new(names: AssetNames) -> Self {
        Self {
            names,
            alpha: AlphaMode::default(),
            emit: EmitOptions::default(),
        }
    }

    pub fn with_alpha(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_emit_options(mut self, emit: EmitOptions) -> Self {
        self.emit = emit;
        self
    }

    /// Render an already decoded image to C source
    pub fn render(&self, image: &SourceImage) -> (EncodedImage, String) {
        let encoded = EncodedImage::encode(image);
        let text = render(
            &self.names,
            &image.name,
            &encoded.descriptor,
            &encoded.data,
            &self.emit,
        );
        (encoded, text)
    }

    /// Convert `input` and write the C source to `output`.
    ///
    /// Both paths are used as given. Nothing is written unless decoding and
    /// rendering succeed; an existing `output` is replaced.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConversionReport> {
        let dir = output_dir(output);
        if !dir.is_dir() {
            return Err(ConvertError::OutputDirectoryMissing(dir.to_path_buf()));
        }

        let image = decode_file(input, self.alpha)?;
        let (encoded, text) = self.render(&image);
        debug!(
            symbol = %self.names.symbol,
            format = encoded.descriptor.format.tag(),
            data_size = encoded.descriptor.data_size,
            "encoded image"
        );

        write_atomic(output, &text)?;

        let report = ConversionReport {
            output: output.to_path_buf(),
            symbol: self.names.symbol.clone(),
            descriptor: encoded.descriptor,
            checksum: encoded.checksum(),
        };
        info!(
            input = %input.display(),
            output = %output.display(),
            width = report.descriptor.width,
            height = report.descriptor.height,
            "conversion complete"
        );
        Ok(report)
    }
}

/// Decode and encode `input` without writing anything
pub fn inspect_file(input: &Path, alpha: AlphaMode) -> Result<EncodedImage> {
    let image = decode_file(input, alpha)?;
    Ok(EncodedImage::encode(&image))
}
