use crate::color::ColorFormat;

/// Mirror of the fields written into an `lv_img_dsc_t`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Always 0 for LVGL v8 image headers
    pub always_zero: u8,
    pub width: u32,
    pub height: u32,
    /// Size of the pixel array in bytes
    pub data_size: usize,
    pub format: ColorFormat,
}

impl ImageDescriptor {
    pub fn new(width: u32, height: u32, format: ColorFormat, data: &[u8]) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * format.bytes_per_pixel()
        );
        Self {
            always_zero: 0,
            width,
            height,
            data_size: data.len(),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_tracks_buffer() {
        let desc = ImageDescriptor::new(2, 1, ColorFormat::TrueColorAlpha, &[0; 6]);
        assert_eq!(desc.always_zero, 0);
        assert_eq!(desc.data_size, 6);
        assert_eq!(desc.format.bytes_per_pixel() * 2, desc.data_size);
    }
}
