/// LVGL color format of an emitted image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// RGB565, 2 bytes per pixel
    TrueColor,
    /// RGB565 followed by an 8-bit alpha, 3 bytes per pixel
    TrueColorAlpha,
}

impl ColorFormat {
    /// Select the format from the alpha-presence flag of the source
    pub fn from_alpha(has_alpha: bool) -> Self {
        if has_alpha {
            ColorFormat::TrueColorAlpha
        } else {
            ColorFormat::TrueColor
        }
    }

    /// LVGL `lv_img_cf_t` constant written into the descriptor
    pub fn tag(self) -> &'static str {
        match self {
            ColorFormat::TrueColor => "LV_IMG_CF_TRUE_COLOR",
            ColorFormat::TrueColorAlpha => "LV_IMG_CF_TRUE_COLOR_ALPHA",
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ColorFormat::TrueColor => 2,
            ColorFormat::TrueColorAlpha => 3,
        }
    }

    pub fn has_alpha(self) -> bool {
        self == ColorFormat::TrueColorAlpha
    }
}

/// Convert RGB888 to RGB565
pub fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = ((r >> 3) & 0x1F) as u16;
    let g6 = ((g >> 2) & 0x3F) as u16;
    let b5 = ((b >> 3) & 0x1F) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Pack an opaque pixel as [high, low]
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> [u8; 2] {
    rgb565(r, g, b).to_be_bytes()
}

/// Pack a pixel with alpha as [high, low, alpha]
///
/// The alpha byte is the source value, not quantized.
#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> [u8; 3] {
    let [hi, lo] = pack_rgb(r, g, b);
    [hi, lo, a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(rgb565(255, 0, 0), 0xF800);
        assert_eq!(rgb565(0, 255, 0), 0x07E0);
        assert_eq!(rgb565(0, 0, 255), 0x001F);
        assert_eq!(rgb565(255, 255, 255), 0xFFFF);
        assert_eq!(rgb565(0, 0, 0), 0x0000);
    }

    #[test]
    fn test_bit_fields_exhaustive() {
        for v in 0..=255u8 {
            let red = rgb565(v, 0, 0);
            let green = rgb565(0, v, 0);
            let blue = rgb565(0, 0, v);
            assert_eq!(red >> 11, (v >> 3) as u16);
            assert_eq!((green >> 5) & 0x3F, (v >> 2) as u16);
            assert_eq!(blue & 0x1F, (v >> 3) as u16);

            let mixed = rgb565(v, v.wrapping_mul(7), v.wrapping_add(91));
            assert_eq!(mixed >> 11, (v >> 3) as u16);
            assert_eq!((mixed >> 5) & 0x3F, (v.wrapping_mul(7) >> 2) as u16);
            assert_eq!(mixed & 0x1F, (v.wrapping_add(91) >> 3) as u16);
        }
    }

    #[test]
    fn test_byte_order_is_big_endian() {
        assert_eq!(pack_rgb(255, 0, 0), [0xF8, 0x00]);
        assert_eq!(pack_rgb(0, 255, 0), [0x07, 0xE0]);
    }

    #[test]
    fn test_alpha_is_not_quantized() {
        assert_eq!(pack_rgba(255, 0, 0, 128), [0xF8, 0x00, 0x80]);
        assert_eq!(pack_rgba(0, 255, 0, 0x07), [0x07, 0xE0, 0x07]);
    }

    #[test]
    fn test_format_tags() {
        assert_eq!(ColorFormat::from_alpha(false), ColorFormat::TrueColor);
        assert_eq!(ColorFormat::from_alpha(true), ColorFormat::TrueColorAlpha);
        assert_eq!(ColorFormat::TrueColor.tag(), "LV_IMG_CF_TRUE_COLOR");
        assert_eq!(ColorFormat::TrueColorAlpha.tag(), "LV_IMG_CF_TRUE_COLOR_ALPHA");
        assert_eq!(ColorFormat::TrueColor.bytes_per_pixel(), 2);
        assert_eq!(ColorFormat::TrueColorAlpha.bytes_per_pixel(), 3);
    }
}
