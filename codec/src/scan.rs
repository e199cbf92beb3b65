use crate::color::{pack_rgb, pack_rgba};
use crate::decode::PixelGrid;

/// Serialize the grid row by row, top row first, left to right.
///
/// Firmware decodes the buffer as (width, height, row-major), so the order
/// here must not change.
pub fn serialize(pixels: &PixelGrid) -> Vec<u8> {
    let len =
        pixels.width() as usize * pixels.height() as usize * pixels.format().bytes_per_pixel();
    let mut data = Vec::with_capacity(len);

    match pixels {
        PixelGrid::Rgb(img) => {
            for y in 0..img.height() {
                for x in 0..img.width() {
                    let [r, g, b] = img.get_pixel(x, y).0;
                    data.extend_from_slice(&pack_rgb(r, g, b));
                }
            }
        }
        PixelGrid::Rgba(img) => {
            for y in 0..img.height() {
                for x in 0..img.width() {
                    let [r, g, b, a] = img.get_pixel(x, y).0;
                    data.extend_from_slice(&pack_rgba(r, g, b, a));
                }
            }
        }
    }

    debug_assert_eq!(data.len(), len);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_two_pixels_without_alpha() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));

        assert_eq!(serialize(&PixelGrid::Rgb(img)), vec![0xF8, 0x00, 0x07, 0xE0]);
    }

    #[test]
    fn test_two_pixels_with_alpha() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 128]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));

        assert_eq!(
            serialize(&PixelGrid::Rgba(img)),
            vec![0xF8, 0x00, 0x80, 0x07, 0xE0, 0xFF]
        );
    }

    #[test]
    fn test_row_major_order() {
        // 2x2: red, green / blue, white
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(0, 1, Rgb([0, 0, 255]));
        img.put_pixel(1, 1, Rgb([255, 255, 255]));

        assert_eq!(
            serialize(&PixelGrid::Rgb(img)),
            vec![0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_length_law() {
        for (w, h) in [(1, 1), (3, 5), (16, 2), (7, 9)] {
            let rgb = PixelGrid::Rgb(RgbImage::new(w, h));
            let rgba = PixelGrid::Rgba(RgbaImage::new(w, h));
            assert_eq!(serialize(&rgb).len(), (w * h * 2) as usize);
            assert_eq!(serialize(&rgba).len(), (w * h * 3) as usize);
        }
    }

    #[test]
    fn test_deterministic() {
        let img = RgbaImage::from_fn(5, 4, |x, y| Rgba([x as u8 * 40, y as u8 * 60, 7, 200]));
        let grid = PixelGrid::Rgba(img);
        assert_eq!(serialize(&grid), serialize(&grid));
    }
}
