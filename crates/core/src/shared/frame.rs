use ndarray::ArrayView3;

use crate::shared::face_region::FaceRegion;

const CHANNELS: usize = 3;

/// A decoded still image: contiguous RGB bytes in row-major order.
///
/// Decoding happens at the I/O boundary only; detection and recognition
/// read pixels through [`Frame::as_ndarray`] or a cropped copy.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn from_rgb_image(image: image::RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(image.into_raw(), width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(
            (self.height as usize, self.width as usize, CHANNELS),
            &self.data,
        )
        .expect("Frame data length must match dimensions")
    }

    /// Copies the pixels inside `region` (clamped to the frame) into a new
    /// RGB image. Returns `None` if the clamped region is empty.
    pub fn crop(&self, region: &FaceRegion) -> Option<image::RgbImage> {
        let x0 = region.x.clamp(0, self.width as i32) as u32;
        let y0 = region.y.clamp(0, self.height as i32) as u32;
        let x1 = (region.x + region.width).clamp(0, self.width as i32) as u32;
        let y1 = (region.y + region.height).clamp(0, self.height as i32) as u32;
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        let crop_w = x1 - x0;
        let crop_h = y1 - y0;
        let row_bytes = self.width as usize * CHANNELS;
        let mut pixels = Vec::with_capacity(crop_w as usize * crop_h as usize * CHANNELS);
        for row in y0..y1 {
            let start = row as usize * row_bytes + x0 as usize * CHANNELS;
            pixels.extend_from_slice(&self.data[start..start + crop_w as usize * CHANNELS]);
        }
        image::RgbImage::from_raw(crop_w, crop_h, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data, 2, 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2);
    }

    #[test]
    fn test_as_ndarray_pixel_access() {
        // 2x2 RGB: pixel (row=1, col=0) is red
        let mut data = vec![0u8; 12];
        data[6] = 255;
        let frame = Frame::new(data, 2, 2);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 2, 3]);
        assert_eq!(arr[[1, 0, 0]], 255);
        assert_eq!(arr[[1, 0, 1]], 0);
    }

    #[test]
    fn test_from_rgb_image_keeps_pixels() {
        let mut img = image::RgbImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgb([1, 2, 3]));
        let frame = Frame::from_rgb_image(img);
        assert_eq!(frame.width(), 3);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.as_ndarray()[[1, 2, 2]], 3);
    }

    #[test]
    fn test_crop_copies_region() {
        let mut img = image::RgbImage::new(4, 4);
        img.put_pixel(2, 3, image::Rgb([9, 9, 9]));
        let frame = Frame::from_rgb_image(img);

        let crop = frame.crop(&FaceRegion::new(1, 2, 2, 2)).unwrap();
        assert_eq!(crop.dimensions(), (2, 2));
        assert_eq!(crop.get_pixel(1, 1), &image::Rgb([9, 9, 9]));
    }

    #[test]
    fn test_crop_clamps_to_frame() {
        let frame = Frame::new(vec![0u8; 4 * 4 * 3], 4, 4);
        let crop = frame.crop(&FaceRegion::new(-2, 3, 10, 10)).unwrap();
        assert_eq!(crop.dimensions(), (4, 1));
    }

    #[test]
    fn test_crop_outside_frame_is_none() {
        let frame = Frame::new(vec![0u8; 4 * 4 * 3], 4, 4);
        assert!(frame.crop(&FaceRegion::new(10, 10, 5, 5)).is_none());
    }
}
