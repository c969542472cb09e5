use std::fmt;

/// Pixel-space bounding box of a detected face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl FaceRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a region from corner coordinates, clamped to the frame.
    ///
    /// Returns `None` when nothing of the box lies inside the frame.
    pub fn from_corners(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        frame_width: u32,
        frame_height: u32,
    ) -> Option<Self> {
        let left = x1.max(0.0).floor() as i32;
        let top = y1.max(0.0).floor() as i32;
        let right = (x2.min(frame_width as f64).ceil() as i32).min(frame_width as i32);
        let bottom = (y2.min(frame_height as f64).ceil() as i32).min(frame_height as i32);
        let width = right - left;
        let height = bottom - top;
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Self::new(left, top, width, height))
    }
}

impl fmt::Display for FaceRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={}, y={}, width={}, height={}",
            self.x, self.y, self.width, self.height
        )
    }
}
