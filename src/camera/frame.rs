use image::RgbImage;

/// One still image pulled from the live camera feed.
///
/// The pixel buffer is tightly packed RGB8 at the device-reported
/// resolution. A frame lives only for the duration of one fetch: the
/// preview converts it for display, a snapshot encodes it to PNG.
#[derive(Debug, Clone)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The underlying RGB buffer, used for PNG encoding
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Convert to RGBA bytes for the display surface.
    ///
    /// The preview widget wants RGBA; the camera delivers RGB, so every
    /// pixel gains an opaque alpha byte.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.image.len() / 3 * 4);
        for pixel in self.image.pixels() {
            bytes.push(pixel[0]);
            bytes.push(pixel[1]);
            bytes.push(pixel[2]);
            bytes.push(0xFF);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_conversion_adds_opaque_alpha() {
        let image = RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let frame = Frame::new(image);

        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.to_rgba_bytes(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
