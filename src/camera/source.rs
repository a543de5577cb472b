use crate::camera::frame::Frame;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use thiserror::Error;

/// Errors that can occur at the camera seam.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("Failed to open camera device: {0}")]
    OpenFailed(String),

    #[error("Failed to decode camera frame: {0}")]
    Decode(String),
}

/// Wraps one camera device handle.
///
/// Produces a lazy, infinite sequence of RGB frames on demand. The handle
/// is acquired once at open and released exactly once when the source is
/// dropped, including on abnormal window teardown.
pub struct FrameSource {
    camera: Camera,
}

impl FrameSource {
    /// Open the camera at `index` and start streaming.
    ///
    /// Fails when no device can be acquired; there is no retry logic.
    pub fn open(index: u32) -> Result<Self, CameraError> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

        let mut camera = Camera::new(CameraIndex::Index(index), requested)
            .map_err(|e| CameraError::OpenFailed(e.to_string()))?;

        camera
            .open_stream()
            .map_err(|e| CameraError::OpenFailed(e.to_string()))?;

        // The stream may settle on a slightly different resolution than requested
        let resolution = camera.resolution();
        println!(
            "📷 Webcam {} opened at {}x{} @ {} fps",
            index,
            resolution.width(),
            resolution.height(),
            camera.frame_rate()
        );

        Ok(Self { camera })
    }

    /// Pull the next available frame.
    ///
    /// Returns `Ok(None)` when the device yields nothing this instant;
    /// callers silently skip and try again on the next tick.
    pub fn read_frame(&mut self) -> Result<Option<Frame>, CameraError> {
        let buffer = match self.camera.frame() {
            Ok(buffer) => buffer,
            // Transient no-frame condition (device busy or stalled)
            Err(_) => return Ok(None),
        };

        let image = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::Decode(e.to_string()))?;

        Ok(Some(Frame::new(image)))
    }
}

impl Drop for FrameSource {
    fn drop(&mut self) {
        let _ = self.camera.stop_stream();
    }
}
