/// Webcam capture module
///
/// This module handles:
/// - Opening and releasing the camera device (source.rs)
/// - The in-memory frame type and its pixel conversions (frame.rs)

pub mod frame;
pub mod source;
