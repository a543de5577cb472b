/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the capture store and the UI layer.

use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::SystemTime;

/// Represents a single captured image in the save directory
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    /// Filename only (e.g., "captured_imageSample_RGB_images_0degree.png")
    pub filename: String,
    /// Full path to the image file
    pub path: PathBuf,
    /// Filesystem modification time; newest-first ordering key on reload
    pub modified: SystemTime,
}

impl CapturedImage {
    /// Human-readable capture time shown next to the filename in the browser
    pub fn modified_label(&self) -> String {
        let local: DateTime<Local> = self.modified.into();
        local.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modified_label_format() {
        let image = CapturedImage {
            filename: "shot.png".to_string(),
            path: PathBuf::from("/tmp/shot.png"),
            modified: SystemTime::UNIX_EPOCH,
        };

        // "YYYY-MM-DD HH:MM" regardless of the local timezone
        assert_eq!(image.modified_label().len(), 16);
    }
}
