use crate::camera::frame::Frame;
use crate::state::data::CapturedImage;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Image file extensions the browser recognizes
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Errors from capture store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// The Capture Store manages the save directory.
///
/// It is a flat collection of image files identified by filename:
/// snapshots are written into it, the browser enumerates it, and delete
/// removes one file by name. The in-memory captured list mirrors this
/// directory; it is rebuilt from `enumerate` on every reload.
#[derive(Debug, Clone)]
pub struct CaptureStore {
    directory: PathBuf,
}

impl CaptureStore {
    /// Create a store over `directory`, creating it if needed
    pub fn new(directory: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    /// The default save directory:
    /// - Linux: ~/Pictures/cam-capture
    /// - macOS: ~/Pictures/cam-capture
    /// - Windows: %USERPROFILE%\Pictures\cam-capture
    pub fn default_directory() -> PathBuf {
        let mut path = dirs::picture_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user picture directory");

        path.push("cam-capture");
        path
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Encode `frame` as PNG and write it under `filename`.
    ///
    /// A same-name file is silently overwritten; there is no existence
    /// check. Returns the stored entry for the in-memory list.
    pub fn write_frame(&self, filename: &str, frame: &Frame) -> Result<CapturedImage, StoreError> {
        let path = self.directory.join(filename);
        frame.image().save(&path)?;

        let modified = fs::metadata(&path)?.modified()?;

        Ok(CapturedImage {
            filename: filename.to_string(),
            path,
            modified,
        })
    }

    /// List the store's image files, newest first.
    ///
    /// Only files with a recognized image extension are returned, sorted
    /// by modification time descending.
    pub fn enumerate(&self) -> Result<Vec<CapturedImage>, StoreError> {
        let mut images = Vec::new();

        for entry in WalkDir::new(&self.directory)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            // Check the extension against the recognized set
            if let Some(extension) = path.extension() {
                let ext = extension.to_string_lossy().to_lowercase();
                if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                    continue;
                }
            } else {
                continue;
            }

            let filename = match path.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };

            let modified = fs::metadata(path)?.modified()?;

            images.push(CapturedImage {
                filename,
                path: path.to_path_buf(),
                modified,
            });
        }

        images.sort_by(|a, b| b.modified.cmp(&a.modified));

        Ok(images)
    }

    /// Remove `filename` from the store.
    ///
    /// Returns `Ok(true)` when a file was removed and `Ok(false)` when it
    /// did not exist (deleting a nonexistent entry is a no-op).
    pub fn delete(&self, filename: &str) -> Result<bool, StoreError> {
        let path = self.directory.join(filename);

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn test_frame() -> Frame {
        Frame::new(RgbImage::from_raw(2, 2, vec![128; 12]).unwrap())
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let dir = tempdir().unwrap();
        let store = CaptureStore::new(dir.path().to_path_buf()).unwrap();

        assert!(store.enumerate().unwrap().is_empty());
    }

    #[test]
    fn test_write_frame_creates_file() {
        let dir = tempdir().unwrap();
        let store = CaptureStore::new(dir.path().to_path_buf()).unwrap();

        let image = store.write_frame("shot.png", &test_frame()).unwrap();

        assert_eq!(image.filename, "shot.png");
        assert!(image.path.exists());

        let listed = store.enumerate().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].filename, "shot.png");
    }

    #[test]
    fn test_enumerate_filters_and_sorts_newest_first() {
        let dir = tempdir().unwrap();
        let store = CaptureStore::new(dir.path().to_path_buf()).unwrap();

        fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();
        store.write_frame("first.png", &test_frame()).unwrap();
        // Ensure a distinct modification time for the ordering check
        thread::sleep(Duration::from_millis(50));
        store.write_frame("second.png", &test_frame()).unwrap();

        let listed = store.enumerate().unwrap();
        let names: Vec<&str> = listed.iter().map(|i| i.filename.as_str()).collect();

        assert_eq!(names, vec!["second.png", "first.png"]);
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = tempdir().unwrap();
        let store = CaptureStore::new(dir.path().to_path_buf()).unwrap();

        let image = store.write_frame("shot.png", &test_frame()).unwrap();
        assert!(store.delete("shot.png").unwrap());

        assert!(!image.path.exists());
        assert!(store.enumerate().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_file_is_noop() {
        let dir = tempdir().unwrap();
        let store = CaptureStore::new(dir.path().to_path_buf()).unwrap();

        assert!(!store.delete("ghost.png").unwrap());
    }
}
