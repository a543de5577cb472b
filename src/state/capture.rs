/// Snapshot naming
///
/// Every snapshot is named from the user-entered prefix (or a default)
/// plus a cycling "angle" suffix. The angle is purely cosmetic filename
/// diversification, not a physical measurement.

/// Prefix substituted when the user leaves the prefix field empty
pub const DEFAULT_PREFIX: &str = "captured_image";

/// Degrees added per snapshot
const ANGLE_STEP: u32 = 5;

/// Exclusive upper bound; reaching it wraps the counter back to 0
const ANGLE_LIMIT: u32 = 360;

/// Cycling angle suffix: 0, 5, ..., 355, then back to 0.
///
/// Advanced once per dispatched snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AngleCounter {
    current: u32,
}

impl AngleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The angle the next snapshot will use
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Step forward, wrapping to 0 past the last step before 360
    pub fn advance(&mut self) {
        self.current += ANGLE_STEP;
        if self.current >= ANGLE_LIMIT {
            self.current = 0;
        }
    }
}

/// Derive the snapshot filename for a prefix and angle.
///
/// An empty prefix falls back to `DEFAULT_PREFIX`. There is no separator
/// between the prefix and the fixed stem.
pub fn snapshot_filename(prefix: &str, angle: u32) -> String {
    let prefix = if prefix.is_empty() {
        DEFAULT_PREFIX
    } else {
        prefix
    };
    format!("{}Sample_RGB_images_{}degree.png", prefix, angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix_filename() {
        assert_eq!(
            snapshot_filename("", 0),
            "captured_imageSample_RGB_images_0degree.png"
        );
    }

    #[test]
    fn test_custom_prefix_filename() {
        assert_eq!(
            snapshot_filename("lab_", 45),
            "lab_Sample_RGB_images_45degree.png"
        );
    }

    #[test]
    fn test_ten_snapshots_consume_expected_angles() {
        let mut counter = AngleCounter::new();
        let mut angles = Vec::new();

        for _ in 0..10 {
            angles.push(counter.current());
            counter.advance();
        }

        assert_eq!(angles, vec![0, 5, 10, 15, 20, 25, 30, 35, 40, 45]);
        assert_eq!(counter.current(), 50);
    }

    #[test]
    fn test_angle_wraps_to_zero() {
        let mut counter = AngleCounter::new();

        // A full cycle is 72 steps of 5 degrees
        for _ in 0..71 {
            counter.advance();
        }
        assert_eq!(counter.current(), 355);

        counter.advance();
        assert_eq!(counter.current(), 0);
    }
}
