use serde::{Deserialize, Serialize};

pub const DEFAULT_STAGE_WIDTH: f64 = 640.0;
pub const DEFAULT_STAGE_HEIGHT: f64 = 480.0;

/// Size of the virtual stage. Changed only through `set_size`; never validated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    width: f64,
    height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_STAGE_WIDTH,
            height: DEFAULT_STAGE_HEIGHT,
        }
    }
}

impl ViewportConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero, negative and NaN sizes are stored as given; mapping through them is degenerate.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_640_by_480() {
        let vp = ViewportConfig::default();
        assert_eq!((vp.width(), vp.height()), (640.0, 480.0));
    }

    #[test]
    fn set_size_accepts_anything() {
        let mut vp = ViewportConfig::default();
        vp.set_size(-5.0, 0.0);
        assert_eq!((vp.width(), vp.height()), (-5.0, 0.0));
        vp.set_size(f64::NAN, 12.5);
        assert!(vp.width().is_nan());
        assert_eq!(vp.height(), 12.5);
    }
}
