use crate::constants::{MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, ZOOM_STEP_FACTOR};

/// Page zoom as a step count; each step scales by [`ZOOM_STEP_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomLevel(i32);

impl ZoomLevel {
    pub fn level(self) -> i32 {
        self.0
    }

    pub fn factor(self) -> f64 {
        ZOOM_STEP_FACTOR.powi(self.0)
    }

    pub fn zoom_in(self) -> Self {
        Self((self.0 + 1).min(MAX_ZOOM_LEVEL))
    }

    pub fn zoom_out(self) -> Self {
        Self((self.0 - 1).max(MIN_ZOOM_LEVEL))
    }

    pub fn reset() -> Self {
        Self::default()
    }
}
