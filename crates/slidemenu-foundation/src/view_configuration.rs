//! Platform gesture thresholds and display density.
//!
//! Thresholds are declared in density-independent pixels and scaled once
//! against the reported display density when a widget is configured.

use slidemenu_ui_graphics::Dp;

/// Touch slop: movement beyond this distance turns a press into a drag.
///
/// Matches the platform default (8 dp) so sliding agrees with nested
/// scrollables on when a drag has started.
pub const TOUCH_SLOP: Dp = Dp(8.0);

/// Maximum fling velocity in dp per second. Release velocities are clamped to it.
pub const MAX_FLING_VELOCITY: Dp = Dp(8_000.0);

/// Density assumed when the platform does not report one.
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Display metrics as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Physical pixels per density-independent pixel.
    pub density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
        }
    }
}

impl DisplayMetrics {
    pub fn new(density: f32) -> Self {
        Self::from_reported(Some(density))
    }

    /// Accepts whatever the platform reported, falling back to
    /// [`DEFAULT_DENSITY`] when the value is missing or unusable.
    pub fn from_reported(density: Option<f32>) -> Self {
        match density {
            Some(density) if density.is_finite() && density > 0.0 => Self { density },
            Some(density) => {
                log::warn!("ignoring reported display density {density}; using {DEFAULT_DENSITY}");
                Self::default()
            }
            None => {
                log::warn!("display density unavailable; using {DEFAULT_DENSITY}");
                Self::default()
            }
        }
    }

    pub fn to_px(&self, dp: Dp) -> f32 {
        dp.to_px(self.density)
    }
}

/// Gesture thresholds in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    /// Minimum displacement, in pixels, before a touch counts as a drag.
    pub touch_slop: f32,
    /// Upper bound on release velocity, in pixels per second.
    pub maximum_fling_velocity: f32,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::scaled(DisplayMetrics::default())
    }
}

impl ViewConfiguration {
    /// Platform defaults scaled to `metrics`. The slop is truncated to whole pixels.
    pub fn scaled(metrics: DisplayMetrics) -> Self {
        Self {
            touch_slop: metrics.to_px(TOUCH_SLOP).trunc(),
            maximum_fling_velocity: metrics.to_px(MAX_FLING_VELOCITY),
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_maximum_fling_velocity(mut self, velocity: f32) -> Self {
        self.maximum_fling_velocity = velocity;
        self
    }
}
