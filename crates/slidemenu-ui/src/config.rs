//! Tunables for the sliding surface.

use std::time::Duration;

use slidemenu_animation::Easing;
use slidemenu_foundation::{DisplayMetrics, ViewConfiguration};
use slidemenu_ui_graphics::Dp;

/// Fraction of the width the menu occupies when open.
pub const DEFAULT_SLIDER_WIDTH: f32 = 0.85;

/// Duration of programmatic open/close animations. Drag snaps use a share of it
/// proportional to the distance left to travel.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(500);

/// A drag must cover `1 / SWIPE_FRACTION_DENOMINATOR` of the width to flip state on release.
pub const SWIPE_FRACTION_DENOMINATOR: i32 = 8;

/// Release velocity that forces a snap regardless of position.
pub const SNAP_VELOCITY: Dp = Dp(600.0);

/// A press released within this time without dragging is a tap.
pub const MAX_CLICK_DELAY: Duration = Duration::from_millis(700);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    pub slider_width_fraction: f32,
    pub animation_duration: Duration,
    pub swipe_fraction_denominator: i32,
    pub snap_velocity: Dp,
    pub max_click_delay: Duration,
    pub easing: Easing,
    pub display_metrics: DisplayMetrics,
    pub view_configuration: ViewConfiguration,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::for_display(DisplayMetrics::default())
    }
}

impl SurfaceConfig {
    /// Defaults with gesture thresholds scaled to `metrics`.
    pub fn for_display(metrics: DisplayMetrics) -> Self {
        Self {
            slider_width_fraction: DEFAULT_SLIDER_WIDTH,
            animation_duration: ANIMATION_DURATION,
            swipe_fraction_denominator: SWIPE_FRACTION_DENOMINATOR,
            snap_velocity: SNAP_VELOCITY,
            max_click_delay: MAX_CLICK_DELAY,
            easing: Easing::default(),
            display_metrics: metrics,
            view_configuration: ViewConfiguration::scaled(metrics),
        }
    }

    pub fn with_view_configuration(mut self, view_configuration: ViewConfiguration) -> Self {
        self.view_configuration = view_configuration;
        self
    }

    pub fn with_slider_width_fraction(mut self, fraction: f32) -> Self {
        self.slider_width_fraction = fraction;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Snap velocity in whole pixels per second for the configured density.
    pub fn snap_velocity_px(&self) -> i32 {
        self.display_metrics.to_px(self.snap_velocity) as i32
    }

    pub fn max_click_delay_ms(&self) -> u64 {
        u64::try_from(self.max_click_delay.as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_velocity_tracks_density() {
        assert_eq!(SurfaceConfig::default().snap_velocity_px(), 600);
        assert_eq!(
            SurfaceConfig::for_display(DisplayMetrics::new(2.0)).snap_velocity_px(),
            1200
        );
        assert_eq!(
            SurfaceConfig::for_display(DisplayMetrics::new(1.5)).snap_velocity_px(),
            900
        );
    }

    #[test]
    fn defaults_match_widget_constants() {
        let config = SurfaceConfig::default();
        assert_eq!(config.slider_width_fraction, 0.85);
        assert_eq!(config.animation_duration, Duration::from_millis(500));
        assert_eq!(config.max_click_delay_ms(), 700);
        assert_eq!(config.view_configuration.touch_slop, 8.0);
    }
}
