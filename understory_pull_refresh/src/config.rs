// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning for the pull gesture and its animations.

use core::fmt;
use core::time::Duration;

/// Default distance, in dp, from the rest position to where the header settles
/// while refreshing.
pub const DEFAULT_SPINNER_FINAL_OFFSET: f64 = 50.0;

/// Default touch slop in dp.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Tuning for a [`SwipeRefresh`](crate::SwipeRefresh).
///
/// Distances are in the same units as the touch events fed to the container
/// (usually device pixels). [`RefreshConfig::for_density`] builds a config
/// from dp defaults.
///
/// ```
/// use understory_pull_refresh::RefreshConfig;
///
/// let config = RefreshConfig::for_density(2.0);
/// assert_eq!(config.total_drag_distance, 100.0);
/// assert_eq!(config.touch_slop, 16.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RefreshConfig {
    /// Distance the pointer must travel down before a touch becomes a drag.
    pub touch_slop: f64,
    /// Damped drag distance beyond which a release requests a refresh.
    pub total_drag_distance: f64,
    /// Offset of the target while refreshing; also the slingshot distance of
    /// the tension curve.
    pub spinner_final_offset: f64,
    /// Fraction of pointer travel applied to the overscroll.
    pub drag_rate: f64,
    /// Factor of the decelerate interpolator used by offset animations.
    pub decelerate_factor: f64,
    /// Duration of the animation to the refreshing offset.
    pub animate_to_trigger_duration: Duration,
    /// Duration of the animation back to the rest offset.
    pub animate_to_start_duration: Duration,
    /// Duration of the header reveal for programmatic refreshes.
    pub alpha_in_duration: Duration,
    /// Duration of the header scale-down after a cancelled pull.
    pub scale_down_duration: Duration,
    /// How long the completion label stays up before the return animation.
    pub complete_delay: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            total_drag_distance: DEFAULT_SPINNER_FINAL_OFFSET,
            spinner_final_offset: DEFAULT_SPINNER_FINAL_OFFSET,
            drag_rate: 0.5,
            decelerate_factor: 2.0,
            animate_to_trigger_duration: Duration::from_millis(200),
            animate_to_start_duration: Duration::from_millis(200),
            alpha_in_duration: Duration::from_millis(200),
            scale_down_duration: Duration::from_millis(150),
            complete_delay: Duration::from_millis(500),
        }
    }
}

impl RefreshConfig {
    /// Returns the defaults with every distance scaled from dp by `density`.
    #[must_use]
    pub fn for_density(density: f64) -> Self {
        let defaults = Self::default();
        Self {
            touch_slop: defaults.touch_slop * density,
            total_drag_distance: defaults.total_drag_distance * density,
            spinner_final_offset: defaults.spinner_final_offset * density,
            ..defaults
        }
    }

    /// Checks that the distances and rates can drive the gesture.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.total_drag_distance) {
            return Err(ConfigError::NonPositiveDragDistance(self.total_drag_distance));
        }
        if !is_positive(self.spinner_final_offset) {
            return Err(ConfigError::NonPositiveSpinnerOffset(self.spinner_final_offset));
        }
        if !is_positive(self.drag_rate) {
            return Err(ConfigError::NonPositiveDragRate(self.drag_rate));
        }
        if !is_positive(self.decelerate_factor) {
            return Err(ConfigError::NonPositiveDecelerateFactor(
                self.decelerate_factor,
            ));
        }
        if self.touch_slop.is_nan() || self.touch_slop < 0.0 {
            return Err(ConfigError::NegativeTouchSlop(self.touch_slop));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    // NaN compares false.
    value > 0.0
}

/// A [`RefreshConfig`] value that cannot drive the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `total_drag_distance` is zero, negative, or NaN.
    NonPositiveDragDistance(f64),
    /// `spinner_final_offset` is zero, negative, or NaN.
    NonPositiveSpinnerOffset(f64),
    /// `drag_rate` is zero, negative, or NaN.
    NonPositiveDragRate(f64),
    /// `decelerate_factor` is zero, negative, or NaN.
    NonPositiveDecelerateFactor(f64),
    /// `touch_slop` is negative or NaN.
    NegativeTouchSlop(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDragDistance(v) => {
                write!(f, "total drag distance must be positive, got {v}")
            }
            Self::NonPositiveSpinnerOffset(v) => {
                write!(f, "spinner final offset must be positive, got {v}")
            }
            Self::NonPositiveDragRate(v) => write!(f, "drag rate must be positive, got {v}"),
            Self::NonPositiveDecelerateFactor(v) => {
                write!(f, "decelerate factor must be positive, got {v}")
            }
            Self::NegativeTouchSlop(v) => write!(f, "touch slop must not be negative, got {v}"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RefreshConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.total_drag_distance, config.spinner_final_offset);
    }

    #[test]
    fn density_scales_distances_only() {
        let config = RefreshConfig::for_density(3.0);
        assert_eq!(config.spinner_final_offset, 150.0);
        assert_eq!(config.total_drag_distance, 150.0);
        assert_eq!(config.touch_slop, 24.0);
        assert_eq!(config.drag_rate, 0.5);
        assert_eq!(config.complete_delay, Duration::from_millis(500));
    }

    #[test]
    fn rejects_degenerate_values() {
        let zero_distance = RefreshConfig {
            total_drag_distance: 0.0,
            ..RefreshConfig::default()
        };
        assert_eq!(
            zero_distance.validate(),
            Err(ConfigError::NonPositiveDragDistance(0.0))
        );

        let nan_rate = RefreshConfig {
            drag_rate: f64::NAN,
            ..RefreshConfig::default()
        };
        assert!(matches!(
            nan_rate.validate(),
            Err(ConfigError::NonPositiveDragRate(_))
        ));

        let negative_slop = RefreshConfig {
            touch_slop: -1.0,
            ..RefreshConfig::default()
        };
        assert_eq!(
            negative_slop.validate(),
            Err(ConfigError::NegativeTouchSlop(-1.0))
        );
    }

    #[test]
    fn zero_slop_is_allowed() {
        let config = RefreshConfig {
            touch_slop: 0.0,
            ..RefreshConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = ConfigError::NonPositiveSpinnerOffset(-2.0);
        assert_eq!(
            err.to_string(),
            "spinner final offset must be positive, got -2"
        );
    }
}
