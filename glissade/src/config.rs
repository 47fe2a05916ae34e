//! Slider configuration: value domain, step increment and track axis.
//!
//! Configuration is immutable for the duration of an interaction session.
//! Two entry points are offered: [`SliderConfig::validated`] for callers that
//! want malformed input reported, and [`SliderConfig::sanitized`] which
//! silently corrects it so a widget degrades gracefully instead of taking
//! down its host.

use derive_builder::Builder;
use tracing::debug;

/// Axis along which the slider track is laid out.
///
/// For [`Orientation::Vertical`] the axis is inverted relative to screen
/// coordinates: the top of the track maps to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left-to-right track. The default.
    #[default]
    Horizontal,
    /// Bottom-to-top track.
    Vertical,
}

/// Errors reported by strict configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `min` must be strictly below `max`.
    #[error("slider bounds are degenerate: min {min} is not below max {max}")]
    DegenerateBounds {
        /// Configured lower bound.
        min: f32,
        /// Configured upper bound.
        max: f32,
    },
    /// The step increment must be finite and non-negative.
    #[error("slider step must be finite and non-negative, got {0}")]
    InvalidStep(f32),
}

/// Static configuration for a slider instance.
#[derive(Builder, Debug, Clone, Copy, PartialEq)]
#[builder(pattern = "owned")]
pub struct SliderConfig {
    /// Lower bound of the value domain.
    #[builder(default = "0.0")]
    pub min: f32,
    /// Upper bound of the value domain. Must be above `min`.
    #[builder(default = "100.0")]
    pub max: f32,
    /// Snap increment. `0.0` disables snapping (continuous values).
    #[builder(default = "0.0")]
    pub step: f32,
    /// Axis along which the track is laid out.
    #[builder(default)]
    pub orientation: Orientation,
    /// When true the slider carries a low/high pair instead of one value.
    #[builder(default = "false")]
    pub range: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 0.0,
            orientation: Orientation::Horizontal,
            range: false,
        }
    }
}

impl SliderConfig {
    /// Checks the configuration strictly, returning the first problem found.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(self.min < self.max) {
            return Err(ConfigError::DegenerateBounds {
                min: self.min,
                max: self.max,
            });
        }
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        Ok(self)
    }

    /// Corrects malformed fields instead of failing.
    ///
    /// Inverted bounds are swapped, equal bounds are widened by one unit, and
    /// a non-finite or negative step falls back to continuous values. Each
    /// correction is logged.
    pub fn sanitized(mut self) -> Self {
        if self.min > self.max {
            debug!(min = self.min, max = self.max, "swapping inverted slider bounds");
            std::mem::swap(&mut self.min, &mut self.max);
        }
        if self.min == self.max {
            debug!(min = self.min, "widening degenerate slider bounds");
            self.max = self.min + 1.0;
        }
        if !self.step.is_finite() || self.step < 0.0 {
            debug!(step = self.step, "treating invalid slider step as continuous");
            self.step = 0.0;
        }
        self
    }

    /// Width of the value domain, `max - min`.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether values snap to discrete step increments.
    pub fn is_stepped(&self) -> bool {
        self.step > 0.0
    }

    /// Clamps a raw value into the `[min, max]` domain.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn builder_defaults() {
        let config = SliderConfigBuilder::default().build().unwrap();
        assert_eq!(config.min, 0.0);
        assert_eq!(config.max, 100.0);
        assert_eq!(config.step, 0.0);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert!(!config.range);
    }

    #[test]
    fn validated_rejects_degenerate_bounds() {
        let config = SliderConfigBuilder::default()
            .min(10.0)
            .max(10.0)
            .build()
            .unwrap();
        assert!(matches!(
            config.validated(),
            Err(ConfigError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn validated_rejects_negative_step() {
        let config = SliderConfigBuilder::default().step(-1.0).build().unwrap();
        assert_eq!(config.validated(), Err(ConfigError::InvalidStep(-1.0)));
    }

    #[test]
    fn sanitized_swaps_inverted_bounds() {
        let config = SliderConfigBuilder::default()
            .min(100.0)
            .max(0.0)
            .build()
            .unwrap()
            .sanitized();
        assert_eq!(config.min, 0.0);
        assert_eq!(config.max, 100.0);
    }

    #[test]
    fn sanitized_widens_equal_bounds() {
        let config = SliderConfigBuilder::default()
            .min(5.0)
            .max(5.0)
            .build()
            .unwrap()
            .sanitized();
        assert!(config.min < config.max);
    }

    #[test]
    fn sanitized_disables_invalid_step() {
        let config = SliderConfigBuilder::default()
            .step(f32::NAN)
            .build()
            .unwrap()
            .sanitized();
        assert_eq!(config.step, 0.0);
        assert!(!config.is_stepped());
    }

    #[test]
    fn clamp_limits_to_domain() {
        let config = SliderConfigBuilder::default().build().unwrap();
        assert_eq!(config.clamp(-5.0), 0.0);
        assert_eq!(config.clamp(250.0), 100.0);
        assert_eq!(config.clamp(42.0), 42.0);
    }
}
