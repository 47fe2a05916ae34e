//! Bidirectional mapping between track positions and domain values.
//!
//! Pointer positions arrive in the same coordinate space as the track's
//! bounding geometry, which the rendering layer measures fresh for every
//! pointer event. An unmeasured track (zero extent) yields no value rather
//! than a division by zero; the event is simply skipped.

use tracing::trace;

use crate::{
    config::{Orientation, SliderConfig},
    px::{PxPosition, PxSize},
};

/// Bounding geometry of the slider track at the moment of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackGeometry {
    /// Top-left corner of the track in pointer coordinates.
    pub origin: PxPosition,
    /// Width and height of the track.
    pub extent: PxSize,
}

impl TrackGeometry {
    /// Creates track geometry from its top-left corner and extent.
    pub const fn new(origin: PxPosition, extent: PxSize) -> Self {
        Self { origin, extent }
    }
}

/// Maps a domain value to its position along the track as a percentage.
///
/// Defined for values inside `[min, max]`; out-of-domain input produces an
/// out-of-range percentage the caller must re-clamp before rendering.
pub fn percentage_of(config: &SliderConfig, value: f32) -> f32 {
    let span = config.span();
    if span <= 0.0 {
        return 0.0;
    }
    (value - config.min) / span * 100.0
}

/// Maps a pointer position to a domain value.
///
/// The fraction along the configured axis is clamped to `[0, 1]` (pointer
/// positions far outside the track saturate at the ends), mapped into the
/// domain, snapped when stepping is enabled and re-clamped, so the result is
/// always inside `[min, max]`. For a vertical track the axis is inverted:
/// the visual top maps to `max`.
///
/// Returns `None` when the track has no extent along the relevant axis.
pub fn value_at(
    config: &SliderConfig,
    track: &TrackGeometry,
    pointer: PxPosition,
) -> Option<f32> {
    let fraction = match config.orientation {
        Orientation::Horizontal => {
            let width = track.extent.width.to_f32();
            if width <= 0.0 {
                trace!("skipping pointer event on zero-width track");
                return None;
            }
            (pointer.x.to_f32() - track.origin.x.to_f32()) / width
        }
        Orientation::Vertical => {
            let height = track.extent.height.to_f32();
            if height <= 0.0 {
                trace!("skipping pointer event on zero-height track");
                return None;
            }
            let bottom = track.origin.y.to_f32() + height;
            (bottom - pointer.y.to_f32()) / height
        }
    };
    let fraction = fraction.clamp(0.0, 1.0);
    let raw = config.min + fraction * config.span();
    Some(snap_to_step(config, raw))
}

/// Snaps a raw domain value to the nearest step increment anchored at `min`.
///
/// Rounding can overshoot at the upper boundary, so the result is re-clamped
/// into the domain. Without stepping this is just the clamp.
pub fn snap_to_step(config: &SliderConfig, raw: f32) -> f32 {
    if !config.is_stepped() {
        return config.clamp(raw);
    }
    let steps = ((raw - config.min) / config.step).round();
    config.clamp(config.min + steps * config.step)
}
