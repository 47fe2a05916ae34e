//! Interaction engine for slider widgets.
//!
//! This crate implements the non-visual half of a slider: the value model,
//! pointer-to-value mapping, drag-session lifecycle and low/high range
//! reconciliation. A rendering layer feeds it pointer events plus freshly
//! measured track geometry and draws from the computed handle positions;
//! colors, thumbs, tooltips and markers live entirely outside.
//!
//! # Example
//!
//! ```
//! use glissade::{
//!     Px, PxPosition, PxSize, SliderConfigBuilder, SliderEngine, SliderValue, TrackGeometry,
//! };
//!
//! let config = SliderConfigBuilder::default()
//!     .min(0.0)
//!     .max(100.0)
//!     .step(10.0)
//!     .build()
//!     .unwrap();
//!
//! let mut engine = SliderEngine::new(config, SliderValue::Single(50.0))
//!     .on_change(|value| println!("slider moved to {value:?}"));
//!
//! // The rendering layer measures the track for every pointer event.
//! let track = TrackGeometry::new(PxPosition::ZERO, PxSize::new(Px(200), Px(20)));
//!
//! engine.pointer_down(&track, PxPosition::new(Px(120), Px(10)), None);
//! assert_eq!(engine.value(), SliderValue::Single(60.0));
//! engine.pointer_up();
//!
//! // One or two percentages for the handles / active-track fill.
//! let positions = engine.compute_layout();
//! assert!((positions[0] - 60.0).abs() < 1e-4);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod config;
pub mod geometry;
pub mod px;
pub mod reconcile;
pub mod session;
pub mod slider;
pub mod value;

pub use config::{ConfigError, Orientation, SliderConfig, SliderConfigBuilder};
pub use geometry::{TrackGeometry, percentage_of, snap_to_step, value_at};
pub use px::{Px, PxPosition, PxSize};
pub use reconcile::HandleSide;
pub use session::{DragPhase, DragSession, PointerSurface};
pub use slider::{OnChange, SliderEngine};
pub use value::{SliderValue, ValueOwnership};
