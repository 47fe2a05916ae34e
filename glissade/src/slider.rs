//! The slider interaction engine.
//!
//! [`SliderEngine`] owns the value store, the drag session and the change
//! emission for one slider instance. The rendering layer feeds it pointer
//! events together with freshly measured track geometry and renders from
//! [`SliderEngine::compute_layout`]; everything visual (track, thumbs,
//! tooltips, markers) stays outside.
//!
//! The engine is fully synchronous: all mutation happens inside the event
//! handler that delivered the pointer event, in delivery order. Callers that
//! need throttling add it outside.

use std::sync::Arc;

use parking_lot::Mutex;
use smallvec::SmallVec;

use crate::{
    config::SliderConfig,
    geometry::{self, TrackGeometry},
    px::PxPosition,
    reconcile::{self, HandleSide},
    session::{DragSession, PointerSurface},
    value::{SliderValue, ValueOwnership, ValueStore},
};

/// Fraction of the span a nudge moves when the slider is continuous.
const NUDGE_FRACTION: f32 = 0.05;

/// Callback invoked with every externally visible value transition.
pub type OnChange = Arc<dyn Fn(SliderValue) + Send + Sync>;

/// Interaction engine for a single- or dual-handle slider.
pub struct SliderEngine {
    config: SliderConfig,
    store: ValueStore,
    session: DragSession,
    on_change: OnChange,
    /// Last value passed to `on_change` in the current session, for dedup.
    last_emitted: Option<SliderValue>,
    disabled: bool,
    hovered: bool,
}

impl SliderEngine {
    /// Creates an uncontrolled engine that owns its value, seeded once from
    /// `initial`. The configuration is sanitized, and `initial` is clamped
    /// into its domain.
    pub fn new(config: SliderConfig, initial: SliderValue) -> Self {
        Self::with_ownership(config, initial, ValueOwnership::Uncontrolled)
    }

    /// Creates a controlled engine. The consumer supplies the authoritative
    /// value through [`SliderEngine::sync_value`] every render; pointer input
    /// only proposes candidates through the change callback.
    pub fn controlled(config: SliderConfig, value: SliderValue) -> Self {
        Self::with_ownership(config, value, ValueOwnership::Controlled)
    }

    fn with_ownership(
        config: SliderConfig,
        initial: SliderValue,
        ownership: ValueOwnership,
    ) -> Self {
        let config = config.sanitized();
        let initial = initial.constrained_to(&config);
        Self {
            config,
            store: ValueStore::new(ownership, initial),
            session: DragSession::new(),
            on_change: Arc::new(|_| {}),
            last_emitted: None,
            disabled: false,
            hovered: false,
        }
    }

    /// Sets the change callback.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(SliderValue) + Send + Sync + 'static,
    {
        self.on_change = Arc::new(on_change);
        self
    }

    /// Sets the change callback from a shared handle.
    pub fn on_change_shared(mut self, on_change: OnChange) -> Self {
        self.on_change = on_change;
        self
    }

    /// Attaches the global pointer surface; listener registration follows
    /// the drag session's state transitions.
    pub fn set_surface(&mut self, surface: Box<dyn PointerSurface>) {
        self.session.set_surface(surface);
    }

    /// Wraps the engine for shared ownership across the rendering layer and
    /// event handlers.
    pub fn into_shared(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    /// The active configuration (post-sanitization).
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The current value.
    pub fn value(&self) -> SliderValue {
        self.store.get()
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// The handle fixed at drag start, while a session is active.
    pub fn drag_target(&self) -> Option<HandleSide> {
        self.session.target()
    }

    /// Whether the pointer is over the slider. Observational only; the
    /// rendering layer uses it for thumb styling and transient tooltips.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Updates hover state. Ignored while disabled.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered && !self.disabled;
    }

    /// Whether interaction is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables interaction. Disabling mid-drag cancels the
    /// session without a further value emission.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.hovered = false;
            self.session.cancel();
            self.last_emitted = None;
        }
        self.disabled = disabled;
    }

    /// Replaces the configuration.
    ///
    /// Configuration is immutable per interaction session, so an active drag
    /// is cancelled first; the current value is re-constrained to the new
    /// domain without an emission.
    pub fn set_config(&mut self, config: SliderConfig) {
        self.session.cancel();
        self.last_emitted = None;
        self.config = config.sanitized();
        self.store.sync(self.store.get().constrained_to(&self.config));
    }

    /// Feeds the authoritative value back from the owner.
    ///
    /// For a controlled engine this is how proposals get accepted (or
    /// overridden); layout reflects whatever arrives here. Also usable as a
    /// programmatic set on an uncontrolled engine. Never emits.
    pub fn sync_value(&mut self, value: SliderValue) {
        self.store.sync(value.constrained_to(&self.config));
    }

    /// Handle positions along the track, as percentages in `[0, 100]`.
    ///
    /// One entry for a single-value slider, two (low then high) for a range
    /// slider; the active-track fill spans between them.
    pub fn compute_layout(&self) -> SmallVec<[f32; 2]> {
        let mut positions = SmallVec::new();
        let (low, high) = self.store.get().endpoints();
        positions.push(geometry::percentage_of(&self.config, low).clamp(0.0, 100.0));
        if self.config.range {
            positions.push(geometry::percentage_of(&self.config, high).clamp(0.0, 100.0));
        }
        positions
    }

    /// Starts a drag session from a pointer press.
    ///
    /// `hint` names the handle directly under the pointer, if any; it is
    /// ignored for single-value sliders. The value at the press position is
    /// computed and emitted immediately (click-to-set), not deferred to the
    /// first move. Returns whether a session started; a press on a disabled
    /// slider or during an active session starts none.
    ///
    /// A press on an unmeasured (zero-extent) track still starts the
    /// session, so a later move with valid geometry proceeds normally.
    pub fn pointer_down(
        &mut self,
        track: &TrackGeometry,
        position: PxPosition,
        hint: Option<HandleSide>,
    ) -> bool {
        if self.disabled {
            return false;
        }
        let target = if self.config.range { hint } else { None };
        if !self.session.begin(target) {
            return false;
        }
        self.last_emitted = None;
        if let Some(candidate) = geometry::value_at(&self.config, track, position) {
            self.apply_candidate(candidate);
        }
        true
    }

    /// Processes a globally observed pointer move.
    ///
    /// Out-of-session moves are ignored (global listeners are only attached
    /// while dragging, but a stale handler can race one through). Returns
    /// whether the move produced a new emission.
    pub fn pointer_move(&mut self, track: &TrackGeometry, position: PxPosition) -> bool {
        if self.disabled || !self.session.is_dragging() {
            return false;
        }
        match geometry::value_at(&self.config, track, position) {
            Some(candidate) => self.apply_candidate(candidate),
            None => false,
        }
    }

    /// Ends the drag session on a globally observed pointer release.
    /// Never emits a value change.
    pub fn pointer_up(&mut self) {
        self.session.finish();
        self.last_emitted = None;
    }

    /// Moves the value up by one step (5% of the span when continuous),
    /// outside any drag session. `side` picks the handle on a range slider
    /// and defaults to the low one.
    pub fn increment(&mut self, side: Option<HandleSide>) -> bool {
        self.nudge(side, 1.0)
    }

    /// Moves the value down by one step; see [`SliderEngine::increment`].
    pub fn decrement(&mut self, side: Option<HandleSide>) -> bool {
        self.nudge(side, -1.0)
    }

    fn nudge(&mut self, side: Option<HandleSide>, direction: f32) -> bool {
        if self.disabled || self.session.is_dragging() {
            return false;
        }
        let delta = if self.config.is_stepped() {
            self.config.step
        } else {
            self.config.span() * NUDGE_FRACTION
        };
        let current = self.store.get();
        let next = if self.config.range {
            let side = side.unwrap_or(HandleSide::Low);
            let (low, high) = current.endpoints();
            let anchor = match side {
                HandleSide::Low => low,
                HandleSide::High => high,
            };
            let candidate = geometry::snap_to_step(&self.config, anchor + direction * delta);
            let (low, high) = reconcile::apply(low, high, side, candidate);
            SliderValue::Pair { low, high }
        } else {
            let (value, _) = current.endpoints();
            SliderValue::Single(geometry::snap_to_step(
                &self.config,
                value + direction * delta,
            ))
        };
        if next.approx_eq(current) {
            return false;
        }
        self.store.commit(next);
        (self.on_change)(next);
        true
    }

    /// Runs one computed candidate through reconciliation and emission.
    fn apply_candidate(&mut self, candidate: f32) -> bool {
        let next = if self.config.range {
            let (low, high) = self.store.get().endpoints();
            let side = match self.session.target() {
                Some(side) => side,
                None => {
                    // Bare-track press: the nearer handle takes the session.
                    let side = reconcile::choose_handle(low, high, candidate);
                    self.session.designate(side);
                    side
                }
            };
            let (low, high) = reconcile::apply(low, high, side, candidate);
            SliderValue::Pair { low, high }
        } else {
            SliderValue::Single(candidate)
        };
        self.emit(next)
    }

    /// Emits `next` unless it matches the previous emission (or the current
    /// value when nothing has been emitted this session).
    fn emit(&mut self, next: SliderValue) -> bool {
        let baseline = self.last_emitted.unwrap_or_else(|| self.store.get());
        if next.approx_eq(baseline) {
            return false;
        }
        self.store.commit(next);
        (self.on_change)(next);
        self.last_emitted = Some(next);
        true
    }
}
