//! Drag session lifecycle.
//!
//! A session exists only between pointer-down and pointer-up. Its target
//! handle is fixed for the whole session: dragging the low handle past the
//! high one keeps moving the low handle (clamped by reconciliation) instead
//! of silently switching to the other thumb.
//!
//! Global move/up listener registration is tied to the state transitions,
//! not to the widget's lifetime: [`PointerSurface::subscribe`] fires exactly
//! when `Idle -> Dragging` is taken and [`PointerSurface::unsubscribe`] on
//! every way back to `Idle`, including forced cancellation and drop.

use tracing::trace;

use crate::reconcile::HandleSide;

/// Hook into the platform's global pointer event source.
///
/// While no session is active the widget only sees events inside its own
/// bounds; during a drag it must observe moves and releases anywhere on the
/// input surface. Implementations register and deregister those global
/// listeners here.
pub trait PointerSurface: Send {
    /// Called when a drag session begins.
    fn subscribe(&mut self);
    /// Called when a drag session ends, normally or by cancellation.
    fn unsubscribe(&mut self);
}

/// Interaction state of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No pointer is held down. Initial state, re-entered between sessions.
    Idle,
    /// A pointer is held down and moves are being tracked globally.
    Dragging {
        /// The handle fixed at session start. `None` for a bare-track press
        /// whose handle has not been resolved yet (zero-extent track at
        /// press time).
        target: Option<HandleSide>,
    },
}

/// Owns the `Idle`/`Dragging` state machine and the surface subscription.
pub struct DragSession {
    phase: DragPhase,
    surface: Option<Box<dyn PointerSurface>>,
}

impl DragSession {
    /// Creates an idle session with no surface attached.
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            surface: None,
        }
    }

    /// Attaches the global pointer surface used for listener registration.
    ///
    /// Attaching while a drag is active is not supported; the new surface
    /// takes effect from the next session.
    pub fn set_surface(&mut self, surface: Box<dyn PointerSurface>) {
        self.surface = Some(surface);
    }

    /// Current phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a session is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// The handle fixed at session start, if a session is active.
    pub fn target(&self) -> Option<HandleSide> {
        match self.phase {
            DragPhase::Dragging { target } => target,
            DragPhase::Idle => None,
        }
    }

    /// Starts a session. Returns false if one is already active; sessions
    /// are mutually exclusive per instance.
    pub fn begin(&mut self, target: Option<HandleSide>) -> bool {
        if self.is_dragging() {
            return false;
        }
        trace!(?target, "drag session started");
        self.phase = DragPhase::Dragging { target };
        if let Some(surface) = self.surface.as_mut() {
            surface.subscribe();
        }
        true
    }

    /// Fixes the target of the active session once it is known.
    ///
    /// Used when a bare-track press could not be resolved immediately; a
    /// target that is already set is never replaced mid-session.
    pub fn designate(&mut self, side: HandleSide) {
        if let DragPhase::Dragging { target } = &mut self.phase
            && target.is_none()
        {
            trace!(?side, "drag target designated");
            *target = Some(side);
        }
    }

    /// Ends the session on pointer-up. Out-of-session calls are ignored;
    /// stale global listeners may still race one release through.
    pub fn finish(&mut self) {
        if self.is_dragging() {
            trace!("drag session finished");
            self.teardown();
        }
    }

    /// Forcibly ends the session without a pointer-up, e.g. when the widget
    /// is disabled mid-drag or reconfigured.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            trace!("drag session cancelled");
            self.teardown();
        }
    }

    fn teardown(&mut self) {
        self.phase = DragPhase::Idle;
        if let Some(surface) = self.surface.as_mut() {
            surface.unsubscribe();
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        // A destroyed instance must not leave global listeners behind.
        if self.is_dragging() {
            self.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    struct RecordingSurface {
        events: Arc<Mutex<Vec<&'static str>>>,
    }

    impl PointerSurface for RecordingSurface {
        fn subscribe(&mut self) {
            self.events.lock().push("subscribe");
        }

        fn unsubscribe(&mut self) {
            self.events.lock().push("unsubscribe");
        }
    }

    fn session_with_recorder() -> (DragSession, Arc<Mutex<Vec<&'static str>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut session = DragSession::new();
        session.set_surface(Box::new(RecordingSurface {
            events: events.clone(),
        }));
        (session, events)
    }

    #[test]
    fn begin_subscribes_and_finish_unsubscribes() {
        let (mut session, events) = session_with_recorder();
        assert!(session.begin(Some(HandleSide::Low)));
        assert!(session.is_dragging());
        session.finish();
        assert!(!session.is_dragging());
        assert_eq!(*events.lock(), vec!["subscribe", "unsubscribe"]);
    }

    #[test]
    fn sessions_are_mutually_exclusive() {
        let (mut session, events) = session_with_recorder();
        assert!(session.begin(None));
        assert!(!session.begin(Some(HandleSide::High)));
        assert_eq!(events.lock().len(), 1);
    }

    #[test]
    fn out_of_session_finish_is_ignored() {
        let (mut session, events) = session_with_recorder();
        session.finish();
        session.cancel();
        assert!(events.lock().is_empty());
    }

    #[test]
    fn target_is_fixed_for_the_session() {
        let mut session = DragSession::new();
        session.begin(Some(HandleSide::Low));
        session.designate(HandleSide::High);
        assert_eq!(session.target(), Some(HandleSide::Low));
    }

    #[test]
    fn unresolved_target_can_be_designated_once() {
        let mut session = DragSession::new();
        session.begin(None);
        assert_eq!(session.target(), None);
        session.designate(HandleSide::High);
        assert_eq!(session.target(), Some(HandleSide::High));
        session.designate(HandleSide::Low);
        assert_eq!(session.target(), Some(HandleSide::High));
    }

    #[test]
    fn drop_releases_an_active_subscription() {
        let (mut session, events) = session_with_recorder();
        session.begin(None);
        drop(session);
        assert_eq!(*events.lock(), vec!["subscribe", "unsubscribe"]);
    }

    #[test]
    fn cancel_tears_down_mid_drag() {
        let (mut session, events) = session_with_recorder();
        session.begin(Some(HandleSide::High));
        session.cancel();
        assert_eq!(*events.lock(), vec!["subscribe", "unsubscribe"]);
        assert_eq!(session.phase(), DragPhase::Idle);
    }
}
