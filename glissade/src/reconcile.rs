//! Range reconciliation: which handle an input affects, and how the low/high
//! pair absorbs a new value without violating `low <= high`.

/// One of the two handles of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    /// The lower handle.
    Low,
    /// The upper handle.
    High,
}

/// Picks the handle a bare-track press should move: the numerically closer
/// one. Ties favor [`HandleSide::Low`].
pub fn choose_handle(low: f32, high: f32, candidate: f32) -> HandleSide {
    if (candidate - low).abs() <= (candidate - high).abs() {
        HandleSide::Low
    } else {
        HandleSide::High
    }
}

/// Applies a candidate value to one side of the pair.
///
/// The moving side is clamped against the stationary one, so the handles can
/// meet but never cross: `low <= high` holds after every call.
pub fn apply(low: f32, high: f32, side: HandleSide, candidate: f32) -> (f32, f32) {
    match side {
        HandleSide::Low => (candidate.min(high), high),
        HandleSide::High => (low, candidate.max(low)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closer_handle_wins() {
        // low=20, high=80: 30 is 10 away from low, 50 from high.
        assert_eq!(choose_handle(20.0, 80.0, 30.0), HandleSide::Low);
        // 60 is 40 away from low, 20 from high.
        assert_eq!(choose_handle(20.0, 80.0, 60.0), HandleSide::High);
    }

    #[test]
    fn equidistant_press_favors_low() {
        assert_eq!(choose_handle(20.0, 80.0, 50.0), HandleSide::Low);
    }

    #[test]
    fn low_cannot_cross_high() {
        assert_eq!(apply(0.2, 0.8, HandleSide::Low, 0.95), (0.8, 0.8));
    }

    #[test]
    fn high_cannot_cross_low() {
        assert_eq!(apply(0.2, 0.8, HandleSide::High, 0.1), (0.2, 0.2));
    }

    #[test]
    fn uncontested_moves_pass_through() {
        assert_eq!(apply(20.0, 80.0, HandleSide::Low, 35.0), (35.0, 80.0));
        assert_eq!(apply(20.0, 80.0, HandleSide::High, 60.0), (20.0, 60.0));
    }

    #[test]
    fn ordering_holds_for_arbitrary_sequences() {
        let mut low = 20.0;
        let mut high = 80.0;
        let moves = [
            (HandleSide::Low, 95.0),
            (HandleSide::High, 10.0),
            (HandleSide::Low, -5.0),
            (HandleSide::High, 120.0),
            (HandleSide::Low, 120.0),
        ];
        for (side, candidate) in moves {
            let (l, h) = apply(low, high, side, candidate);
            assert!(l <= h, "ordering violated: {l} > {h}");
            low = l;
            high = h;
        }
    }
}
