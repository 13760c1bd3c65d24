/// Linear divisor mapping pointer offset to rotation degrees; keeps tilts in
/// the small-angle range for any reasonable card size.
pub const TILT_DIVISOR: f64 = 20.0;
/// Transition used while the pointer is tracking over the card.
pub const TRACK_SECS: f64 = 0.1;
/// Transition used to settle back to rest after the pointer leaves.
pub const SETTLE_SECS: f64 = 0.5;

/// Rotation applied to a hovered card. Recomputed per pointer event; the
/// default value is the rest state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltState {
    /// Tilt for a pointer at (x, y) within a box of the given dimensions,
    /// measured from the box's top-left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / TILT_DIVISOR,
            rotate_y: -(x - center_x) / TILT_DIVISOR,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }

    /// Inline style applying the tilt over the given transition duration.
    pub fn style(&self, transition_secs: f64) -> String {
        format!(
            "transform: {}; transition: transform {}s ease-out;",
            self.transform(),
            transition_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_is_rest_state() {
        let tilt = TiltState::from_pointer(150.0, 100.0, 300.0, 200.0);
        assert_eq!(tilt, TiltState::default());
    }

    #[test]
    fn offsets_scale_by_the_divisor() {
        // pointer at the right edge, vertically centered
        let tilt = TiltState::from_pointer(300.0, 100.0, 300.0, 200.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, -150.0 / TILT_DIVISOR);

        // pointer at the top-left corner
        let tilt = TiltState::from_pointer(0.0, 0.0, 300.0, 200.0);
        assert_eq!(tilt.rotate_x, -100.0 / TILT_DIVISOR);
        assert_eq!(tilt.rotate_y, 150.0 / TILT_DIVISOR);
    }

    #[test]
    fn default_resets_both_axes() {
        let rest = TiltState::default();
        assert_eq!(rest.rotate_x, 0.0);
        assert_eq!(rest.rotate_y, 0.0);
        assert_eq!(
            rest.transform(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn style_carries_the_transition_duration() {
        let style = TiltState::default().style(SETTLE_SECS);
        assert!(style.contains("transition: transform 0.5s"));
        let style = TiltState::default().style(TRACK_SECS);
        assert!(style.contains("transition: transform 0.1s"));
    }
}
