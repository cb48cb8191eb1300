/// Easing curves used across the page.
///
/// Each curve has a CSS `cubic-bezier` rendition for transitions driven by
/// the browser, and a numeric form for values we tween ourselves (counters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Power2Out,
    Power2InOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Ease::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }

    /// Progress along the curve for `t` in `[0, 1]`. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// CSS `transition` value for a transform over `duration_ms`.
    pub fn transition(self, duration_ms: u32) -> String {
        format!("transform {}ms {}", duration_ms, self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for ease in [Ease::Power2Out, Ease::Power2InOut] {
            assert!(ease.apply(0.0).abs() < 1e-9, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", ease);
        }
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
    }

    #[test]
    fn out_curve_front_loads_progress() {
        assert!(Ease::Power2Out.apply(0.25) > 0.5);
    }

    #[test]
    fn in_out_curve_is_symmetric_around_midpoint() {
        let a = Ease::Power2InOut.apply(0.25);
        let b = Ease::Power2InOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-9);
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn transition_renders_duration_and_curve() {
        assert_eq!(
            Ease::Power2Out.transition(300),
            "transform 300ms cubic-bezier(0.33, 1, 0.68, 1)"
        );
    }
}
