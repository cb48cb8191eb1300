use crate::animation::easing::Ease;

pub const COUNT_UP_DURATION_MS: f64 = 2000.0;

/// Value a count-up animation shows `elapsed_ms` after it started.
///
/// Follows `power2.out` and floors every frame, so the displayed number
/// only ever reaches `target` once the duration has fully elapsed.
pub fn value_at(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = Ease::Power2Out.apply(elapsed_ms / duration_ms);
    (target as f64 * progress).floor() as u32
}

/// Formats with comma thousands separators, e.g. `12500` -> `12,500`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(value_at(500, 0.0, COUNT_UP_DURATION_MS), 0);
        assert_eq!(value_at(500, COUNT_UP_DURATION_MS, COUNT_UP_DURATION_MS), 500);
        assert_eq!(value_at(500, 9999.0, COUNT_UP_DURATION_MS), 500);
    }

    #[test]
    fn never_decreases_and_never_overshoots() {
        let mut last = 0;
        for step in 0..=100 {
            let v = value_at(1200, step as f64 * 20.0, COUNT_UP_DURATION_MS);
            assert!(v >= last);
            assert!(v <= 1200);
            last = v;
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(value_at(42, 0.0, 0.0), 42);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12500), "12,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
