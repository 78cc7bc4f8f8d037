/// Target value for a drill in a given training week.
///
/// Week 1 is the baseline; every later week adds one increment. The result
/// is returned unrounded, display formatting belongs to the caller.
pub fn compute_target(base: f64, weekly_increment: f64, week: u32) -> f64 {
    base + week.saturating_sub(1) as f64 * weekly_increment
}

/// Render a target for display: whole numbers without a decimal point,
/// fractional targets with one decimal place.
pub fn format_target(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_one_returns_base() {
        assert_eq!(compute_target(10.0, 2.0, 1), 10.0);
        assert_eq!(compute_target(30.0, 0.0, 1), 30.0);
        assert_eq!(compute_target(15.0, 2.5, 1), 15.0);
    }

    #[test]
    fn test_linear_progression() {
        assert_eq!(compute_target(10.0, 2.0, 3), 14.0);
        assert_eq!(compute_target(20.0, 4.0, 3), 28.0);
        assert_eq!(compute_target(4.0, 1.0, 10), 13.0);
    }

    #[test]
    fn test_fractional_increment_is_not_rounded() {
        assert_eq!(compute_target(15.0, 2.5, 2), 17.5);
        assert_eq!(compute_target(2.0, 0.5, 4), 3.5);
    }

    #[test]
    fn test_no_upper_bound_on_week() {
        assert_eq!(compute_target(10.0, 2.0, 1001), 2010.0);
    }

    #[test]
    fn test_week_zero_clamps_to_baseline() {
        // Input controls floor the week at 1; a zero that slips through
        // behaves like week 1 instead of underflowing.
        assert_eq!(compute_target(10.0, 2.0, 0), 10.0);
    }

    #[test]
    fn test_pure_and_repeatable() {
        let a = compute_target(7.0, 1.5, 6);
        let b = compute_target(7.0, 1.5, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_target() {
        assert_eq!(format_target(14.0), "14");
        assert_eq!(format_target(17.5), "17.5");
        assert_eq!(format_target(3.5), "3.5");
        assert_eq!(format_target(0.0), "0");
    }
}
