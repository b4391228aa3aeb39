//! Day-of-week helpers.
//!
//! Days are absolute indices counted from the start of the scenario, and
//! day 0 is always a Monday.

/// Number of days in a week.
pub const DAYS_PER_WEEK: usize = 7;

const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Returns the weekday name of an absolute day index.
///
/// ```
/// use rosterforge_core::calendar::day_name;
///
/// assert_eq!(day_name(0), "Monday");
/// assert_eq!(day_name(13), "Sunday");
/// ```
pub fn day_name(day: usize) -> &'static str {
    DAY_NAMES[day % DAYS_PER_WEEK]
}

#[inline]
pub fn is_sunday(day: usize) -> bool {
    day % DAYS_PER_WEEK == 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sundays() {
        assert!(is_sunday(6));
        assert!(is_sunday(13));
        assert!(!is_sunday(5));
        assert!(!is_sunday(7));
    }

    #[test]
    fn test_day_names_wrap_weekly() {
        assert_eq!(day_name(5), "Saturday");
        assert_eq!(day_name(7), "Monday");
        assert_eq!(day_name(20), "Sunday");
    }
}
