use crate::domain::ports::Clock;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Dates render the way the mail templates expect them, e.g. `08/07/26`.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// The broadcast day for output generated "the morning after": before noon
/// local time the previous calendar day is still the episode's day.
pub fn broadcast_day(clock: &impl Clock) -> NaiveDate {
    let now = clock.now();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let day = now.date_naive();
    if now.time() < noon {
        day - Duration::days(1)
    } else {
        day
    }
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_morning_rolls_back_one_day() {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap());
        assert_eq!(
            broadcast_day(&clock),
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
        );
    }

    #[test]
    fn test_noon_keeps_same_day() {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap());
        assert_eq!(
            broadcast_day(&clock),
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
        );
    }

    #[test]
    fn test_afternoon_keeps_same_day() {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 8, 7, 18, 45, 0).unwrap());
        assert_eq!(
            broadcast_day(&clock),
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
        );
    }

    #[test]
    fn test_rollback_crosses_month_boundary() {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap());
        assert_eq!(
            broadcast_day(&clock),
            NaiveDate::from_ymd_opt(2026, 7, 31).unwrap()
        );
    }

    #[test]
    fn test_day_formatting() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_day(day), "08/06/26");
    }
}
