//! Calendar-age computation
//!
//! Age is always computed against an explicit reference date. Callers that
//! want "age today" pass today; tests pass a fixed date so results stay
//! deterministic.

use chrono::{Datelike, NaiveDate};

/// Age in whole years on `reference`.
///
/// The year difference is reduced by one when the birthday has not yet
/// occurred in the reference year. Someone born on the reference day-of-year
/// has just completed the year.
pub fn age_in_years(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth.year();
    if (birth.month(), birth.day()) > (reference.month(), reference.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_birthday_counts_the_full_year() {
        assert_eq!(age_in_years(date(2006, 6, 1), date(2024, 6, 1)), 18);
    }

    #[test]
    fn day_before_birthday_is_one_less() {
        assert_eq!(age_in_years(date(2006, 6, 2), date(2024, 6, 1)), 17);
    }

    #[test]
    fn mid_year_birth_earlier_in_year() {
        assert_eq!(age_in_years(date(1990, 5, 10), date(2024, 6, 1)), 34);
    }

    #[test]
    fn leap_day_birthday_waits_for_march_in_common_years() {
        assert_eq!(age_in_years(date(2004, 2, 29), date(2022, 2, 28)), 17);
        assert_eq!(age_in_years(date(2004, 2, 29), date(2022, 3, 1)), 18);
    }
}
