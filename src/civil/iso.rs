/*!
Core ISO 8601 (proleptic Gregorian) calendar algorithms.

Everything in this crate eventually bottoms out in an [`IsoDate`]. Calendars
interpret it however they like, but the ISO triple is what gets stored,
compared and printed.
*/

use crate::{calendar::Disambiguation, error::Error};

/// The smallest supported ISO year.
pub(crate) const MIN_YEAR: i32 = -271_821;
/// The biggest supported ISO year.
pub(crate) const MAX_YEAR: i32 = 275_760;
/// The first supported month of `MIN_YEAR`.
pub(crate) const MIN_YEAR_FIRST_MONTH: i8 = 4;
/// The last supported month of `MAX_YEAR`.
pub(crate) const MAX_YEAR_LAST_MONTH: i8 = 9;

/// A validated ISO 8601 calendar date.
///
/// This is the calendar independent identity of a date. A value of this type
/// always refers to a real day inside the supported range of
/// `-271821-04-01` through `275760-09-30`.
///
/// # Example
///
/// ```
/// use jiff_calendar::civil::IsoDate;
///
/// let iso = IsoDate::new(2024, 2, 29)?;
/// assert_eq!((iso.year(), iso.month(), iso.day()), (2024, 2, 29));
/// assert!(IsoDate::new(2023, 2, 29).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct IsoDate {
    year: i32,
    month: i8,
    day: i8,
}

impl IsoDate {
    /// Creates a new ISO date.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month isn't in `1..=12`, when the
    /// day isn't valid for the month, or when the date is outside the
    /// supported range.
    pub fn new(year: i32, month: i8, day: i8) -> Result<IsoDate, Error> {
        check_year_month(year, month)?;
        let max = days_in_month(year, month);
        if !(1..=max).contains(&day) {
            return Err(Error::range("day", day, 1, max));
        }
        Ok(IsoDate { year, month, day })
    }

    /// Returns the ISO year. Year `0` is 1 BCE.
    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the ISO month, in `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the ISO day of the month, in `1..=31`.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns true when this date falls in an ISO leap year.
    #[inline]
    pub fn in_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the number of days in this date's ISO month.
    #[inline]
    pub fn days_in_month(self) -> i8 {
        days_in_month(self.year, self.month)
    }

    /// Returns the number of days in this date's ISO year.
    #[inline]
    pub fn days_in_year(self) -> i16 {
        if self.in_leap_year() {
            366
        } else {
            365
        }
    }

    /// Converts this date to the number of days since `1970-01-01`.
    ///
    /// This is Howard Hinnant's `days_from_civil`, done in `i64` so that it
    /// works over the entire supported range without any overflow checks.
    ///
    /// Ref: <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>
    pub(crate) fn to_epoch_day(self) -> i64 {
        let month = i64::from(self.month);
        let day = i64::from(self.day);
        let year = i64::from(self.year) - i64::from(month <= 2);
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4
            - year_of_era / 100
            + day_of_year;
        era * 146_097 + day_of_era - 719_468
    }

    /// Converts a number of days since `1970-01-01` back to a date.
    ///
    /// This is Howard Hinnant's `civil_from_days`.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day is outside the supported
    /// range.
    ///
    /// Ref: <https://howardhinnant.github.io/date_algorithms.html#civil_from_days>
    pub(crate) fn from_epoch_day(epoch_day: i64) -> Result<IsoDate, Error> {
        let (min, max) = (MIN.to_epoch_day(), MAX.to_epoch_day());
        if !(min..=max).contains(&epoch_day) {
            return Err(Error::range("epoch day", epoch_day, min, max));
        }
        let z = epoch_day + 719_468;
        let era = z.div_euclid(146_097);
        let day_of_era = z - era * 146_097;
        let year_of_era = (day_of_era - day_of_era / 1460
            + day_of_era / 36_524
            - day_of_era / 146_096)
            / 365;
        let day_of_year =
            day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month =
            if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
        let year = year_of_era + era * 400 + i64::from(month <= 2);
        // OK because the range check above bounds every component.
        Ok(IsoDate { year: year as i32, month: month as i8, day: day as i8 })
    }
}

/// The first supported ISO date.
pub(crate) const MIN: IsoDate =
    IsoDate { year: MIN_YEAR, month: MIN_YEAR_FIRST_MONTH, day: 1 };
/// The last supported ISO date.
pub(crate) const MAX: IsoDate =
    IsoDate { year: MAX_YEAR, month: MAX_YEAR_LAST_MONTH, day: 30 };

/// Returns true if and only if the given year is a leap year.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Returns the number of days in the given month.
#[inline]
pub(crate) fn days_in_month(year: i32, month: i8) -> i8 {
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Checks that a year-month is inside `-271821-04..=275760-09`.
pub(crate) fn check_year_month(year: i32, month: i8) -> Result<(), Error> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::range("year", year, MIN_YEAR, MAX_YEAR));
    }
    let (first, last) = month_bounds(year);
    if !(first..=last).contains(&month) {
        return Err(Error::range("month", month, first, last));
    }
    Ok(())
}

/// Returns the smallest and biggest months supported in the given year.
fn month_bounds(year: i32) -> (i8, i8) {
    match year {
        MIN_YEAR => (MIN_YEAR_FIRST_MONTH, 12),
        MAX_YEAR => (1, MAX_YEAR_LAST_MONTH),
        _ => (1, 12),
    }
}

/// Regulates a month into `1..=12`.
///
/// With `Constrain`, an out of range month is clamped. With `Reject`, it
/// results in a range error.
pub(crate) fn regulate_month(
    month: i8,
    disambiguation: Disambiguation,
) -> Result<i8, Error> {
    match disambiguation {
        Disambiguation::Constrain => Ok(month.clamp(1, 12)),
        Disambiguation::Reject if (1..=12).contains(&month) => Ok(month),
        Disambiguation::Reject => Err(Error::range("month", month, 1, 12)),
    }
}

/// Regulates a year-month into the supported range.
///
/// This assumes the month has already been regulated into `1..=12`. With
/// `Constrain`, a year-month outside the supported range is clamped to the
/// nearest endpoint.
pub(crate) fn regulate_year_month_range(
    year: i32,
    month: i8,
    disambiguation: Disambiguation,
) -> Result<(i32, i8), Error> {
    match disambiguation {
        Disambiguation::Reject => {
            check_year_month(year, month)?;
            Ok((year, month))
        }
        Disambiguation::Constrain => {
            if (year, month) < (MIN_YEAR, MIN_YEAR_FIRST_MONTH) {
                Ok((MIN_YEAR, MIN_YEAR_FIRST_MONTH))
            } else if (year, month) > (MAX_YEAR, MAX_YEAR_LAST_MONTH) {
                Ok((MAX_YEAR, MAX_YEAR_LAST_MONTH))
            } else {
                Ok((year, month))
            }
        }
    }
}

/// Regulates a day of the month into `1..=days_in_month`.
pub(crate) fn regulate_day(
    year: i32,
    month: i8,
    day: i8,
    disambiguation: Disambiguation,
) -> Result<i8, Error> {
    let max = days_in_month(year, month);
    match disambiguation {
        Disambiguation::Constrain => Ok(day.clamp(1, max)),
        Disambiguation::Reject if (1..=max).contains(&day) => Ok(day),
        Disambiguation::Reject => Err(Error::range("day", day, 1, max)),
    }
}

/// Regulates a complete ISO date, in month, range and day order.
pub(crate) fn regulate_date(
    year: i32,
    month: i8,
    day: i8,
    disambiguation: Disambiguation,
) -> Result<IsoDate, Error> {
    let month = regulate_month(month, disambiguation)?;
    let (year, month) =
        regulate_year_month_range(year, month, disambiguation)?;
    let day = regulate_day(year, month, day, disambiguation)?;
    IsoDate::new(year, month, day)
}

/// Adds the given number of months to a year-month and returns the
/// balanced result.
///
/// This returns an error when the result falls outside the year range.
pub(crate) fn add_months(
    year: i32,
    month: i8,
    months: i64,
) -> Result<(i32, i8), Error> {
    let total = i64::from(year)
        .checked_mul(12)
        .and_then(|n| n.checked_add(i64::from(month) - 1))
        .and_then(|n| n.checked_add(months))
        .ok_or_else(|| Error::range("months", months, -i64::MAX, i64::MAX))?;
    let year = total.div_euclid(12);
    let month = (total.rem_euclid(12) + 1) as i8;
    let year = i32::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or_else(|| Error::range("year", year, MIN_YEAR, MAX_YEAR))?;
    Ok((year, month))
}

#[cfg(test)]
impl quickcheck::Arbitrary for IsoDate {
    fn arbitrary(g: &mut quickcheck::Gen) -> IsoDate {
        use quickcheck::Arbitrary;

        let (min, max) = (MIN.to_epoch_day(), MAX.to_epoch_day());
        let day = i64::arbitrary(g).rem_euclid(max - min + 1) + min;
        // OK because `day` is always in range.
        IsoDate::from_epoch_day(day).unwrap()
    }
}
