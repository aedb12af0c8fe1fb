use alloc::borrow::Cow;

use crate::{
    calendar::{CalendarProtocol, Construct, Disambiguation, Fields},
    civil::{
        iso::{self, add_months, regulate_date, regulate_day},
        Date, IsoDate, YearMonth,
    },
    error::{duration::Error as DE, Error},
    unit::Unit,
    Duration,
};

/// The ISO 8601 calendar.
///
/// This is the proleptic Gregorian calendar with astronomical year
/// numbering (year `0` is 1 BCE) and no eras. Its identifier is `iso8601`.
///
/// The year-months it builds from fields and arithmetic always use a
/// reference day of `1`. A year-month created directly with another
/// reference day keeps it.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsoCalendar;

impl CalendarProtocol for IsoCalendar {
    fn id(&self) -> &str {
        "iso8601"
    }

    fn year(&self, iso: IsoDate) -> i32 {
        iso.year()
    }

    fn month(&self, iso: IsoDate) -> i8 {
        iso.month()
    }

    fn era(&self, _: IsoDate) -> Option<Cow<'static, str>> {
        None
    }

    fn days_in_month(&self, iso: IsoDate) -> i8 {
        iso.days_in_month()
    }

    fn days_in_year(&self, iso: IsoDate) -> i16 {
        iso.days_in_year()
    }

    fn is_leap_year(&self, iso: IsoDate) -> bool {
        iso.in_leap_year()
    }

    fn date_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        let year = fields.require_year()?;
        date_from_parts(year, fields, disambiguation, target)
    }

    fn year_month_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, YearMonth>,
    ) -> Result<YearMonth, Error> {
        let year = fields.require_year()?;
        year_month_from_parts(year, fields, disambiguation, target)
    }

    fn add(
        &self,
        date: &Date,
        duration: Duration,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        let sum = add(date.iso_fields(), duration, disambiguation)?;
        target.build(sum)
    }

    fn difference(
        &self,
        one: &Date,
        two: &Date,
        largest: Unit,
    ) -> Result<Duration, Error> {
        difference(one.iso_fields(), two.iso_fields(), largest)
    }
}

/// Builds a date from an ISO year and the month and day of `fields`.
pub(crate) fn date_from_parts(
    year: i32,
    fields: &Fields,
    disambiguation: Disambiguation,
    target: Construct<'_, Date>,
) -> Result<Date, Error> {
    let month = fields.require_month()?;
    let day = fields.require_day()?;
    let iso = regulate_date(year, month, day, disambiguation)?;
    target.build(iso)
}

/// Builds a year-month from an ISO year and the month of `fields`.
///
/// The reference day is always `1`.
pub(crate) fn year_month_from_parts(
    year: i32,
    fields: &Fields,
    disambiguation: Disambiguation,
    target: Construct<'_, YearMonth>,
) -> Result<YearMonth, Error> {
    let month = fields.require_month()?;
    let iso = regulate_date(year, month, 1, disambiguation)?;
    target.build(iso)
}

/// Adds a duration to an ISO date.
///
/// Years and months are added first, and the day is then regulated into the
/// resulting month. Weeks and days are added last. Units smaller than a day
/// are balanced into days and any remainder is dropped.
pub(crate) fn add(
    date: IsoDate,
    duration: Duration,
    disambiguation: Disambiguation,
) -> Result<IsoDate, Error> {
    let duration = duration.balance(Unit::Day)?;
    let months = duration
        .get_years()
        .checked_mul(12)
        .and_then(|n| n.checked_add(duration.get_months()))
        .ok_or(DE::OverflowCalendarUnits)?;
    let (year, month) = add_months(date.year(), date.month(), months)?;
    let day = regulate_day(year, month, date.day(), disambiguation)?;
    let intermediate = IsoDate::new(year, month, day)?;

    let days = duration
        .get_weeks()
        .checked_mul(7)
        .and_then(|n| n.checked_add(duration.get_days()))
        .ok_or(DE::OverflowCalendarUnits)?;
    let epoch_day = intermediate
        .to_epoch_day()
        .checked_add(days)
        .ok_or(DE::OverflowCalendarUnits)?;
    IsoDate::from_epoch_day(epoch_day)
}

/// Returns the duration between two ISO dates.
///
/// For years and months, the result is the biggest number of whole months
/// that can be added to `one` without passing `two`, followed by the
/// remaining days. Every non-zero unit has the same sign.
pub(crate) fn difference(
    one: IsoDate,
    two: IsoDate,
    largest: Unit,
) -> Result<Duration, Error> {
    let days = two.to_epoch_day() - one.to_epoch_day();
    match largest {
        Unit::Year | Unit::Month => {
            let sign: i64 = match two.cmp(&one) {
                core::cmp::Ordering::Greater => 1,
                core::cmp::Ordering::Less => -1,
                core::cmp::Ordering::Equal => return Ok(Duration::new()),
            };
            let mut months = (i64::from(two.year()) - i64::from(one.year()))
                * 12
                + i64::from(two.month())
                - i64::from(one.month());
            let mut mid = shift_months(one, months)?;
            if (sign > 0 && mid > two) || (sign < 0 && mid < two) {
                months -= sign;
                mid = shift_months(one, months)?;
            }
            let days = two.to_epoch_day() - mid.to_epoch_day();
            let (years, months) = if largest == Unit::Year {
                (months / 12, months % 12)
            } else {
                (0, months)
            };
            Ok(Duration::new().years(years).months(months).days(days))
        }
        Unit::Week => Ok(Duration::new().weeks(days / 7).days(days % 7)),
        _ => Duration::new().days(days).balance(largest),
    }
}

/// Moves a date by whole months, clamping the day to the target month.
fn shift_months(date: IsoDate, months: i64) -> Result<IsoDate, Error> {
    let (year, month) = add_months(date.year(), date.month(), months)?;
    let day = date.day().min(iso::days_in_month(year, month));
    IsoDate::new(year, month, day)
}
