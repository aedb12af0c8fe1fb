use alloc::borrow::Cow;

use crate::{
    calendar::{iso, CalendarProtocol, Construct, Disambiguation, Fields},
    civil::{Date, IsoDate, YearMonth},
    error::{civil::Error as E, Error},
    unit::Unit,
    Duration,
};

/// The Gregorian calendar with eras.
///
/// Months, days and arithmetic are identical to the ISO calendar. Years are
/// counted within an era instead: ISO year `1` and later are in the `ce`
/// era, while ISO year `0` is `1 bce`, ISO year `-1` is `2 bce` and so on.
/// Its identifier is `gregory`.
///
/// When building values from fields, the eras `ce` and `ad` are accepted for
/// the common era, and `bce` and `bc` for the era before it. A year without
/// an era is an ISO year.
///
/// # Example
///
/// ```
/// use jiff_calendar::{calendar::Calendar, civil::YearMonth};
///
/// let ym = YearMonth::new_with(0, 12, Calendar::gregorian(), 1)?;
/// assert_eq!(ym.year(), 1);
/// assert_eq!(ym.era().as_deref(), Some("bce"));
/// assert_eq!(ym.to_string(), "0000-12-01[u-ca=gregory]");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GregorianCalendar;

impl GregorianCalendar {
    /// Returns the ISO year for the year and era in `fields`.
    fn iso_year(&self, fields: &Fields) -> Result<i32, Error> {
        let year = fields.require_year()?;
        match fields.get_era() {
            None | Some("ce" | "ad") => Ok(year),
            Some("bce" | "bc") => 1i32
                .checked_sub(year)
                .ok_or_else(|| Error::range("year", year, i32::MIN + 1, i32::MAX)),
            Some(era) => Err(Error::from(E::UnknownEra { era: era.into() })),
        }
    }
}

impl CalendarProtocol for GregorianCalendar {
    fn id(&self) -> &str {
        "gregory"
    }

    fn year(&self, iso: IsoDate) -> i32 {
        if iso.year() > 0 {
            iso.year()
        } else {
            1 - iso.year()
        }
    }

    fn month(&self, iso: IsoDate) -> i8 {
        iso.month()
    }

    fn era(&self, iso: IsoDate) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(if iso.year() > 0 { "ce" } else { "bce" }))
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
        let year = self.iso_year(fields)?;
        iso::date_from_parts(year, fields, disambiguation, target)
    }

    fn year_month_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, YearMonth>,
    ) -> Result<YearMonth, Error> {
        let year = self.iso_year(fields)?;
        iso::year_month_from_parts(year, fields, disambiguation, target)
    }

    fn add(
        &self,
        date: &Date,
        duration: Duration,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        let sum = iso::add(date.iso_fields(), duration, disambiguation)?;
        target.build(sum)
    }

    fn difference(
        &self,
        one: &Date,
        two: &Date,
        largest: Unit,
    ) -> Result<Duration, Error> {
        iso::difference(one.iso_fields(), two.iso_fields(), largest)
    }
}
