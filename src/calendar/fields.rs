use alloc::borrow::Cow;

use crate::{
    calendar::Calendar,
    error::{civil::Error as E, Error},
};

/// A record of calendar fields, any of which may be absent.
///
/// This is used to build values from their calendar meaning rather than
/// their ISO identity, and to partially replace the fields of an existing
/// value with [`YearMonth::with`](crate::civil::YearMonth::with).
///
/// The year, month and day here are *calendar* fields. They mean whatever
/// the calendar interpreting them says they mean. For example, the
/// Gregorian calendar reads the year relative to the era.
///
/// # Example
///
/// ```
/// use jiff_calendar::{
///     calendar::{Calendar, Disambiguation, Fields},
///     civil::YearMonth,
/// };
///
/// let fields = Fields::new()
///     .era("bce")
///     .year(44)
///     .month(3)
///     .calendar(Calendar::gregorian());
/// let ym = YearMonth::from_item(&fields, Disambiguation::Reject)?;
/// assert_eq!(ym.iso_fields().year(), -43);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Fields {
    era: Option<Cow<'static, str>>,
    year: Option<i32>,
    month: Option<i8>,
    day: Option<i8>,
    calendar: Option<Calendar>,
}

impl Fields {
    /// Creates a new record with every field absent.
    #[inline]
    pub fn new() -> Fields {
        Fields::default()
    }

    /// Sets the era.
    #[inline]
    pub fn era<S: Into<Cow<'static, str>>>(self, era: S) -> Fields {
        Fields { era: Some(era.into()), ..self }
    }

    /// Sets the calendar year.
    #[inline]
    pub fn year(self, year: i32) -> Fields {
        Fields { year: Some(year), ..self }
    }

    /// Sets the calendar month.
    #[inline]
    pub fn month(self, month: i8) -> Fields {
        Fields { month: Some(month), ..self }
    }

    /// Sets the calendar day of the month.
    #[inline]
    pub fn day(self, day: i8) -> Fields {
        Fields { day: Some(day), ..self }
    }

    /// Sets the calendar used to interpret the other fields.
    #[inline]
    pub fn calendar(self, calendar: Calendar) -> Fields {
        Fields { calendar: Some(calendar), ..self }
    }

    #[inline]
    pub fn get_era(&self) -> Option<&str> {
        self.era.as_deref()
    }

    #[inline]
    pub fn get_year(&self) -> Option<i32> {
        self.year
    }

    #[inline]
    pub fn get_month(&self) -> Option<i8> {
        self.month
    }

    #[inline]
    pub fn get_day(&self) -> Option<i8> {
        self.day
    }

    #[inline]
    pub fn get_calendar(&self) -> Option<&Calendar> {
        self.calendar.as_ref()
    }

    /// Returns the year, or an error if it is absent.
    ///
    /// This is meant for calendar implementations that require a year.
    pub fn require_year(&self) -> Result<i32, Error> {
        self.year.ok_or_else(|| Error::from(E::MissingField { field: "year" }))
    }

    /// Returns the month, or an error if it is absent.
    pub fn require_month(&self) -> Result<i8, Error> {
        self.month
            .ok_or_else(|| Error::from(E::MissingField { field: "month" }))
    }

    /// Returns the day, or an error if it is absent.
    pub fn require_day(&self) -> Result<i8, Error> {
        self.day.ok_or_else(|| Error::from(E::MissingField { field: "day" }))
    }

    /// Returns a new record where every field set in `overrides` replaces
    /// the corresponding field in `self`.
    pub(crate) fn merge(&self, overrides: &Fields) -> Fields {
        Fields {
            era: overrides.era.clone().or_else(|| self.era.clone()),
            year: overrides.year.or(self.year),
            month: overrides.month.or(self.month),
            day: overrides.day.or(self.day),
            calendar: overrides
                .calendar
                .clone()
                .or_else(|| self.calendar.clone()),
        }
    }

    /// Returns true when at least one of the era, year or month is set.
    pub(crate) fn has_year_month_field(&self) -> bool {
        self.era.is_some() || self.year.is_some() || self.month.is_some()
    }
}
