use alloc::borrow::Cow;

use crate::{
    calendar::{Calendar, Construct, Fields},
    civil::IsoDate,
    error::Error,
    fmt::temporal::DEFAULT_PRINTER,
};

/// A calendar date.
///
/// This is a minimal date type. It exists because calendars work in terms of
/// whole dates: year-month arithmetic is done by anchoring to a day in the
/// month, and [`YearMonth::with_day`](crate::civil::YearMonth::with_day)
/// returns one.
///
/// Like a year-month, a date is an ISO date attached to a calendar. Two
/// dates are equal when their ISO dates and calendar identifiers are equal.
///
/// # Example
///
/// ```
/// use jiff_calendar::{calendar::Calendar, civil::{Date, IsoDate}};
///
/// let date = Date::new(2024, 2, 29)?;
/// assert_eq!(date.to_string(), "2024-02-29");
///
/// let iso = IsoDate::new(-43, 3, 15)?;
/// let date = Date::from_iso(iso, Calendar::gregorian());
/// assert_eq!(date.year(), 44);
/// assert_eq!(date.to_string(), "-000043-03-15[u-ca=gregory]");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Date {
    iso: IsoDate,
    calendar: Calendar,
}

impl Date {
    /// Creates a new ISO 8601 date.
    ///
    /// # Errors
    ///
    /// This returns a range error when the given fields don't form a valid
    /// date inside the supported range.
    pub fn new(year: i32, month: i8, day: i8) -> Result<Date, Error> {
        let iso = IsoDate::new(year, month, day)?;
        Ok(Date::from_iso(iso, Calendar::iso()))
    }

    /// Attaches a calendar to an ISO date.
    #[inline]
    pub fn from_iso(iso: IsoDate, calendar: Calendar) -> Date {
        Date { iso, calendar }
    }

    /// Returns a target that builds dates attached to the given calendar.
    pub(crate) fn construct(calendar: &Calendar) -> Construct<'_, Date> {
        Construct::new(calendar, |iso, calendar| {
            Ok(Date::from_iso(iso, calendar.clone()))
        })
    }

    /// Returns the calendar year of this date.
    #[inline]
    pub fn year(&self) -> i32 {
        self.calendar.protocol().year(self.iso)
    }

    /// Returns the calendar month of this date.
    #[inline]
    pub fn month(&self) -> i8 {
        self.calendar.protocol().month(self.iso)
    }

    /// Returns the calendar day of the month of this date.
    #[inline]
    pub fn day(&self) -> i8 {
        self.calendar.protocol().day(self.iso)
    }

    /// Returns the calendar era of this date, if its calendar has eras.
    #[inline]
    pub fn era(&self) -> Option<Cow<'static, str>> {
        self.calendar.protocol().era(self.iso)
    }

    /// Returns the calendar attached to this date.
    #[inline]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the ISO date underlying this date.
    #[inline]
    pub fn iso_fields(&self) -> IsoDate {
        self.iso
    }

    /// Returns the calendar fields of this date, including its calendar.
    pub fn fields(&self) -> Fields {
        let fields = Fields::new()
            .year(self.year())
            .month(self.month())
            .day(self.day())
            .calendar(self.calendar.clone());
        match self.era() {
            None => fields,
            Some(era) => fields.era(era),
        }
    }
}

impl core::fmt::Debug for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_PRINTER.fmt_date(self, f)
    }
}
