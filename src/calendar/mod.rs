/*!
Pluggable calendar systems.

A calendar gives meaning to an ISO date: what its year, month and era are,
how long its months are and how durations are added to it. The year-month
engine in [`civil`](crate::civil) never hardcodes any of this. Instead, it
calls through the [`CalendarProtocol`] trait, which is the single seam where
calendar behavior plugs in.

Two calendars ship with this crate:

* [`IsoCalendar`], with identifier `iso8601`. This is the default.
* [`GregorianCalendar`], with identifier `gregory`. It shares arithmetic with
the ISO calendar, but counts years within the `ce` and `bce` eras.

Other calendars can be plugged in by implementing [`CalendarProtocol`] and
wrapping the implementation in a [`Calendar`] handle with [`Calendar::new`].

# Example

This shows how the same ISO year-month reads in two different calendars:

```
use jiff_calendar::{calendar::Calendar, civil::YearMonth};

let iso = YearMonth::new_with(-43, 3, Calendar::iso(), 1)?;
assert_eq!(iso.year(), -43);
assert_eq!(iso.era(), None);

let gregory = YearMonth::new_with(-43, 3, Calendar::gregorian(), 1)?;
assert_eq!(gregory.year(), 44);
assert_eq!(gregory.era().as_deref(), Some("bce"));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::{borrow::Cow, sync::Arc};

use crate::{
    civil::{Date, IsoDate, YearMonth},
    error::{calendar::Error as E, Error},
    unit::Unit,
    Duration,
};

pub use self::{
    database::CalendarDatabase, fields::Fields,
    gregorian::GregorianCalendar, iso::IsoCalendar,
};

mod database;
mod fields;
mod gregorian;
mod iso;

/// The behavior every calendar must provide.
///
/// Accessors receive the calendar independent [`IsoDate`] of the value being
/// inspected. Constructors receive a [`Construct`] target, which is the only
/// way a calendar can produce values attached to the calendar it is serving.
///
/// Implementations must be pure. The engine shares calendars across threads
/// and never synchronizes access to them.
///
/// # Example
///
/// This implements a calendar that is identical to the ISO calendar except
/// for its identifier, by delegating to [`IsoCalendar`]:
///
/// ```
/// use std::borrow::Cow;
///
/// use jiff_calendar::{
///     calendar::{
///         Calendar, CalendarProtocol, Construct, Disambiguation, Fields,
///         IsoCalendar,
///     },
///     civil::{Date, IsoDate, YearMonth},
///     Duration, Error, Unit,
/// };
///
/// #[derive(Debug)]
/// struct Proleptic;
///
/// impl CalendarProtocol for Proleptic {
///     fn id(&self) -> &str { "proleptic" }
///     fn year(&self, iso: IsoDate) -> i32 { IsoCalendar.year(iso) }
///     fn month(&self, iso: IsoDate) -> i8 { IsoCalendar.month(iso) }
///     fn era(&self, _: IsoDate) -> Option<Cow<'static, str>> { None }
///     fn days_in_month(&self, iso: IsoDate) -> i8 {
///         IsoCalendar.days_in_month(iso)
///     }
///     fn days_in_year(&self, iso: IsoDate) -> i16 {
///         IsoCalendar.days_in_year(iso)
///     }
///     fn is_leap_year(&self, iso: IsoDate) -> bool {
///         IsoCalendar.is_leap_year(iso)
///     }
///     fn date_from_fields(
///         &self,
///         fields: &Fields,
///         disambiguation: Disambiguation,
///         target: Construct<'_, Date>,
///     ) -> Result<Date, Error> {
///         IsoCalendar.date_from_fields(fields, disambiguation, target)
///     }
///     fn year_month_from_fields(
///         &self,
///         fields: &Fields,
///         disambiguation: Disambiguation,
///         target: Construct<'_, YearMonth>,
///     ) -> Result<YearMonth, Error> {
///         IsoCalendar.year_month_from_fields(fields, disambiguation, target)
///     }
///     fn add(
///         &self,
///         date: &Date,
///         duration: Duration,
///         disambiguation: Disambiguation,
///         target: Construct<'_, Date>,
///     ) -> Result<Date, Error> {
///         IsoCalendar.add(date, duration, disambiguation, target)
///     }
///     fn difference(
///         &self,
///         one: &Date,
///         two: &Date,
///         largest: Unit,
///     ) -> Result<Duration, Error> {
///         IsoCalendar.difference(one, two, largest)
///     }
/// }
///
/// let cal = Calendar::new(Proleptic)?;
/// let ym = YearMonth::new_with(2021, 7, cal, 1)?;
/// assert_eq!(ym.to_string(), "2021-07-01[u-ca=proleptic]");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CalendarProtocol: core::fmt::Debug + Send + Sync + 'static {
    /// Returns the identifier of this calendar.
    ///
    /// Two calendars with the same identifier are considered
    /// interchangeable. The identifier is used in the `[u-ca=...]`
    /// annotation of the textual format, so it must be one or more ASCII
    /// alphanumeric segments of 3 to 8 bytes separated by `-`.
    fn id(&self) -> &str;

    /// Returns the calendar year of the given date.
    fn year(&self, iso: IsoDate) -> i32;

    /// Returns the calendar month of the given date.
    fn month(&self, iso: IsoDate) -> i8;

    /// Returns the era of the given date, if this calendar has eras.
    fn era(&self, iso: IsoDate) -> Option<Cow<'static, str>>;

    /// Returns the calendar day of the month of the given date.
    fn day(&self, iso: IsoDate) -> i8 {
        iso.day()
    }

    /// Returns the number of days in the calendar month of the given date.
    fn days_in_month(&self, iso: IsoDate) -> i8;

    /// Returns the number of days in the calendar year of the given date.
    fn days_in_year(&self, iso: IsoDate) -> i16;

    /// Returns true when the given date falls in a leap year of this
    /// calendar.
    fn is_leap_year(&self, iso: IsoDate) -> bool;

    /// Builds a date from calendar fields.
    ///
    /// Out of range fields are clamped or rejected according to the given
    /// disambiguation strategy.
    fn date_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error>;

    /// Builds a year-month from calendar fields.
    ///
    /// Out of range fields are clamped or rejected according to the given
    /// disambiguation strategy. The calendar chooses the reference day.
    fn year_month_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, YearMonth>,
    ) -> Result<YearMonth, Error>;

    /// Adds a duration to a date.
    fn add(
        &self,
        date: &Date,
        duration: Duration,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error>;

    /// Subtracts a duration from a date.
    ///
    /// By default, this adds the negation of the duration.
    fn subtract(
        &self,
        date: &Date,
        duration: Duration,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        self.add(date, duration.checked_neg()?, disambiguation, target)
    }

    /// Returns the duration from `one` to `two`, using units no bigger
    /// than `largest`.
    fn difference(
        &self,
        one: &Date,
        two: &Date,
        largest: Unit,
    ) -> Result<Duration, Error>;
}

static ISO: IsoCalendar = IsoCalendar;
static GREGORIAN: GregorianCalendar = GregorianCalendar;

/// A cheaply cloneable handle to a calendar.
///
/// Every [`YearMonth`] and [`Date`] carries one of these. The built-in
/// calendars are stored inline while custom calendars are shared behind an
/// `Arc`, so cloning a handle never copies calendar state.
///
/// Handles compare equal when their identifiers are equal.
#[derive(Clone)]
pub struct Calendar {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Iso,
    Gregorian,
    Custom(Arc<dyn CalendarProtocol>),
}

impl Calendar {
    /// Returns a handle to the ISO 8601 calendar.
    #[inline]
    pub const fn iso() -> Calendar {
        Calendar { repr: Repr::Iso }
    }

    /// Returns a handle to the Gregorian calendar with eras.
    #[inline]
    pub const fn gregorian() -> Calendar {
        Calendar { repr: Repr::Gregorian }
    }

    /// Wraps a custom calendar implementation in a handle.
    ///
    /// # Errors
    ///
    /// This returns an error when the calendar's identifier is empty or
    /// isn't usable in a `[u-ca=...]` annotation.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::calendar::{Calendar, IsoCalendar};
    ///
    /// // The built-in calendar types can be wrapped too.
    /// let cal = Calendar::new(IsoCalendar)?;
    /// assert_eq!(cal, Calendar::iso());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new<C: CalendarProtocol>(calendar: C) -> Result<Calendar, Error> {
        validate_identifier(calendar.id())?;
        Ok(Calendar { repr: Repr::Custom(Arc::new(calendar)) })
    }

    /// Looks up one of the built-in calendars by its identifier.
    ///
    /// # Errors
    ///
    /// This returns an error when no built-in calendar has the given
    /// identifier. To resolve custom calendars, use a
    /// [`CalendarDatabase`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::calendar::Calendar;
    ///
    /// assert_eq!(Calendar::from_id("gregory")?, Calendar::gregorian());
    /// assert!(Calendar::from_id("hebrew").unwrap_err().is_invalid_calendar());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_id(id: &str) -> Result<Calendar, Error> {
        CalendarDatabase::builtin().get(id)
    }

    /// Returns this calendar's identifier.
    #[inline]
    pub fn id(&self) -> &str {
        self.protocol().id()
    }

    /// Returns true when this is the ISO 8601 calendar.
    ///
    /// Values attached to the ISO calendar print without a calendar
    /// annotation.
    #[inline]
    pub fn is_iso(&self) -> bool {
        self.id() == ISO.id()
    }

    /// Returns the implementation behind this handle.
    #[inline]
    pub fn protocol(&self) -> &dyn CalendarProtocol {
        match self.repr {
            Repr::Iso => &ISO,
            Repr::Gregorian => &GREGORIAN,
            Repr::Custom(ref protocol) => &**protocol,
        }
    }
}

impl Default for Calendar {
    fn default() -> Calendar {
        Calendar::iso()
    }
}

impl Eq for Calendar {}

impl PartialEq for Calendar {
    fn eq(&self, other: &Calendar) -> bool {
        self.id() == other.id()
    }
}

impl core::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("Calendar").field(&self.id()).finish()
    }
}

/// Checks that a calendar identifier can appear in an annotation.
///
/// This accepts one or more segments of 3 to 8 ASCII alphanumeric bytes,
/// separated by `-`.
pub(crate) fn validate_identifier(id: &str) -> Result<(), Error> {
    if id.is_empty() {
        return Err(Error::from(E::EmptyIdentifier));
    }
    let valid = id.split('-').all(|segment| {
        (3..=8).contains(&segment.len())
            && segment.bytes().all(|b| b.is_ascii_alphanumeric())
    });
    if !valid {
        return Err(Error::from(E::InvalidIdentifier { id: id.into() }));
    }
    Ok(())
}

/// How to handle fields that are out of range.
///
/// The default is `Constrain`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Disambiguation {
    /// Clamp out of range fields to the nearest valid value.
    ///
    /// For example, day `31` in a month with 30 days becomes day `30`.
    #[default]
    Constrain,
    /// Return a range error when any field is out of range.
    Reject,
}

/// A target for the values a calendar constructs.
///
/// Calendars never build [`Date`] or [`YearMonth`] values directly from a
/// calendar handle of their own. Instead, the engine hands them one of these,
/// which builds values attached to the calendar that is being served.
///
/// Building validates the ISO fields, so a calendar can't produce a value
/// outside of the supported range.
pub struct Construct<'a, T> {
    calendar: &'a Calendar,
    make: fn(IsoDate, &Calendar) -> Result<T, Error>,
}

impl<'a, T> Construct<'a, T> {
    pub(crate) fn new(
        calendar: &'a Calendar,
        make: fn(IsoDate, &Calendar) -> Result<T, Error>,
    ) -> Construct<'a, T> {
        Construct { calendar, make }
    }

    /// Returns the calendar that built values are attached to.
    #[inline]
    pub fn calendar(&self) -> &'a Calendar {
        self.calendar
    }

    /// Builds a new value from the given ISO fields.
    ///
    /// For a year-month, the day of `iso` becomes its reference day.
    #[inline]
    pub fn build(&self, iso: IsoDate) -> Result<T, Error> {
        (self.make)(iso, self.calendar)
    }
}

impl<'a, T> Clone for Construct<'a, T> {
    fn clone(&self) -> Construct<'a, T> {
        *self
    }
}

impl<'a, T> Copy for Construct<'a, T> {}

impl<'a, T> core::fmt::Debug for Construct<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Construct")
            .field("calendar", self.calendar)
            .field("target", &core::any::type_name::<T>())
            .finish()
    }
}
