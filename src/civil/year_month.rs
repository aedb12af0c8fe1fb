use core::cmp::Ordering;

use alloc::{borrow::Cow, string::String};

use crate::{
    calendar::{
        Calendar, CalendarProtocol, Construct, Disambiguation, Fields,
    },
    civil::{
        slots::{Slot, Slots, SlotsBuilder},
        Date, IsoDate,
    },
    error::{
        calendar::Error as CE, civil::Error as E, Error, ErrorContext,
    },
    fmt::temporal::{DEFAULT_PARSER, DEFAULT_PRINTER},
    locale::LocaleFormatter,
    unit::Unit,
    Duration,
};

/// A calendar year and month, without a day.
///
/// A `YearMonth` is an ISO year and month attached to a [`Calendar`]. The
/// calendar gives the value its meaning: its [`year`](YearMonth::year),
/// [`month`](YearMonth::month) and [`era`](YearMonth::era) all come from the
/// calendar. Arithmetic is delegated to the calendar too, so adding a month
/// does whatever "a month" means in that calendar.
///
/// Besides the ISO year and month, every value stores a *reference day*.
/// It isn't a day of the month in any user facing sense. It exists so that
/// calendars whose months don't line up with ISO months can identify
/// exactly which of their months a value refers to. The ISO calendar uses a
/// reference day of `1` for everything it creates, but a value built with
/// [`YearMonth::new_with`] keeps whatever valid day it was given.
///
/// # Values are immutable
///
/// Nothing ever changes a `YearMonth` after it has been created. Every
/// operation that "changes" a value, like [`with`](YearMonth::with) or
/// [`plus`](YearMonth::plus), returns a new one.
///
/// # Comparisons
///
/// This type deliberately implements neither `PartialEq` nor `PartialOrd`.
/// Whether two year-months are "the same" depends on whether their
/// calendars are considered, so the two ways to compare values are spelled
/// out as methods instead:
///
/// * [`YearMonth::equals`] is true when the ISO fields *and* the calendar
/// identifiers are equal.
/// * [`YearMonth::compare`] is a total order over the ISO fields, with the
/// calendar identifier as a final tie breaker. It's suitable for sorting.
///
/// # Parsing and printing
///
/// The `Display` and `FromStr` implementations use the ISO 8601 year-month
/// format, with a reference day and calendar annotation appended for
/// non-ISO calendars. An ISO value whose reference day isn't `1` is printed
/// with its day, so that parsing gives back an equal value:
///
/// ```
/// use jiff_calendar::{calendar::Calendar, civil::YearMonth};
///
/// let ym: YearMonth = "2021-07".parse()?;
/// assert_eq!((ym.year(), ym.month()), (2021, 7));
/// assert_eq!(ym.to_string(), "2021-07");
///
/// let ym: YearMonth = "2021-07-01[u-ca=gregory]".parse()?;
/// assert_eq!(ym.calendar(), &Calendar::gregorian());
/// assert_eq!(ym.to_string(), "2021-07-01[u-ca=gregory]");
///
/// let ym = YearMonth::new_with(2021, 7, Calendar::iso(), 15)?;
/// assert_eq!(ym.to_string(), "2021-07-15");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Example: arithmetic
///
/// ```
/// use jiff_calendar::{civil::YearMonth, ToDuration, Unit};
///
/// let ym = YearMonth::new(2024, 1)?;
/// assert_eq!(ym.plus(13.months())?.to_string(), "2025-02");
/// assert_eq!(ym.minus(1.month())?.to_string(), "2023-12");
///
/// let later = YearMonth::new(2025, 3)?;
/// assert_eq!(ym.difference(&later)?, 1.year().months(2));
/// assert_eq!(ym.difference((Unit::Month, &later))?, 14.months());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct YearMonth {
    slots: Slots,
}

impl YearMonth {
    /// Creates a new ISO 8601 year-month with a reference day of `1`.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month isn't in `1..=12` or when
    /// the year-month is outside of `-271821-04..=275760-09`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::civil::YearMonth;
    ///
    /// let ym = YearMonth::new(2021, 7)?;
    /// assert_eq!(ym.to_string(), "2021-07");
    ///
    /// assert!(YearMonth::new(2021, 0).is_err());
    /// assert!(YearMonth::new(-271821, 3).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(year: i32, month: i8) -> Result<YearMonth, Error> {
        YearMonth::new_with(year, month, Calendar::iso(), 1)
    }

    /// Creates a new year-month from its ISO fields and a calendar.
    ///
    /// The year and month given are ISO fields, regardless of the calendar.
    ///
    /// # Errors
    ///
    /// This returns a range error when `year`, `month` and `reference_day`
    /// don't form a valid ISO date, or when the year-month is outside of
    /// `-271821-04..=275760-09`.
    pub fn new_with(
        year: i32,
        month: i8,
        calendar: Calendar,
        reference_day: i8,
    ) -> Result<YearMonth, Error> {
        let slots = SlotsBuilder::new()
            .set(Slot::IsoYear(year))
            .set(Slot::IsoMonth(month))
            .set(Slot::ReferenceDay(reference_day))
            .set(Slot::Calendar(calendar))
            .freeze()?;
        Ok(YearMonth { slots })
    }

    /// Returns a target that builds year-months attached to the given
    /// calendar.
    pub(crate) fn construct(calendar: &Calendar) -> Construct<'_, YearMonth> {
        Construct::new(calendar, |iso, calendar| {
            YearMonth::new_with(
                iso.year(),
                iso.month(),
                calendar.clone(),
                iso.day(),
            )
        })
    }

    /// Builds a year-month from an existing value, a record of calendar
    /// fields or a string.
    ///
    /// * An existing year-month is copied.
    /// * Fields are interpreted by their calendar, which defaults to the
    /// ISO calendar when absent. The calendar decides how out of range
    /// fields are handled according to `disambiguation`.
    /// * A string is parsed. A month outside of `01..=12`, or a year-month
    /// outside of the supported range, is clamped or rejected according to
    /// `disambiguation`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{
    ///     calendar::{Disambiguation, Fields},
    ///     civil::YearMonth,
    /// };
    ///
    /// let ym = YearMonth::from_item("2021-07", Disambiguation::Reject)?;
    /// assert_eq!(ym.to_string(), "2021-07");
    ///
    /// let fields = Fields::new().year(2021).month(13);
    /// let ym = YearMonth::from_item(&fields, Disambiguation::Constrain)?;
    /// assert_eq!(ym.to_string(), "2021-12");
    /// assert!(YearMonth::from_item(&fields, Disambiguation::Reject).is_err());
    ///
    /// let ym = YearMonth::from_item("2021-13", Disambiguation::Constrain)?;
    /// assert_eq!(ym.to_string(), "2021-12");
    ///
    /// let copy = YearMonth::from_item(&ym, Disambiguation::Reject)?;
    /// assert!(copy.equals(&ym));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_item<'a, I: Into<YearMonthLike<'a>>>(
        item: I,
        disambiguation: Disambiguation,
    ) -> Result<YearMonth, Error> {
        match item.into().kind {
            LikeKind::YearMonth(ym) => YearMonth::new_with(
                ym.slots.iso_year(),
                ym.slots.iso_month(),
                ym.slots.calendar().clone(),
                ym.slots.reference_day(),
            ),
            LikeKind::Fields(fields) => {
                let calendar =
                    fields.get_calendar().cloned().unwrap_or_default();
                let result = calendar
                    .protocol()
                    .year_month_from_fields(
                        fields,
                        disambiguation,
                        YearMonth::construct(&calendar),
                    )
                    .and_then(|ym| check_calendar(&calendar, ym))
                    .context(E::FailedFromFields)?;
                Ok(result)
            }
            LikeKind::Str(s) => DEFAULT_PARSER
                .disambiguation(disambiguation)
                .parse_year_month(s),
        }
    }
}

/// Accessors.
///
/// Everything other than the ISO fields is computed by the calendar.
impl YearMonth {
    /// Returns the calendar year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.protocol().year(self.slots.iso())
    }

    /// Returns the calendar month.
    #[inline]
    pub fn month(&self) -> i8 {
        self.protocol().month(self.slots.iso())
    }

    /// Returns the calendar era, if the calendar has eras.
    #[inline]
    pub fn era(&self) -> Option<Cow<'static, str>> {
        self.protocol().era(self.slots.iso())
    }

    /// Returns the calendar attached to this year-month.
    #[inline]
    pub fn calendar(&self) -> &Calendar {
        self.slots.calendar()
    }

    /// Returns the number of days in this calendar month.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::civil::YearMonth;
    ///
    /// assert_eq!(YearMonth::new(2024, 2)?.days_in_month(), 29);
    /// assert_eq!(YearMonth::new(2023, 2)?.days_in_month(), 28);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn days_in_month(&self) -> i8 {
        self.protocol().days_in_month(self.slots.iso())
    }

    /// Returns the number of days in this calendar year.
    #[inline]
    pub fn days_in_year(&self) -> i16 {
        self.protocol().days_in_year(self.slots.iso())
    }

    /// Returns true when this year-month is in a leap year of its calendar.
    #[inline]
    pub fn in_leap_year(&self) -> bool {
        self.protocol().is_leap_year(self.slots.iso())
    }

    /// Returns the calendar fields of this year-month, including its
    /// calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{calendar::Calendar, civil::YearMonth};
    ///
    /// let ym = YearMonth::new_with(-43, 3, Calendar::gregorian(), 1)?;
    /// let fields = ym.fields();
    /// assert_eq!(fields.get_era(), Some("bce"));
    /// assert_eq!(fields.get_year(), Some(44));
    /// assert_eq!(fields.get_month(), Some(3));
    /// assert_eq!(fields.get_calendar(), Some(&Calendar::gregorian()));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn fields(&self) -> Fields {
        self.year_month_fields().calendar(self.calendar().clone())
    }

    /// Returns the ISO fields of this year-month. The day is the reference
    /// day.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::civil::YearMonth;
    ///
    /// let iso = YearMonth::new(2021, 7)?.iso_fields();
    /// assert_eq!((iso.year(), iso.month(), iso.day()), (2021, 7, 1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn iso_fields(&self) -> IsoDate {
        self.slots.iso()
    }

    /// Formats this year-month with a locale aware formatter.
    pub fn to_locale_string(&self, formatter: &dyn LocaleFormatter) -> String {
        formatter.format_year_month(self)
    }

    #[inline]
    fn protocol(&self) -> &dyn CalendarProtocol {
        self.slots.calendar().protocol()
    }

    /// Returns the calendar era, year and month of this value.
    fn year_month_fields(&self) -> Fields {
        let fields = Fields::new().year(self.year()).month(self.month());
        match self.era() {
            None => fields,
            Some(era) => fields.era(era),
        }
    }
}

/// Operations that build new values.
impl YearMonth {
    /// Returns a new year-month with some calendar fields replaced.
    ///
    /// Only the era, year and month of `fields` are used. They replace the
    /// corresponding fields of this value, and the result is interpreted by
    /// this value's calendar.
    ///
    /// # Errors
    ///
    /// This returns an error when `fields` sets a calendar (the calendar of
    /// a value can't be changed this way), when it sets none of the era,
    /// year or month, or when the calendar rejects the resulting fields.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{
    ///     calendar::{Disambiguation, Fields},
    ///     civil::YearMonth,
    /// };
    ///
    /// let ym = YearMonth::new(2021, 7)?;
    /// let fields = Fields::new().month(2);
    /// assert_eq!(ym.with(&fields, Disambiguation::Reject)?.to_string(), "2021-02");
    ///
    /// // The original is untouched.
    /// assert_eq!(ym.to_string(), "2021-07");
    ///
    /// let err = ym.with(&Fields::new(), Disambiguation::Reject).unwrap_err();
    /// assert!(err.is_invalid_field_set());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
    ) -> Result<YearMonth, Error> {
        if fields.get_calendar().is_some() {
            return Err(Error::from(E::CalendarInPartialFields));
        }
        if !fields.has_year_month_field() {
            return Err(Error::from(E::EmptyPartialFields));
        }
        let mut overrides = Fields::new();
        if let Some(era) = fields.get_era() {
            overrides = overrides.era(String::from(era));
        }
        if let Some(year) = fields.get_year() {
            overrides = overrides.year(year);
        }
        if let Some(month) = fields.get_month() {
            overrides = overrides.month(month);
        }
        let merged = self.year_month_fields().merge(&overrides);
        let calendar = self.calendar();
        self.protocol()
            .year_month_from_fields(
                &merged,
                disambiguation,
                YearMonth::construct(calendar),
            )
            .and_then(|ym| check_calendar(calendar, ym))
            .context(E::FailedWith)
    }

    /// Adds a duration to this year-month.
    ///
    /// Units smaller than a day are first balanced into whole days (any
    /// remainder is dropped). The duration is then added by the calendar to
    /// the *first* day of this calendar month, and the year-month of the
    /// resulting date is returned.
    ///
    /// This accepts a [`Duration`] or a [`YearMonthArithmetic`], the latter
    /// of which can set the disambiguation strategy.
    ///
    /// # Errors
    ///
    /// This returns an error when the duration has mixed signs, or when the
    /// result is outside the supported range.
    ///
    /// # Example
    ///
    /// Adding to the first day means that adding fewer days than there are
    /// in the month doesn't change the month:
    ///
    /// ```
    /// use jiff_calendar::{civil::YearMonth, ToDuration};
    ///
    /// let ym = YearMonth::new(2024, 1)?;
    /// assert_eq!(ym.plus(30.days())?.to_string(), "2024-01");
    /// assert_eq!(ym.plus(31.days())?.to_string(), "2024-02");
    /// assert_eq!(ym.plus(25.hours())?.to_string(), "2024-01");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus<A: Into<YearMonthArithmetic>>(
        &self,
        arithmetic: A,
    ) -> Result<YearMonth, Error> {
        let arithmetic = arithmetic.into();
        self.shift(arithmetic, Anchor::First).context(E::FailedAdd)
    }

    /// Subtracts a duration from this year-month.
    ///
    /// This mirrors [`YearMonth::plus`], except that the duration is
    /// subtracted from the *last* day of this calendar month.
    ///
    /// # Errors
    ///
    /// This returns an error when the duration has mixed signs, when the
    /// result is outside the supported range, or when the calendar reports a
    /// month without any days.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{civil::YearMonth, ToDuration};
    ///
    /// // Anchored at 2024-02-29, so 28 days back is still February.
    /// let ym = YearMonth::new(2024, 2)?;
    /// assert_eq!(ym.minus(28.days())?.to_string(), "2024-02");
    /// assert_eq!(ym.minus(29.days())?.to_string(), "2024-01");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn minus<A: Into<YearMonthArithmetic>>(
        &self,
        arithmetic: A,
    ) -> Result<YearMonth, Error> {
        let arithmetic = arithmetic.into();
        self.shift(arithmetic, Anchor::Last).context(E::FailedSubtract)
    }

    fn shift(
        &self,
        arithmetic: YearMonthArithmetic,
        anchor: Anchor,
    ) -> Result<YearMonth, Error> {
        let YearMonthArithmetic { duration, disambiguation } = arithmetic;
        let balanced = duration.balance(Unit::Day)?;
        let duration = Duration::new()
            .years(balanced.get_years())
            .months(balanced.get_months())
            .weeks(balanced.get_weeks())
            .days(balanced.get_days());

        let calendar = self.calendar();
        let protocol = calendar.protocol();
        let day = match anchor {
            Anchor::First => 1,
            Anchor::Last => {
                let days = self.days_in_month();
                if days < 1 {
                    return Err(Error::from(CE::DaysInMonthNotPositive {
                        id: calendar.id().into(),
                        days,
                    }));
                }
                days
            }
        };
        let fields = self.year_month_fields().day(day);
        let start = protocol
            .date_from_fields(
                &fields,
                Disambiguation::Constrain,
                Date::construct(calendar),
            )
            .and_then(|date| check_calendar(calendar, date))?;
        let end = match anchor {
            Anchor::First => protocol.add(
                &start,
                duration,
                disambiguation,
                Date::construct(calendar),
            ),
            Anchor::Last => protocol.subtract(
                &start,
                duration,
                disambiguation,
                Date::construct(calendar),
            ),
        }
        .and_then(|date| check_calendar(calendar, date))?;
        trace!(
            "shifted {self} by {duration:?} from anchor {start} \
             ({anchor:?} day) to {end}",
        );
        protocol
            .year_month_from_fields(
                &end.fields(),
                disambiguation,
                YearMonth::construct(calendar),
            )
            .and_then(|ym| check_calendar(calendar, ym))
    }

    /// Returns a date in this year-month with the given calendar day.
    ///
    /// # Errors
    ///
    /// This returns an error when the day isn't valid in this calendar
    /// month. Unlike most operations, this never clamps.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::civil::{Date, YearMonth};
    ///
    /// let ym = YearMonth::new(2024, 2)?;
    /// assert_eq!(ym.with_day(29)?, Date::new(2024, 2, 29)?);
    /// assert!(ym.with_day(30).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_day(&self, day: i8) -> Result<Date, Error> {
        let calendar = self.calendar();
        let fields = self.year_month_fields().day(day);
        self.protocol()
            .date_from_fields(
                &fields,
                Disambiguation::Reject,
                Date::construct(calendar),
            )
            .and_then(|date| check_calendar(calendar, date))
            .context(E::FailedWithDay)
    }
}

/// Comparisons and differences.
impl YearMonth {
    /// Returns the duration between this year-month and another one.
    ///
    /// The result is always non-negative: the operands are put in order
    /// before the difference is computed. Both are anchored at the first
    /// day of their calendar month and the calendar computes the difference
    /// between those dates.
    ///
    /// When `other` has a different calendar, its ISO fields are
    /// reinterpreted in this value's calendar first.
    ///
    /// This accepts a `&YearMonth`, a `(Unit, &YearMonth)` or a
    /// [`YearMonthDifference`]. The largest unit defaults to years.
    ///
    /// # Errors
    ///
    /// This returns a range error when the largest unit is smaller than
    /// months.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{civil::YearMonth, ToDuration, Unit};
    ///
    /// let ym1 = YearMonth::new(2021, 7)?;
    /// let ym2 = YearMonth::new(2019, 4)?;
    /// assert_eq!(ym1.difference(&ym2)?, 2.years().months(3));
    /// assert_eq!(ym2.difference(&ym1)?, 2.years().months(3));
    /// assert_eq!(ym1.difference((Unit::Month, &ym2))?, 27.months());
    /// assert!(ym1.difference((Unit::Day, &ym2)).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn difference<'a, A: Into<YearMonthDifference<'a>>>(
        &self,
        other: A,
    ) -> Result<Duration, Error> {
        let args = other.into();
        self.difference_impl(args).context(E::FailedDifference)
    }

    fn difference_impl(
        &self,
        args: YearMonthDifference<'_>,
    ) -> Result<Duration, Error> {
        let largest = args.largest.unwrap_or(Unit::Year);
        if largest < Unit::Month {
            return Err(Error::from(E::LargestUnitNotAllowed { unit: largest }));
        }
        let calendar = self.calendar();
        let reinterpreted;
        let other = if args.other.calendar() != calendar {
            debug!(
                "reinterpreting {other} in calendar `{id}` \
                 for difference with {this}",
                other = args.other,
                id = calendar.id(),
                this = self,
            );
            reinterpreted = YearMonth::new_with(
                args.other.slots.iso_year(),
                args.other.slots.iso_month(),
                calendar.clone(),
                args.other.slots.reference_day(),
            )?;
            &reinterpreted
        } else {
            args.other
        };
        let (smaller, larger) = match self.compare(other) {
            Ordering::Greater => (other, self),
            _ => (self, other),
        };

        let protocol = calendar.protocol();
        let anchor = |ym: &YearMonth| {
            protocol
                .date_from_fields(
                    &ym.year_month_fields().day(1),
                    Disambiguation::Constrain,
                    Date::construct(calendar),
                )
                .and_then(|date| check_calendar(calendar, date))
        };
        let (start, end) = (anchor(smaller)?, anchor(larger)?);
        protocol.difference(&start, &end, largest)
    }

    /// Returns true when the ISO fields and calendar identifiers of both
    /// values are equal.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{calendar::Calendar, civil::YearMonth};
    ///
    /// let iso = YearMonth::new(2021, 7)?;
    /// let gregory = YearMonth::new_with(2021, 7, Calendar::gregorian(), 1)?;
    /// assert!(iso.equals(&YearMonth::new(2021, 7)?));
    /// assert!(!iso.equals(&gregory));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn equals(&self, other: &YearMonth) -> bool {
        self.slots.iso() == other.slots.iso()
            && self.calendar().id() == other.calendar().id()
    }

    /// Compares two year-months.
    ///
    /// Values are ordered by ISO year, ISO month and reference day, and then
    /// by calendar identifier. This is a total order: it returns
    /// `Ordering::Equal` exactly when [`YearMonth::equals`] returns true.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use jiff_calendar::civil::YearMonth;
    ///
    /// let mut yms = vec![
    ///     YearMonth::new(2021, 8)?,
    ///     YearMonth::new(2020, 12)?,
    ///     YearMonth::new(2021, 7)?,
    /// ];
    /// yms.sort_by(YearMonth::compare);
    /// let sorted: Vec<String> = yms.iter().map(|ym| ym.to_string()).collect();
    /// assert_eq!(sorted, ["2020-12", "2021-07", "2021-08"]);
    ///
    /// let (a, b) = (&yms[1], &yms[2]);
    /// assert_eq!(a.compare(b), Ordering::Less);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn compare(&self, other: &YearMonth) -> Ordering {
        self.slots
            .iso()
            .cmp(&other.slots.iso())
            .then_with(|| self.calendar().id().cmp(other.calendar().id()))
    }
}

#[derive(Clone, Copy, Debug)]
enum Anchor {
    First,
    Last,
}

/// Checks that a calendar returned a value attached to itself.
fn check_calendar<T: Attached>(
    expected: &Calendar,
    value: T,
) -> Result<T, Error> {
    let found = value.attached_calendar();
    if found.id() != expected.id() {
        warn!(
            "calendar `{expected}` returned a value attached to `{found}`",
            expected = expected.id(),
            found = found.id(),
        );
        return Err(Error::from(E::InvalidResult {
            expected: expected.id().into(),
            found: found.id().into(),
        }));
    }
    Ok(value)
}

trait Attached {
    fn attached_calendar(&self) -> &Calendar;
}

impl Attached for YearMonth {
    fn attached_calendar(&self) -> &Calendar {
        self.calendar()
    }
}

impl Attached for Date {
    fn attached_calendar(&self) -> &Calendar {
        self.calendar()
    }
}

impl core::fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_PRINTER.fmt_year_month(self, f)
    }
}

impl core::str::FromStr for YearMonth {
    type Err = Error;

    fn from_str(string: &str) -> Result<YearMonth, Error> {
        DEFAULT_PARSER.parse_year_month(string)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for YearMonth {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for YearMonth {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<YearMonth, D::Error> {
        use serde::de;

        struct YearMonthVisitor;

        impl<'de> de::Visitor<'de> for YearMonthVisitor {
            type Value = YearMonth;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a year-month string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<YearMonth, E> {
                DEFAULT_PARSER
                    .parse_year_month(value)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<YearMonth, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_bytes(YearMonthVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for YearMonth {
    fn arbitrary(g: &mut quickcheck::Gen) -> YearMonth {
        use quickcheck::Arbitrary;

        // The day of the date becomes the reference day, so these aren't
        // always on the first of the month.
        let iso = IsoDate::arbitrary(g);
        // OK because every in-range ISO date has an in-range year-month.
        let (year, month, day) = (iso.year(), iso.month(), iso.day());
        YearMonth::new_with(year, month, Calendar::iso(), day).unwrap()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = YearMonth>> {
        use quickcheck::Arbitrary;

        let fields = (
            self.slots.iso_year(),
            self.slots.iso_month(),
            self.slots.reference_day(),
        );
        alloc::boxed::Box::new(fields.shrink().filter_map(
            |(year, month, day)| {
                YearMonth::new_with(year, month, Calendar::iso(), day).ok()
            },
        ))
    }
}

/// Options for [`YearMonth::plus`] and [`YearMonth::minus`].
///
/// This bundles the duration with the strategy for handling out of range
/// fields in the result. A plain [`Duration`] converts into this type with
/// the default strategy, [`Disambiguation::Constrain`].
///
/// # Example
///
/// ```
/// use jiff_calendar::{
///     calendar::Disambiguation,
///     civil::{YearMonth, YearMonthArithmetic},
///     ToDuration,
/// };
///
/// // Subtracting anchors at March 31, and February 31 doesn't exist.
/// let ym = YearMonth::new(2024, 3)?;
/// assert_eq!(ym.minus(1.month())?.to_string(), "2024-02");
///
/// let strict = YearMonthArithmetic::new(1.month())
///     .disambiguation(Disambiguation::Reject);
/// assert!(ym.minus(strict).unwrap_err().is_range());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct YearMonthArithmetic {
    duration: Duration,
    disambiguation: Disambiguation,
}

impl YearMonthArithmetic {
    /// Creates a new configuration for adding or subtracting the given
    /// duration.
    #[inline]
    pub fn new(duration: Duration) -> YearMonthArithmetic {
        YearMonthArithmetic {
            duration,
            disambiguation: Disambiguation::default(),
        }
    }

    /// Sets the strategy for handling out of range fields.
    #[inline]
    pub fn disambiguation(
        self,
        disambiguation: Disambiguation,
    ) -> YearMonthArithmetic {
        YearMonthArithmetic { disambiguation, ..self }
    }
}

impl From<Duration> for YearMonthArithmetic {
    #[inline]
    fn from(duration: Duration) -> YearMonthArithmetic {
        YearMonthArithmetic::new(duration)
    }
}

/// Options for [`YearMonth::difference`].
///
/// This bundles the other year-month with the largest unit allowed in the
/// result. The largest unit is either [`Unit::Year`], the default, or
/// [`Unit::Month`].
///
/// # Example
///
/// ```
/// use jiff_calendar::{
///     civil::{YearMonth, YearMonthDifference},
///     ToDuration, Unit,
/// };
///
/// let ym1 = YearMonth::new(2023, 1)?;
/// let ym2 = YearMonth::new(2024, 3)?;
/// let diff = YearMonthDifference::new(&ym2).largest(Unit::Month);
/// assert_eq!(ym1.difference(diff)?, 14.months());
///
/// let diff = YearMonthDifference::new(&ym2).largest(Unit::Week);
/// assert!(ym1.difference(diff).unwrap_err().is_range());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct YearMonthDifference<'a> {
    other: &'a YearMonth,
    largest: Option<Unit>,
}

impl<'a> YearMonthDifference<'a> {
    /// Creates a new configuration for computing the difference with the
    /// given year-month.
    #[inline]
    pub fn new(other: &'a YearMonth) -> YearMonthDifference<'a> {
        YearMonthDifference { other, largest: None }
    }

    /// Sets the largest unit allowed in the result.
    #[inline]
    pub fn largest(self, unit: Unit) -> YearMonthDifference<'a> {
        YearMonthDifference { largest: Some(unit), ..self }
    }
}

impl<'a> From<&'a YearMonth> for YearMonthDifference<'a> {
    #[inline]
    fn from(other: &'a YearMonth) -> YearMonthDifference<'a> {
        YearMonthDifference::new(other)
    }
}

impl<'a> From<(Unit, &'a YearMonth)> for YearMonthDifference<'a> {
    #[inline]
    fn from((largest, other): (Unit, &'a YearMonth)) -> YearMonthDifference<'a> {
        YearMonthDifference::new(other).largest(largest)
    }
}

/// Something that can be turned into a year-month by
/// [`YearMonth::from_item`].
///
/// This is implemented for `&YearMonth`, `&Fields` and `&str`.
#[derive(Clone, Copy, Debug)]
pub struct YearMonthLike<'a> {
    kind: LikeKind<'a>,
}

#[derive(Clone, Copy, Debug)]
enum LikeKind<'a> {
    YearMonth(&'a YearMonth),
    Fields(&'a Fields),
    Str(&'a str),
}

impl<'a> From<&'a YearMonth> for YearMonthLike<'a> {
    #[inline]
    fn from(ym: &'a YearMonth) -> YearMonthLike<'a> {
        YearMonthLike { kind: LikeKind::YearMonth(ym) }
    }
}

impl<'a> From<&'a Fields> for YearMonthLike<'a> {
    #[inline]
    fn from(fields: &'a Fields) -> YearMonthLike<'a> {
        YearMonthLike { kind: LikeKind::Fields(fields) }
    }
}

impl<'a> From<&'a str> for YearMonthLike<'a> {
    #[inline]
    fn from(s: &'a str) -> YearMonthLike<'a> {
        YearMonthLike { kind: LikeKind::Str(s) }
    }
}
