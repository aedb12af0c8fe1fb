/*!
A mixed-unit duration record and the algorithm for balancing it.

A [`Duration`] is a bag of signed integer counts, one for each [`Unit`].
It is intentionally dumb: no unit is ever implicitly converted into
another. The only conversion is [`Duration::balance`], which folds days
and everything smaller into a canonical representation whose biggest
component is the requested largest unit.
*/

use crate::{
    error::{duration::Error as E, Error},
    unit::Unit,
};

/// A duration made up of counts of calendar and time units.
///
/// Every unit is a signed 64-bit integer. A valid duration has all of its
/// non-zero units sharing the same sign. Constructing a duration with mixed
/// signs is possible, but every operation in this crate that consumes a
/// duration rejects it.
///
/// # Example
///
/// ```
/// use jiff_calendar::{Duration, ToDuration};
///
/// let d = Duration::new().months(1).days(3);
/// assert_eq!(d, 1.month().days(3));
/// assert_eq!(d.get_days(), 3);
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Duration {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
    microseconds: i64,
    nanoseconds: i64,
}

/// Routines for setting units on a `Duration`.
impl Duration {
    /// Creates a new duration where every unit is zero.
    #[inline]
    pub fn new() -> Duration {
        Duration::default()
    }

    /// Set the number of years on this duration.
    #[inline]
    pub fn years<I: Into<i64>>(self, years: I) -> Duration {
        Duration { years: years.into(), ..self }
    }

    /// Set the number of months on this duration.
    #[inline]
    pub fn months<I: Into<i64>>(self, months: I) -> Duration {
        Duration { months: months.into(), ..self }
    }

    /// Set the number of weeks on this duration.
    #[inline]
    pub fn weeks<I: Into<i64>>(self, weeks: I) -> Duration {
        Duration { weeks: weeks.into(), ..self }
    }

    /// Set the number of days on this duration.
    #[inline]
    pub fn days<I: Into<i64>>(self, days: I) -> Duration {
        Duration { days: days.into(), ..self }
    }

    /// Set the number of hours on this duration.
    #[inline]
    pub fn hours<I: Into<i64>>(self, hours: I) -> Duration {
        Duration { hours: hours.into(), ..self }
    }

    /// Set the number of minutes on this duration.
    #[inline]
    pub fn minutes<I: Into<i64>>(self, minutes: I) -> Duration {
        Duration { minutes: minutes.into(), ..self }
    }

    /// Set the number of seconds on this duration.
    #[inline]
    pub fn seconds<I: Into<i64>>(self, seconds: I) -> Duration {
        Duration { seconds: seconds.into(), ..self }
    }

    /// Set the number of milliseconds on this duration.
    #[inline]
    pub fn milliseconds<I: Into<i64>>(self, milliseconds: I) -> Duration {
        Duration { milliseconds: milliseconds.into(), ..self }
    }

    /// Set the number of microseconds on this duration.
    #[inline]
    pub fn microseconds<I: Into<i64>>(self, microseconds: I) -> Duration {
        Duration { microseconds: microseconds.into(), ..self }
    }

    /// Set the number of nanoseconds on this duration.
    #[inline]
    pub fn nanoseconds<I: Into<i64>>(self, nanoseconds: I) -> Duration {
        Duration { nanoseconds: nanoseconds.into(), ..self }
    }
}

/// Routines for accessing the individual units of a `Duration`.
impl Duration {
    /// Returns the number of year units in this duration.
    ///
    /// Units are never balanced, so this is exactly what was set.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::ToDuration;
    ///
    /// let d = 2.years().months(15);
    /// assert_eq!(d.get_years(), 2);
    /// assert_eq!(d.get_months(), 15);
    /// ```
    #[inline]
    pub fn get_years(&self) -> i64 {
        self.years
    }

    /// Returns the number of month units in this duration.
    #[inline]
    pub fn get_months(&self) -> i64 {
        self.months
    }

    /// Returns the number of week units in this duration.
    #[inline]
    pub fn get_weeks(&self) -> i64 {
        self.weeks
    }

    /// Returns the number of day units in this duration.
    #[inline]
    pub fn get_days(&self) -> i64 {
        self.days
    }

    /// Returns the number of hour units in this duration.
    #[inline]
    pub fn get_hours(&self) -> i64 {
        self.hours
    }

    /// Returns the number of minute units in this duration.
    #[inline]
    pub fn get_minutes(&self) -> i64 {
        self.minutes
    }

    /// Returns the number of second units in this duration.
    #[inline]
    pub fn get_seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of millisecond units in this duration.
    #[inline]
    pub fn get_milliseconds(&self) -> i64 {
        self.milliseconds
    }

    /// Returns the number of microsecond units in this duration.
    #[inline]
    pub fn get_microseconds(&self) -> i64 {
        self.microseconds
    }

    /// Returns the number of nanosecond units in this duration.
    #[inline]
    pub fn get_nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    /// Returns the count for the given unit.
    #[inline]
    pub fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
            Unit::Millisecond => self.milliseconds,
            Unit::Microsecond => self.microseconds,
            Unit::Nanosecond => self.nanoseconds,
        }
    }

    fn with(self, unit: Unit, value: i64) -> Duration {
        match unit {
            Unit::Year => self.years(value),
            Unit::Month => self.months(value),
            Unit::Week => self.weeks(value),
            Unit::Day => self.days(value),
            Unit::Hour => self.hours(value),
            Unit::Minute => self.minutes(value),
            Unit::Second => self.seconds(value),
            Unit::Millisecond => self.milliseconds(value),
            Unit::Microsecond => self.microseconds(value),
            Unit::Nanosecond => self.nanoseconds(value),
        }
    }

    fn units(&self) -> [i64; 10] {
        [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
            self.microseconds,
            self.nanoseconds,
        ]
    }
}

impl Duration {
    /// Returns true when every unit of this duration is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.units().iter().all(|&n| n == 0)
    }

    /// Returns the sign of this duration: `-1`, `0` or `1`.
    ///
    /// # Errors
    ///
    /// This returns an error when the non-zero units of this duration don't
    /// all share the same sign.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::ToDuration;
    ///
    /// assert_eq!(5.days().hours(2).signum()?, 1);
    /// assert_eq!((-5).days().signum()?, -1);
    /// assert!(5.days().hours(-2).signum().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn signum(&self) -> Result<i8, Error> {
        let mut sign = 0;
        for n in self.units() {
            let s = n.signum() as i8;
            if s == 0 {
                continue;
            }
            if sign != 0 && s != sign {
                return Err(Error::from(E::MixedSigns));
            }
            sign = s;
        }
        Ok(sign)
    }

    /// Returns this duration with every unit negated.
    ///
    /// # Errors
    ///
    /// This returns an error when any unit is `i64::MIN`.
    pub fn checked_neg(self) -> Result<Duration, Error> {
        let mut neg = Duration::new();
        for unit in ALL_UNITS {
            let n = self.get(unit);
            let negated = n
                .checked_neg()
                .ok_or_else(|| Error::range(unit.plural(), n, -i64::MAX, i64::MAX))?;
            neg = neg.with(unit, negated);
        }
        Ok(neg)
    }

    /// Balances the days and smaller units of this duration up to the given
    /// largest unit.
    ///
    /// Days, hours, minutes, seconds, milliseconds, microseconds and
    /// nanoseconds are summed exactly and then redistributed starting from
    /// `largest`. A day is always 24 hours. Every unit that is at least one
    /// full `largest` is carried upward into it, while whatever is left over
    /// stays in the smaller units with the same sign. Nothing is ever
    /// borrowed downward from a bigger unit.
    ///
    /// Years, months and weeks are calendar dependent and are passed
    /// through untouched. Asking for a calendar unit as the largest unit
    /// balances up to days.
    ///
    /// # Errors
    ///
    /// This returns an error when the duration has mixed signs, or when a
    /// balanced unit doesn't fit into an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{ToDuration, Unit};
    ///
    /// let d = 25.hours().balance(Unit::Day)?;
    /// assert_eq!(d, 1.day().hours(1));
    ///
    /// let d = 1.day().minutes(90).balance(Unit::Hour)?;
    /// assert_eq!(d, 25.hours().minutes(30));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn balance(self, largest: Unit) -> Result<Duration, Error> {
        self.signum()?;
        let largest = if largest.is_calendar() { Unit::Day } else { largest };

        let mut remaining = self.total_time_nanoseconds();
        let mut balanced = Duration::new()
            .years(self.years)
            .months(self.months)
            .weeks(self.weeks);
        for unit in TIME_UNITS {
            if unit > largest {
                continue;
            }
            // OK because `TIME_UNITS` contains only fixed length units.
            let size = unit.nanoseconds().unwrap();
            let count = remaining / size;
            remaining %= size;
            let count = i64::try_from(count)
                .map_err(|_| Error::from(E::OverflowBalanced { unit }))?;
            balanced = balanced.with(unit, count);
        }
        debug_assert_eq!(remaining, 0);
        trace!("balanced {self:?} to largest unit {largest:?}: {balanced:?}");
        Ok(balanced)
    }

    /// Returns the sum of days and all smaller units in nanoseconds.
    ///
    /// This can't overflow: the sum of seven `i64` values each multiplied
    /// by at most `86_400_000_000_000` fits comfortably in an `i128`.
    fn total_time_nanoseconds(&self) -> i128 {
        TIME_UNITS
            .iter()
            .map(|&unit| {
                // OK because `TIME_UNITS` contains only fixed length units.
                i128::from(self.get(unit)) * unit.nanoseconds().unwrap()
            })
            .sum()
    }
}

const ALL_UNITS: [Unit; 10] = [
    Unit::Year,
    Unit::Month,
    Unit::Week,
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
    Unit::Millisecond,
    Unit::Microsecond,
    Unit::Nanosecond,
];

/// The fixed length units, biggest first.
const TIME_UNITS: [Unit; 7] = [
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
    Unit::Millisecond,
    Unit::Microsecond,
    Unit::Nanosecond,
];

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_zero() {
            return f.write_str("0s");
        }
        let mut first = true;
        for unit in ALL_UNITS {
            let n = self.get(unit);
            if n == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{n}{label}", label = debug_label(unit))?;
        }
        Ok(())
    }
}

fn debug_label(unit: Unit) -> &'static str {
    match unit {
        Unit::Year => "y",
        Unit::Month => "mo",
        Unit::Week => "w",
        Unit::Day => "d",
        Unit::Hour => "h",
        Unit::Minute => "m",
        Unit::Second => "s",
        Unit::Millisecond => "ms",
        Unit::Microsecond => "µs",
        Unit::Nanosecond => "ns",
    }
}

/// A trait for creating new durations from integers.
///
/// This is a convenience for writing `1.month().days(3)` instead of
/// `Duration::new().months(1).days(3)`. It is implemented for the signed
/// integer types that losslessly convert to `i64`.
///
/// # Example
///
/// ```
/// use jiff_calendar::{Duration, ToDuration};
///
/// assert_eq!(2.years().months(6), Duration::new().years(2).months(6));
/// assert_eq!((-29).days(), Duration::new().days(-29));
/// ```
pub trait ToDuration: Sized {
    /// Create a new duration from this integer in units of years.
    fn years(self) -> Duration;

    /// Create a new duration from this integer in units of months.
    fn months(self) -> Duration;

    /// Create a new duration from this integer in units of weeks.
    fn weeks(self) -> Duration;

    /// Create a new duration from this integer in units of days.
    fn days(self) -> Duration;

    /// Create a new duration from this integer in units of hours.
    fn hours(self) -> Duration;

    /// Create a new duration from this integer in units of minutes.
    fn minutes(self) -> Duration;

    /// Create a new duration from this integer in units of seconds.
    fn seconds(self) -> Duration;

    /// Create a new duration from this integer in units of milliseconds.
    fn milliseconds(self) -> Duration;

    /// Create a new duration from this integer in units of microseconds.
    fn microseconds(self) -> Duration;

    /// Create a new duration from this integer in units of nanoseconds.
    fn nanoseconds(self) -> Duration;

    /// Equivalent to `years()`, but reads better for singular units.
    #[inline]
    fn year(self) -> Duration {
        self.years()
    }

    /// Equivalent to `months()`, but reads better for singular units.
    #[inline]
    fn month(self) -> Duration {
        self.months()
    }

    /// Equivalent to `weeks()`, but reads better for singular units.
    #[inline]
    fn week(self) -> Duration {
        self.weeks()
    }

    /// Equivalent to `days()`, but reads better for singular units.
    #[inline]
    fn day(self) -> Duration {
        self.days()
    }

    /// Equivalent to `hours()`, but reads better for singular units.
    #[inline]
    fn hour(self) -> Duration {
        self.hours()
    }
}

macro_rules! impl_to_duration {
    ($ty:ty) => {
        impl ToDuration for $ty {
            #[inline]
            fn years(self) -> Duration {
                Duration::new().years(self)
            }
            #[inline]
            fn months(self) -> Duration {
                Duration::new().months(self)
            }
            #[inline]
            fn weeks(self) -> Duration {
                Duration::new().weeks(self)
            }
            #[inline]
            fn days(self) -> Duration {
                Duration::new().days(self)
            }
            #[inline]
            fn hours(self) -> Duration {
                Duration::new().hours(self)
            }
            #[inline]
            fn minutes(self) -> Duration {
                Duration::new().minutes(self)
            }
            #[inline]
            fn seconds(self) -> Duration {
                Duration::new().seconds(self)
            }
            #[inline]
            fn milliseconds(self) -> Duration {
                Duration::new().milliseconds(self)
            }
            #[inline]
            fn microseconds(self) -> Duration {
                Duration::new().microseconds(self)
            }
            #[inline]
            fn nanoseconds(self) -> Duration {
                Duration::new().nanoseconds(self)
            }
        }
    };
}

impl_to_duration!(i8);
impl_to_duration!(i16);
impl_to_duration!(i32);
impl_to_duration!(i64);

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        use quickcheck::Arbitrary;

        // Keep each unit modest so that sums stay meaningful, and force a
        // single sign so that the duration is valid.
        let negative = bool::arbitrary(g);
        let mut d = Duration::new();
        for unit in TIME_UNITS {
            let n = i64::from(i32::arbitrary(g)).abs();
            d = d.with(unit, if negative { -n } else { n });
        }
        d
    }
}
