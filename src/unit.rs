/// A unit of time.
///
/// Units are ordered from smallest to largest, so `Unit::Year` is the
/// biggest unit and `Unit::Nanosecond` the smallest:
///
/// ```
/// use jiff_calendar::Unit;
///
/// assert!(Unit::Year > Unit::Month);
/// assert!(Unit::Day > Unit::Hour);
/// assert_eq!(Unit::Week, Unit::Week);
/// ```
///
/// Years, months and weeks are calendar units. Their length depends on the
/// calendar and on the date they're anchored to. Days and everything smaller
/// are treated as fixed length (a day is always 24 hours) by this crate,
/// since it never deals with time zones.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Unit {
    /// A calendar year.
    Year = 9,
    /// A calendar month.
    Month = 8,
    /// Seven days.
    Week = 7,
    /// 24 hours.
    Day = 6,
    /// 60 minutes.
    Hour = 5,
    /// 60 seconds.
    Minute = 4,
    /// 1,000 milliseconds.
    Second = 3,
    /// 1,000 microseconds.
    Millisecond = 2,
    /// 1,000 nanoseconds.
    Microsecond = 1,
    /// The smallest unit supported.
    Nanosecond = 0,
}

impl Unit {
    /// Returns the number of nanoseconds in this unit, or `None` for the
    /// calendar units (years, months and weeks).
    pub(crate) fn nanoseconds(self) -> Option<i128> {
        let nanos = match self {
            Unit::Nanosecond => 1,
            Unit::Microsecond => 1_000,
            Unit::Millisecond => 1_000_000,
            Unit::Second => 1_000_000_000,
            Unit::Minute => 60_000_000_000,
            Unit::Hour => 3_600_000_000_000,
            Unit::Day => 86_400_000_000_000,
            Unit::Week | Unit::Month | Unit::Year => return None,
        };
        Some(nanos)
    }

    /// Returns true when this unit is a calendar unit.
    pub(crate) fn is_calendar(self) -> bool {
        self > Unit::Day
    }

    /// The plural name of this unit, all in lowercase.
    pub(crate) fn plural(&self) -> &'static str {
        match *self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
            Unit::Millisecond => "milliseconds",
            Unit::Microsecond => "microseconds",
            Unit::Nanosecond => "nanoseconds",
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        *g.choose(&[
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
        ])
        .unwrap()
    }
}
