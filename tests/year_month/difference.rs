use jiff_calendar::{
    calendar::Calendar,
    civil::{YearMonth, YearMonthDifference},
    Duration, ToDuration, Unit,
};

use crate::Result;

#[test]
fn defaults_to_years() -> Result {
    let ym1 = YearMonth::new(2019, 4)?;
    let ym2 = YearMonth::new(2021, 7)?;
    assert_eq!(ym1.difference(&ym2)?, 2.years().months(3));
    assert_eq!(ym2.difference(&ym1)?, 2.years().months(3));
    assert_eq!(ym1.difference(&ym1)?, Duration::new());
    Ok(())
}

#[test]
fn largest_unit() -> Result {
    let ym1 = YearMonth::new(2024, 1)?;
    let ym2 = YearMonth::new(2025, 3)?;
    assert_eq!(ym1.difference((Unit::Year, &ym2))?, 1.year().months(2));
    assert_eq!(ym1.difference((Unit::Month, &ym2))?, 14.months());

    let args = YearMonthDifference::new(&ym2).largest(Unit::Month);
    assert_eq!(ym1.difference(args)?, 14.months());

    Ok(())
}

#[test]
fn largest_unit_smaller_than_month_is_rejected() -> Result {
    let ym1 = YearMonth::new(2021, 1)?;
    let ym2 = YearMonth::new(2021, 3)?;
    for unit in [
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
    ] {
        let err = ym1.difference((unit, &ym2)).unwrap_err();
        assert!(err.is_range(), "{unit:?} should be rejected");
    }
    let err = ym1.difference((Unit::Week, &ym2)).unwrap_err();
    insta::assert_snapshot!(
        err,
        @"failed to compute difference between year-months: largest unit for a year-month difference must be years or months, but found weeks",
    );
    Ok(())
}

#[test]
fn across_calendars() -> Result {
    let iso = YearMonth::new(2000, 5)?;
    let gregory = YearMonth::new_with(-5, 2, Calendar::gregorian(), 1)?;
    let d1 = iso.difference(&gregory)?;
    let d2 = gregory.difference(&iso)?;
    assert_eq!(d1, 2005.years().months(3));
    assert_eq!(d1, d2);
    Ok(())
}

#[test]
fn extremes() -> Result {
    let min = YearMonth::new(-271821, 4)?;
    let max = YearMonth::new(275760, 9)?;
    assert_eq!(min.difference(&max)?, 547581.years().months(5));
    assert_eq!(max.difference((Unit::Month, &min))?, 6570977.months());
    Ok(())
}
