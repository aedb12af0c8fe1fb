use jiff_calendar::{
    calendar::{Calendar, Disambiguation},
    civil::{YearMonth, YearMonthArithmetic},
    Duration, ToDuration,
};

use crate::Result;

#[test]
fn minus_anchors_at_end_of_month() -> Result {
    crate::init_logging();

    let ym = YearMonth::new(2024, 2)?;
    assert_eq!(ym.minus(29.days())?.to_string(), "2024-01");
    assert_eq!(ym.minus(28.days())?.to_string(), "2024-02");

    let ym = YearMonth::new(2023, 2)?;
    assert_eq!(ym.minus(28.days())?.to_string(), "2023-01");

    Ok(())
}

#[test]
fn plus_anchors_at_start_of_month() -> Result {
    let ym = YearMonth::new(2024, 3)?;
    assert_eq!(ym.plus((-29).days())?.to_string(), "2024-02");
    assert_eq!(ym.plus((-1).days())?.to_string(), "2024-02");
    assert_eq!(ym.plus(30.days())?.to_string(), "2024-03");
    assert_eq!(ym.plus(31.days())?.to_string(), "2024-04");
    Ok(())
}

#[test]
fn sub_day_units_fold_into_days() -> Result {
    let balanced = 25.hours().balance(jiff_calendar::Unit::Day)?;
    assert_eq!(balanced, 1.day().hours(1));

    let ym = YearMonth::new(2024, 1)?;
    assert_eq!(ym.plus(30.days().hours(24))?.to_string(), "2024-02");
    assert_eq!(ym.plus(30.days().hours(23))?.to_string(), "2024-01");
    assert_eq!(ym.plus((31 * 24 * 60).minutes())?.to_string(), "2024-02");
    assert_eq!(ym.plus(Duration::new().seconds(86_400 * 60))?.to_string(), "2024-03");

    let ym = YearMonth::new(2024, 2)?;
    assert_eq!(ym.minus((29 * 24).hours())?.to_string(), "2024-01");
    assert_eq!(ym.minus((29 * 24 - 1).hours())?.to_string(), "2024-02");

    Ok(())
}

#[test]
fn months_and_years() -> Result {
    let ym = YearMonth::new(2021, 12)?;
    assert_eq!(ym.plus(1.month())?.to_string(), "2022-01");
    assert_eq!(ym.plus(13.months())?.to_string(), "2023-01");
    assert_eq!(ym.minus(12.months())?.to_string(), "2020-12");
    assert_eq!(ym.minus((-1).year())?.to_string(), "2022-12");
    assert_eq!(ym.plus(1.year().months(1).weeks(1))?.to_string(), "2023-01");
    Ok(())
}

#[test]
fn disambiguation_applies_to_calendar_arithmetic() -> Result {
    let ym = YearMonth::new(2024, 3)?;
    assert_eq!(ym.minus(1.month())?.to_string(), "2024-02");

    let strict = YearMonthArithmetic::new(1.month())
        .disambiguation(Disambiguation::Reject);
    let err = ym.minus(strict).unwrap_err();
    assert!(err.is_range());
    insta::assert_snapshot!(
        err,
        @"failed to subtract duration from year-month: parameter 'day' with value 31 is not in the required range of 1..=29",
    );

    // Anchoring at the first day never needs clamping.
    assert_eq!(ym.plus(strict)?.to_string(), "2024-04");

    Ok(())
}

#[test]
fn limits() -> Result {
    let max = YearMonth::new(275760, 9)?;
    assert!(max.plus(1.month()).unwrap_err().is_range());
    assert_eq!(max.minus(1.month())?.to_string(), "+275760-08");
    assert_eq!(max.plus(29.days())?.to_string(), "+275760-09");

    let min = YearMonth::new(-271821, 4)?;
    assert!(min.minus(1.month()).unwrap_err().is_range());
    assert!(min.plus((-1).day()).unwrap_err().is_range());
    assert_eq!(min.plus(1.month())?.to_string(), "-271821-05");

    let ym = YearMonth::new(2021, 7)?;
    assert!(ym.plus(i64::MAX.years()).unwrap_err().is_range());
    assert!(ym.plus(i64::MIN.months()).unwrap_err().is_range());

    Ok(())
}

#[test]
fn mixed_signs_are_rejected() -> Result {
    let ym = YearMonth::new(2021, 7)?;
    let err = ym.plus(1.month().days(-1)).unwrap_err();
    assert!(err.is_range());
    insta::assert_snapshot!(
        err,
        @"failed to add duration to year-month: duration has units with mixed signs (all non-zero units must be positive or all negative)",
    );
    Ok(())
}

#[test]
fn receiver_is_not_modified() -> Result {
    let ym = YearMonth::new_with(2021, 7, Calendar::gregorian(), 1)?;
    let before = ym.clone();
    let _ = ym.plus(1.month())?;
    let _ = ym.minus(1.year())?;
    let _ = ym.plus(1.month().days(-1));
    assert!(ym.equals(&before));
    assert_eq!(ym.to_string(), "2021-07-01[u-ca=gregory]");
    Ok(())
}

#[test]
fn gregorian_arithmetic_crosses_eras() -> Result {
    let ym = YearMonth::new_with(1, 1, Calendar::gregorian(), 1)?;
    let earlier = ym.minus(1.month())?;
    assert_eq!(earlier.era().as_deref(), Some("bce"));
    assert_eq!((earlier.year(), earlier.month()), (1, 12));
    assert_eq!(earlier.to_string(), "0000-12-01[u-ca=gregory]");
    Ok(())
}
