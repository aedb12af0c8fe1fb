use jiff_calendar::{
    calendar::{Calendar, Disambiguation, Fields},
    civil::{Date, YearMonth},
};

use crate::Result;

#[test]
fn replaces_fields() -> Result {
    let ym = YearMonth::new(2021, 7)?;
    let got = ym.with(&Fields::new().year(1999), Disambiguation::Reject)?;
    assert_eq!(got.to_string(), "1999-07");
    let got = ym.with(&Fields::new().month(1), Disambiguation::Reject)?;
    assert_eq!(got.to_string(), "2021-01");
    let got =
        ym.with(&Fields::new().year(1).month(2), Disambiguation::Reject)?;
    assert_eq!(got.to_string(), "0001-02");
    // The day is ignored.
    let got = ym.with(&Fields::new().month(2).day(30), Disambiguation::Reject)?;
    assert_eq!(got.to_string(), "2021-02");
    Ok(())
}

#[test]
fn rejects_calendar() -> Result {
    let ym = YearMonth::new(2021, 7)?;
    let fields = Fields::new().calendar(Calendar::gregorian());
    let err = ym.with(&fields, Disambiguation::Reject).unwrap_err();
    assert!(err.is_invalid_field_set());
    insta::assert_snapshot!(
        err,
        @"the calendar of a year-month cannot be changed with partial fields",
    );
    Ok(())
}

#[test]
fn rejects_empty_fields() -> Result {
    let ym = YearMonth::new(2021, 7)?;
    let err = ym.with(&Fields::new(), Disambiguation::Reject).unwrap_err();
    assert!(err.is_invalid_field_set());
    let err = ym.with(&Fields::new().day(1), Disambiguation::Reject).unwrap_err();
    assert!(err.is_invalid_field_set());
    insta::assert_snapshot!(
        err,
        @"partial fields must set at least one of `era`, `year` or `month`",
    );
    Ok(())
}

#[test]
fn regulates_month() -> Result {
    let ym = YearMonth::new(2021, 7)?;
    let fields = Fields::new().month(13);
    let got = ym.with(&fields, Disambiguation::Constrain)?;
    assert_eq!(got.to_string(), "2021-12");
    let err = ym.with(&fields, Disambiguation::Reject).unwrap_err();
    assert!(err.is_range());
    insta::assert_snapshot!(
        err,
        @"failed to replace year-month fields: parameter 'month' with value 13 is not in the required range of 1..=12",
    );
    Ok(())
}

#[test]
fn gregorian_eras() -> Result {
    let ym = YearMonth::new_with(2021, 7, Calendar::gregorian(), 1)?;
    let got = ym.with(&Fields::new().era("bce"), Disambiguation::Reject)?;
    assert_eq!(got.iso_fields().year(), -2020);
    assert_eq!(got.year(), 2021);

    let err = ym.with(&Fields::new().era("meiji"), Disambiguation::Reject).unwrap_err();
    assert!(err.is_invalid_field_set());
    Ok(())
}

#[test]
fn with_day() -> Result {
    let ym = YearMonth::new(2024, 2)?;
    assert_eq!(ym.with_day(29)?, Date::new(2024, 2, 29)?);
    let err = ym.with_day(30).unwrap_err();
    assert!(err.is_range());
    insta::assert_snapshot!(
        err,
        @"failed to build date from year-month and day: parameter 'day' with value 30 is not in the required range of 1..=29",
    );
    Ok(())
}
