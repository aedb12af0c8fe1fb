use jiff_calendar::{
    calendar::{Calendar, CalendarDatabase, Disambiguation, Fields},
    civil::YearMonth,
    fmt::temporal::YearMonthParser,
};

use crate::Result;

#[test]
fn from_string() -> Result {
    crate::init_logging();

    let ym = YearMonth::from_item("2021-07", Disambiguation::Constrain)?;
    assert_eq!((ym.year(), ym.month()), (2021, 7));
    assert_eq!(ym.to_string(), "2021-07");
    assert!(ym.calendar().is_iso());

    let ym: YearMonth = "202107".parse()?;
    assert_eq!(ym.to_string(), "2021-07");

    Ok(())
}

#[test]
fn from_string_reference_day() -> Result {
    let ym: YearMonth = "2021-07-15".parse()?;
    assert_eq!(ym.iso_fields().day(), 15);
    // A reference day other than the first is kept when printing, so the
    // string parses back to an equal value.
    assert_eq!(ym.to_string(), "2021-07-15");
    assert!(ym.equals(&ym.to_string().parse()?));

    let ym: YearMonth = "2021-07-01".parse()?;
    assert_eq!(ym.to_string(), "2021-07");

    let ym = YearMonth::new_with(2021, 7, Calendar::iso(), 31)?;
    let roundtrip: YearMonth = ym.to_string().parse()?;
    assert!(roundtrip.equals(&ym));
    assert_eq!(roundtrip.iso_fields().day(), 31);

    let ym: YearMonth = "2021-07-15[u-ca=gregory]".parse()?;
    assert_eq!(ym.iso_fields().day(), 15);
    assert_eq!(ym.to_string(), "2021-07-15[u-ca=gregory]");

    let ym: YearMonth = "2021-07[u-ca=gregory]".parse()?;
    assert_eq!(ym.iso_fields().day(), 1);
    assert_eq!(ym.to_string(), "2021-07-01[u-ca=gregory]");

    Ok(())
}

#[test]
fn from_string_invalid() {
    let invalid = [
        "",
        "2021",
        "2021-7",
        "21-07",
        "-0001-01",
        "-000000-01",
        "2021-02-29",
        "2021-07-32",
        "2021-07-00",
        "2021-0701",
        "2021-07 ",
        "2021-07[u-ca=gregory",
        "2021-07[U-CA=iso8601]",
        "2021-07[foo=bar]",
        "2021-07[UTC]",
        "\u{2212}000001-01",
    ];
    for string in invalid {
        let result = YearMonth::from_item(string, Disambiguation::Constrain);
        let err = result.expect_err(string);
        assert!(err.is_parse(), "{string:?} should be a parse error: {err}");
    }
}

#[test]
fn from_string_out_of_range_month() -> Result {
    let ym = YearMonth::from_item("2021-13", Disambiguation::Constrain)?;
    assert_eq!(ym.to_string(), "2021-12");
    let ym = YearMonth::from_item("2021-00", Disambiguation::Constrain)?;
    assert_eq!(ym.to_string(), "2021-01");
    let ym = YearMonth::from_item(
        "2021-14-31[u-ca=gregory]",
        Disambiguation::Constrain,
    )?;
    assert_eq!(ym.to_string(), "2021-12-31[u-ca=gregory]");

    let err =
        YearMonth::from_item("2021-13", Disambiguation::Reject).unwrap_err();
    assert!(err.is_range());
    assert!(!err.is_parse());
    insta::assert_snapshot!(
        err,
        @"parameter 'month' with value 13 is not in the required range of 1..=12",
    );

    // Parsing through `FromStr` never clamps.
    let err = "2021-13".parse::<YearMonth>().unwrap_err();
    assert!(err.is_range());
    let err = "+275760-10".parse::<YearMonth>().unwrap_err();
    assert!(err.is_range());

    Ok(())
}

#[test]
fn from_string_unknown_calendar() {
    let err = "2021-07-01[u-ca=hebrew]".parse::<YearMonth>().unwrap_err();
    assert!(err.is_invalid_calendar());
    assert!(err.is_parse());
    insta::assert_snapshot!(
        err,
        @"failed to find calendar from annotation: unknown calendar identifier `hebrew`",
    );
}

#[test]
fn from_string_out_of_range() -> Result {
    let ym = YearMonth::from_item("-271821-03", Disambiguation::Constrain)?;
    assert_eq!(ym.to_string(), "-271821-04");
    let ym = YearMonth::from_item("+275760-10", Disambiguation::Constrain)?;
    assert_eq!(ym.to_string(), "+275760-09");
    let ym = YearMonth::from_item("+999999-12", Disambiguation::Constrain)?;
    assert_eq!(ym.to_string(), "+275760-09");

    let err = YearMonth::from_item("-271821-03", Disambiguation::Reject)
        .unwrap_err();
    assert!(err.is_range());
    assert!(!err.is_parse());

    // Clamping may land in a shorter month, so the reference day follows.
    let ym = YearMonth::from_item(
        "+275760-10-31[u-ca=gregory]",
        Disambiguation::Constrain,
    )?;
    assert_eq!(ym.to_string(), "+275760-09-30[u-ca=gregory]");

    Ok(())
}

#[test]
fn from_fields() -> Result {
    let fields = Fields::new().year(2021).month(7);
    let ym = YearMonth::from_item(&fields, Disambiguation::Reject)?;
    assert!(ym.equals(&YearMonth::new(2021, 7)?));

    let fields = Fields::new()
        .era("bc")
        .year(1)
        .month(12)
        .calendar(Calendar::gregorian());
    let ym = YearMonth::from_item(&fields, Disambiguation::Reject)?;
    assert_eq!(ym.to_string(), "0000-12-01[u-ca=gregory]");
    assert_eq!(ym.era().as_deref(), Some("bce"));

    let err = YearMonth::from_item(&Fields::new().year(2021), Disambiguation::Reject)
        .unwrap_err();
    assert!(err.is_invalid_field_set());
    insta::assert_snapshot!(
        err,
        @"failed to build year-month from fields: required field `month` is missing",
    );

    let fields = Fields::new().year(275760).month(10);
    let ym = YearMonth::from_item(&fields, Disambiguation::Constrain)?;
    assert_eq!(ym.to_string(), "+275760-09");
    let err = YearMonth::from_item(&fields, Disambiguation::Reject).unwrap_err();
    assert!(err.is_range());

    Ok(())
}

#[test]
fn from_year_month_copies() -> Result {
    let original = YearMonth::new_with(2021, 7, Calendar::gregorian(), 15)?;
    let copy = YearMonth::from_item(&original, Disambiguation::Reject)?;
    assert!(copy.equals(&original));
    assert_eq!(copy.iso_fields().day(), 15);
    Ok(())
}

#[test]
fn parser_with_custom_database() -> Result {
    let mut db = CalendarDatabase::new();
    db.add(crate::calendar::shifted())?;

    let parser = YearMonthParser::new();
    let ym = parser.parse_year_month_with(&db, "2021-07-01[u-ca=shifted]")?;
    assert_eq!(ym.calendar().id(), "shifted");
    assert_eq!(ym.year(), 2022);
    assert_eq!(ym.to_string(), "2021-07-01[u-ca=shifted]");

    let err = parser.parse_year_month("2021-07-01[u-ca=shifted]").unwrap_err();
    assert!(err.is_invalid_calendar());

    Ok(())
}
