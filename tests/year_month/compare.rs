use std::cmp::Ordering;

use jiff_calendar::{calendar::Calendar, civil::YearMonth};

use crate::Result;

#[test]
fn compare_orders_by_iso_fields() -> Result {
    let a: YearMonth = "2021-07".parse()?;
    let b: YearMonth = "2021-08".parse()?;
    assert_eq!(a.compare(&b), Ordering::Less);
    assert_eq!(b.compare(&a), Ordering::Greater);
    assert_eq!(a.compare(&a.clone()), Ordering::Equal);

    let c: YearMonth = "-000001-12".parse()?;
    assert_eq!(c.compare(&a), Ordering::Less);

    Ok(())
}

#[test]
fn compare_breaks_ties_with_reference_day_then_calendar() -> Result {
    let iso = YearMonth::new_with(2021, 7, Calendar::iso(), 1)?;
    let iso15 = YearMonth::new_with(2021, 7, Calendar::iso(), 15)?;
    let gregory = YearMonth::new_with(2021, 7, Calendar::gregorian(), 1)?;

    assert_eq!(iso.compare(&iso15), Ordering::Less);
    assert_eq!(gregory.compare(&iso), Ordering::Less);
    assert_eq!(iso15.compare(&gregory), Ordering::Greater);
    Ok(())
}

#[test]
fn equals() -> Result {
    let a = YearMonth::new(2021, 7)?;
    assert!(a.equals(&YearMonth::new(2021, 7)?));
    assert!(a.equals(&"2021-07-01".parse()?));
    assert!(!a.equals(&"2021-07-02".parse()?));
    assert!(!a.equals(&YearMonth::new_with(2021, 7, Calendar::gregorian(), 1)?));
    Ok(())
}

#[test]
fn sort() -> Result {
    let mut yms: Vec<YearMonth> = ["2021-08", "+010000-01", "2020-12", "-000001-01"]
        .into_iter()
        .map(|s| s.parse())
        .collect::<std::result::Result<_, _>>()?;
    yms.sort_by(YearMonth::compare);
    let sorted: Vec<String> = yms.iter().map(|ym| ym.to_string()).collect();
    assert_eq!(sorted, ["-000001-01", "2020-12", "2021-08", "+010000-01"]);
    Ok(())
}
