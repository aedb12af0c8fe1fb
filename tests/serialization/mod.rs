#![cfg(feature = "serde")]

use jiff_calendar::{calendar::Calendar, civil::YearMonth};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
struct Billing {
    period: YearMonth,
}

#[test]
fn json_roundtrip() -> crate::Result {
    let billing = Billing {
        period: YearMonth::new_with(2021, 7, Calendar::gregorian(), 1)?,
    };
    let json = serde_json::to_string(&billing).unwrap();
    assert_eq!(json, r#"{"period":"2021-07-01[u-ca=gregory]"}"#);

    let got: Billing = serde_json::from_str(&json).unwrap();
    assert!(got.period.equals(&billing.period));
    Ok(())
}

#[test]
fn json_invalid() {
    let err = serde_json::from_str::<Billing>(r#"{"period":"2021-13"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("parameter 'month' with value 13"));

    let err = serde_json::from_str::<Billing>(r#"{"period":"2021-7"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("failed to parse month in year-month"));
}
