use crate::{
    calendar::{self, CalendarDatabase, Disambiguation},
    civil::{iso, YearMonth},
    error::{fmt::Error as E, Error, ErrorContext},
    fmt::Parsed,
    util::parse,
};

/// The components of a year-month parsed from a string.
///
/// Nothing here has been regulated or resolved against a calendar database
/// yet. The month may be any two digit number. When it is in `1..=12`, the
/// year, month and day (when present) are known to form a valid ISO date.
#[derive(Debug)]
pub(super) struct ParsedYearMonth<'i> {
    year: i32,
    month: i8,
    day: Option<i8>,
    calendar: Option<&'i str>,
}

impl<'i> ParsedYearMonth<'i> {
    /// Turns the parsed components into a year-month.
    ///
    /// The month and then the year-month are regulated according to
    /// `disambiguation`. The calendar annotation (if any) is looked up in
    /// `db` and the reference day defaults to `1`.
    pub(super) fn to_year_month(
        &self,
        db: &CalendarDatabase,
        disambiguation: Disambiguation,
    ) -> Result<YearMonth, Error> {
        let month = iso::regulate_month(self.month, disambiguation)?;
        let (year, month) =
            iso::regulate_year_month_range(self.year, month, disambiguation)?;
        let calendar = match self.calendar {
            None => calendar::Calendar::iso(),
            Some(id) => db.get(id).context(E::FailedCalendarLookup)?,
        };
        // The day was valid in the parsed month (if that month existed), but
        // clamping may have moved us to a different month.
        let day = self.day.unwrap_or(1).min(iso::days_in_month(year, month));
        if (year, month) != (self.year, self.month) {
            debug!(
                "clamped parsed year-month {parsed_year}-{parsed_month} \
                 to {year}-{month}",
                parsed_year = self.year,
                parsed_month = self.month,
            );
        }
        YearMonth::new_with(year, month, calendar, day)
    }
}

/// A parser for the year-month grammar.
///
/// This only recognizes the syntax. See [`ParsedYearMonth::to_year_month`]
/// for turning the result into a value.
#[derive(Debug)]
pub(super) struct YearMonthParser {
    _priv: (),
}

impl YearMonthParser {
    pub(super) const fn new() -> YearMonthParser {
        YearMonthParser { _priv: () }
    }

    // DateSpecYearMonth :::
    //   DateYear -? DateMonth
    //
    // AnnotatedYearMonth :::
    //   DateSpecYearMonth Annotation?
    //   DateSpec Annotation?
    //
    // DateSpec :::
    //   DateYear - DateMonth - DateDay
    //   DateYear DateMonth DateDay
    //
    // The separator used between the year and month determines whether a
    // separator is expected between the month and day.
    pub(super) fn parse_year_month<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, ParsedYearMonth<'i>>, Error> {
        if input.is_empty() {
            return Err(Error::from(E::EmptyInput));
        }

        let Parsed { value: year, input } =
            self.parse_year(input).context(E::FailedYear)?;
        let extended = input.starts_with(b"-");
        let input = if extended { &input[1..] } else { input };
        let Parsed { value: month, input } =
            self.parse_month(input).context(E::FailedMonth)?;

        let Parsed { value: day, input } =
            self.parse_optional_day(input, extended)?;
        // An out of range month is regulated later, so its day can only be
        // checked against the month it ends up in.
        if let (Some(day), true) = (day, (1..=12).contains(&month)) {
            if day > iso::days_in_month(year, month) {
                let max = iso::days_in_month(year, month);
                return Err(Error::range("day", day, 1, max))
                    .context(E::InvalidDate);
            }
        }

        let Parsed { value: calendar, input } =
            self.parse_annotation(input)?;
        if let Some(&byte) = input.first() {
            return Err(Error::from(E::TrailingInput { byte }));
        }
        let value = ParsedYearMonth { year, month, day, calendar };
        Ok(Parsed { value, input })
    }

    // DateYear :::
    //   DecimalDigit DecimalDigit DecimalDigit DecimalDigit
    //   TemporalSign DecimalDigit DecimalDigit DecimalDigit DecimalDigit DecimalDigit DecimalDigit
    //
    // NOTE: A negative year always needs the six digit form. `-0001` is not
    // a year.
    fn parse_year<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, i32>, Error> {
        let Parsed { value: negative, input } = self.parse_year_sign(input);
        if let Some(negative) = negative {
            return self.parse_signed_year(input, negative);
        }

        let (year, input) =
            parse::split(input, 4).ok_or(E::ExpectedFourDigitYear)?;
        let year = parse::i64(year)?;
        // OK because four digits always fit.
        let year = i32::try_from(year).unwrap();
        Ok(Parsed { value: year, input })
    }

    #[cold]
    #[inline(never)]
    fn parse_signed_year<'i>(
        &self,
        input: &'i [u8],
        negative: bool,
    ) -> Result<Parsed<'i, i32>, Error> {
        let (year, input) =
            parse::split(input, 6).ok_or(E::ExpectedSixDigitYear)?;
        let year = parse::i64(year)?;
        // OK because six digits always fit.
        let year = i32::try_from(year).unwrap();
        if year == 0 && negative {
            return Err(Error::from(E::InvalidYearZero));
        }
        let year = if negative { -year } else { year };
        Ok(Parsed { value: year, input })
    }

    // DateMonth :::
    //   DecimalDigit DecimalDigit
    //
    // NOTE: This is looser than ISO 8601, which only permits `01..=12`.
    // Months outside that range are regulated according to the caller's
    // disambiguation, the same as a month given as a field.
    fn parse_month<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, i8>, Error> {
        let (month, input) =
            parse::split(input, 2).ok_or(E::ExpectedTwoDigitMonth)?;
        let month = parse::i64(month)?;
        // OK because two digits always fit.
        let month = i8::try_from(month).unwrap();
        Ok(Parsed { value: month, input })
    }

    /// Parses the reference day, if present.
    ///
    /// In extended mode, a day is present only when a `-` follows the month.
    /// In basic mode, a day is present only when a digit follows the month.
    fn parse_optional_day<'i>(
        &self,
        input: &'i [u8],
        extended: bool,
    ) -> Result<Parsed<'i, Option<i8>>, Error> {
        let input = if extended {
            match input.strip_prefix(b"-") {
                None => return Ok(Parsed { value: None, input }),
                Some(input) => input,
            }
        } else if parse::starts_with_digit(input) {
            input
        } else {
            return Ok(Parsed { value: None, input });
        };
        let Parsed { value: day, input } =
            self.parse_day(input).context(E::FailedDay)?;
        Ok(Parsed { value: Some(day), input })
    }

    // DateDay :::
    //   0 NonZeroDigit
    //   1 DecimalDigit
    //   2 DecimalDigit
    //   30
    //   31
    fn parse_day<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, i8>, Error> {
        let (day, input) =
            parse::split(input, 2).ok_or(E::ExpectedTwoDigitDay)?;
        let day = parse::i64(day)?;
        if !(1..=31).contains(&day) {
            return Err(Error::range("day", day, 1, 31))
                .context(E::InvalidDay);
        }
        // OK because the range check above guarantees it fits.
        let day = i8::try_from(day).unwrap();
        Ok(Parsed { value: day, input })
    }

    // Annotation :::
    //   [ AnnotationCriticalFlag? u-ca = CalendarName ]
    //
    // CalendarName :::
    //   AnnotationValueComponent
    //   AnnotationValueComponent - CalendarName
    //
    // NOTE: Only calendar annotations are recognized. Time zone and other
    // annotations are an error, since a year-month has no use for them.
    fn parse_annotation<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, Option<&'i str>>, Error> {
        let Some(input) = input.strip_prefix(b"[") else {
            return Ok(Parsed { value: None, input });
        };
        let input = input.strip_prefix(b"!").unwrap_or(input);
        let input = input
            .strip_prefix(b"u-ca")
            .ok_or(E::ExpectedCalendarAnnotationKey)?;
        let input =
            input.strip_prefix(b"=").ok_or(E::ExpectedAnnotationEquals)?;

        let end = input.iter().position(|&b| b == b']');
        let Some(end) = end else {
            let byte = input.iter().copied().find(|b| !is_name_byte(*b));
            return Err(Error::from(E::ExpectedAnnotationClose { byte }));
        };
        let (name, input) = (&input[..end], &input[end + 1..]);
        if let Some(&byte) = name.iter().find(|&&b| !is_name_byte(b)) {
            return Err(Error::from(E::ExpectedAnnotationClose {
                byte: Some(byte),
            }));
        }
        // OK because every byte in `name` is ASCII.
        let name = core::str::from_utf8(name).unwrap();
        calendar::validate_identifier(name)
            .context(E::InvalidCalendarName)?;
        Ok(Parsed { value: Some(name), input })
    }

    // TemporalSign :::
    //   ASCIISign
    //   <MINUS>
    //
    // NOTE: We specifically only support ASCII signs. Returns `Some(true)`
    // for `-`, `Some(false)` for `+` and `None` when there is no sign.
    fn parse_year_sign<'i>(&self, input: &'i [u8]) -> Parsed<'i, Option<bool>> {
        let Some((&sign, tail)) = input.split_first() else {
            return Parsed { value: None, input };
        };
        let negative = match sign {
            b'+' => false,
            b'-' => true,
            _ => return Parsed { value: None, input },
        };
        Parsed { value: Some(negative), input: tail }
    }
}

/// Returns true when the byte may appear in a calendar name.
fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

impl core::fmt::Display for ParsedYearMonth<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)?;
        if let Some(day) = self.day {
            write!(f, "-{day:02}")?;
        }
        if let Some(id) = self.calendar {
            write!(f, "[u-ca={id}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn parse(input: &str) -> Result<ParsedYearMonth<'_>, Error> {
        YearMonthParser::new()
            .parse_year_month(input.as_bytes())
            .map(|parsed| parsed.value)
    }

    fn err(input: &str) -> alloc::string::String {
        parse(input).unwrap_err().to_string()
    }

    #[test]
    fn ok_basic_and_extended() {
        let p = parse("2021-07").unwrap();
        assert_eq!((p.year, p.month, p.day, p.calendar), (2021, 7, None, None));
        let p = parse("202107").unwrap();
        assert_eq!((p.year, p.month, p.day), (2021, 7, None));
        let p = parse("2021-07-15").unwrap();
        assert_eq!(p.day, Some(15));
        let p = parse("20210715").unwrap();
        assert_eq!(p.day, Some(15));
        let p = parse("-000001-12").unwrap();
        assert_eq!((p.year, p.month), (-1, 12));
        let p = parse("+275760-09").unwrap();
        assert_eq!(p.year, 275760);
        let p = parse("+000000-01").unwrap();
        assert_eq!(p.year, 0);
    }

    #[test]
    fn ok_annotation() {
        let p = parse("2021-07-01[u-ca=gregory]").unwrap();
        assert_eq!(p.calendar, Some("gregory"));
        let p = parse("2021-07[!u-ca=iso8601]").unwrap();
        assert_eq!(p.calendar, Some("iso8601"));
        assert_eq!(p.to_string(), "2021-07[u-ca=iso8601]");
    }

    #[test]
    fn err_year() {
        insta::assert_snapshot!(
            err(""),
            @"expected a year-month string, but found end of input",
        );
        insta::assert_snapshot!(
            err("202"),
            @"failed to parse year in year-month: expected four digit year (or leading sign for six digit year), but found end of input",
        );
        insta::assert_snapshot!(
            err("-0001-01"),
            @r###"failed to parse year in year-month: invalid digit, expected 0-9 but got "-""###,
        );
        insta::assert_snapshot!(
            err("-000000-01"),
            @"failed to parse year in year-month: year zero must be written without a sign or a positive sign, but not a negative sign",
        );
        insta::assert_snapshot!(
            err("\u{2212}000001-01"),
            @r###"failed to parse year in year-month: invalid digit, expected 0-9 but got "\xE2""###,
        );
    }

    #[test]
    fn err_month_and_day() {
        insta::assert_snapshot!(
            err("2021-7"),
            @"failed to parse month in year-month: expected two digit month, but found end of input",
        );
        insta::assert_snapshot!(
            err("2021-07-32"),
            @"failed to parse day in year-month: parsed day is not valid: parameter 'day' with value 32 is not in the required range of 1..=31",
        );
        insta::assert_snapshot!(
            err("2021-02-29"),
            @"parsed reference day is not valid: parameter 'day' with value 29 is not in the required range of 1..=28",
        );
    }

    #[test]
    fn out_of_range_month_is_left_for_regulation() {
        let p = parse("2021-13").unwrap();
        assert_eq!((p.year, p.month, p.day), (2021, 13, None));
        let p = parse("2021-00-31").unwrap();
        assert_eq!((p.month, p.day), (0, Some(31)));
        let p = parse("202199").unwrap();
        assert_eq!(p.month, 99);

        let db = CalendarDatabase::builtin();
        let ym = parse("2021-13-31")
            .unwrap()
            .to_year_month(db, Disambiguation::Constrain)
            .unwrap();
        assert_eq!((ym.year(), ym.month()), (2021, 12));
        assert_eq!(ym.iso_fields().day(), 31);
        let ym = parse("2021-00")
            .unwrap()
            .to_year_month(db, Disambiguation::Constrain)
            .unwrap();
        assert_eq!((ym.year(), ym.month()), (2021, 1));

        let err = parse("2021-13")
            .unwrap()
            .to_year_month(db, Disambiguation::Reject)
            .unwrap_err();
        assert!(err.is_range());
        insta::assert_snapshot!(
            err,
            @"parameter 'month' with value 13 is not in the required range of 1..=12",
        );
    }

    #[test]
    fn err_trailing_and_annotation() {
        insta::assert_snapshot!(
            err("2021-07x"),
            @r###"parsed year-month, but found unexpected trailing input starting with "x""###,
        );
        insta::assert_snapshot!(
            err("2021-07-01T00:00"),
            @r###"parsed year-month, but found unexpected trailing input starting with "T""###,
        );
        insta::assert_snapshot!(
            err("2021-07[America/New_York]"),
            @"expected annotation to start with `u-ca` (only calendar annotations are supported)",
        );
        insta::assert_snapshot!(
            err("2021-07[u-ca:gregory]"),
            @"expected `=` after `u-ca` in calendar annotation",
        );
        insta::assert_snapshot!(
            err("2021-07[u-ca=gregory"),
            @"expected `]` to close calendar annotation, but found end of input",
        );
        insta::assert_snapshot!(
            err("2021-07[u-ca=greg ory]"),
            @r###"expected `]` to close calendar annotation, but found " " instead"###,
        );
        insta::assert_snapshot!(
            err("2021-07[u-ca=ab]"),
            @"invalid calendar name in annotation: calendar identifier `ab` is invalid (identifiers must be one or more ASCII alphanumeric segments of 3 to 8 bytes separated by `-`)",
        );
        insta::assert_snapshot!(
            err("2021-07[u-ca=]"),
            @"invalid calendar name in annotation: calendar identifier must be non-empty",
        );
    }
}
