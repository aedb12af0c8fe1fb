/*!
A parser and printer for the [Temporal] year-month format.

The format is an ISO 8601 year and month, like `2021-07`. Years outside of
`0000..=9999` use a sign and six digits, like `-000001-01` or `+012345-01`.
Year-months in a calendar other than ISO 8601 are printed with their
reference day and a calendar annotation, like `2021-07-01[u-ca=gregory]`,
since the year and month alone aren't enough to identify a month in every
calendar. An ISO 8601 year-month is printed with its reference day only when
that day isn't `1`, like `2021-07-15`, so that printing and then parsing
always gives back an equal value.

When parsing, all of the following are accepted:

* `2021-07` and the basic form `202107`.
* `2021-07-15` and `20210715`, which set the reference day.
* An optional calendar annotation, `[u-ca=gregory]`, with an optional
critical flag, `[!u-ca=gregory]`.

The month may be any two digits. A month outside of `01..=12` is regulated
like any other out of range value: it is an error by default and clamped
when parsing with [`Disambiguation::Constrain`]. A reference day must form a
valid ISO date with the (regulated) year and month. Any other trailing input
is an error.

# Example

```
use jiff_calendar::{
    calendar::{Calendar, Disambiguation},
    fmt::temporal::{YearMonthParser, YearMonthPrinter},
};

static PARSER: YearMonthParser =
    YearMonthParser::new().disambiguation(Disambiguation::Constrain);
static PRINTER: YearMonthPrinter = YearMonthPrinter::new();

let ym = PARSER.parse_year_month("2021-07-01[u-ca=gregory]")?;
assert_eq!(ym.calendar(), &Calendar::gregorian());
assert_eq!(PRINTER.year_month_to_string(&ym), "2021-07-01[u-ca=gregory]");

// Out of range values are clamped instead of rejected.
assert_eq!(PARSER.parse_year_month("275760-10")?.to_string(), "+275760-09");
assert_eq!(PARSER.parse_year_month("2021-13")?.to_string(), "2021-12");

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Temporal]: https://tc39.es/proposal-temporal/#sec-temporal-iso8601grammar
*/

use alloc::string::String;

use crate::{
    calendar::{CalendarDatabase, Disambiguation},
    civil::{Date, YearMonth},
    error::Error,
    fmt::{StdFmtWrite, Write},
};

mod parser;
mod printer;

pub(crate) static DEFAULT_PARSER: YearMonthParser = YearMonthParser::new();
pub(crate) static DEFAULT_PRINTER: YearMonthPrinter = YearMonthPrinter::new();

/// A parser for year-months in the Temporal format.
///
/// Parsing happens in two steps. First, the string is checked against the
/// grammar, which rejects things like a one digit month or a reference day
/// that isn't valid in its month. Second, the parsed month is regulated
/// into `1..=12` and the year-month into the supported range of
/// `-271821-04..=275760-09` according to this parser's [`Disambiguation`],
/// and the calendar annotation is resolved.
///
/// # Example
///
/// Custom calendars can be resolved by parsing with a database they are
/// registered in:
///
/// ```
/// use jiff_calendar::{
///     calendar::{Calendar, CalendarDatabase, IsoCalendar},
///     fmt::temporal::YearMonthParser,
/// };
///
/// let parser = YearMonthParser::new();
/// let err = parser.parse_year_month("2021-07-01[u-ca=hebrew]").unwrap_err();
/// assert!(err.is_invalid_calendar());
/// assert!(err.is_parse());
///
/// let db = CalendarDatabase::new();
/// let ym = parser.parse_year_month_with(&db, "2021-07-01[u-ca=gregory]")?;
/// assert_eq!(ym.calendar(), &Calendar::gregorian());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct YearMonthParser {
    disambiguation: Disambiguation,
}

impl YearMonthParser {
    /// Creates a new parser with the default configuration.
    ///
    /// Out of range months and year-months are rejected. This is also the
    /// configuration used by the `FromStr` implementation of [`YearMonth`].
    #[inline]
    pub const fn new() -> YearMonthParser {
        YearMonthParser { disambiguation: Disambiguation::Reject }
    }

    /// Sets how a year-month outside of the supported range is handled.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{
    ///     calendar::Disambiguation,
    ///     fmt::temporal::YearMonthParser,
    /// };
    ///
    /// let parser = YearMonthParser::new();
    /// assert!(parser.parse_year_month("-271821-01").unwrap_err().is_range());
    ///
    /// let parser = parser.disambiguation(Disambiguation::Constrain);
    /// let ym = parser.parse_year_month("-271821-01")?;
    /// assert_eq!(ym.to_string(), "-271821-04");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub const fn disambiguation(
        self,
        disambiguation: Disambiguation,
    ) -> YearMonthParser {
        YearMonthParser { disambiguation }
    }

    /// Parses a year-month, resolving calendar annotations against the
    /// built-in calendars only.
    ///
    /// # Errors
    ///
    /// This returns an error when the input doesn't match the grammar, when
    /// the year-month is out of range and this parser rejects out of range
    /// values, or when the calendar annotation names an unknown calendar.
    pub fn parse_year_month<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<YearMonth, Error> {
        self.parse_year_month_with(CalendarDatabase::builtin(), input)
    }

    /// Parses a year-month, resolving calendar annotations against the
    /// given database.
    pub fn parse_year_month_with<I: AsRef<[u8]>>(
        &self,
        db: &CalendarDatabase,
        input: I,
    ) -> Result<YearMonth, Error> {
        let input = input.as_ref();
        let parsed = parser::YearMonthParser::new().parse_year_month(input)?;
        trace!("parsed year-month components {}", parsed.value);
        parsed.value.to_year_month(db, self.disambiguation)
    }
}

/// A printer for year-months in the Temporal format.
///
/// This is what the `Display` implementation of [`YearMonth`] uses.
///
/// # Example
///
/// ```
/// use jiff_calendar::{civil::YearMonth, fmt::temporal::YearMonthPrinter};
///
/// let printer = YearMonthPrinter::new();
/// let mut buf = String::new();
/// printer.print_year_month(&YearMonth::new(-1, 1)?, &mut buf)?;
/// buf.push(' ');
/// printer.print_year_month(&YearMonth::new(12345, 1)?, &mut buf)?;
/// assert_eq!(buf, "-000001-01 +012345-01");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct YearMonthPrinter {
    _priv: (),
}

impl YearMonthPrinter {
    /// Creates a new printer.
    #[inline]
    pub const fn new() -> YearMonthPrinter {
        YearMonthPrinter { _priv: () }
    }

    /// Prints a year-month to the given writer.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to `wtr` fails.
    pub fn print_year_month<W: Write>(
        &self,
        ym: &YearMonth,
        wtr: W,
    ) -> Result<(), Error> {
        printer::YearMonthPrinter::new().print_year_month(ym, wtr)
    }

    /// Prints a year-month to a new string.
    pub fn year_month_to_string(&self, ym: &YearMonth) -> String {
        let mut buf = String::with_capacity(4);
        // OK because writing to a `String` never fails.
        self.print_year_month(ym, &mut buf).unwrap();
        buf
    }

    pub(crate) fn fmt_year_month(
        &self,
        ym: &YearMonth,
        f: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        self.print_year_month(ym, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }

    pub(crate) fn fmt_date(
        &self,
        date: &Date,
        f: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        printer::YearMonthPrinter::new()
            .print_date(date, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl Default for YearMonthParser {
    fn default() -> YearMonthParser {
        YearMonthParser::new()
    }
}

impl Default for YearMonthPrinter {
    fn default() -> YearMonthPrinter {
        YearMonthPrinter::new()
    }
}
