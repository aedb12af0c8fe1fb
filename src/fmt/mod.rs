/*!
Parsing and printing of year-months.

The only supported format is the one used by [Temporal]: an ISO 8601
year-month, optionally followed by a reference day and a calendar annotation
in the style of [RFC 9557]. For example, `2021-07`, `+012345-01` or
`2021-07-01[u-ca=gregory]`.

The [`Display`](core::fmt::Display) and [`FromStr`](core::str::FromStr)
trait implementations on [`YearMonth`](crate::civil::YearMonth) use the
default configurations of the parser and printer in the [`temporal`]
module. Use those types directly when you need to resolve calendars with a
custom [`CalendarDatabase`](crate::calendar::CalendarDatabase) or want to
reject out of range values instead of clamping them.

[Temporal]: https://tc39.es/proposal-temporal/#sec-temporal-iso8601grammar
[RFC 9557]: https://datatracker.ietf.org/doc/rfc9557/
*/

use alloc::{string::String, vec::Vec};

use crate::error::Error;

use self::util::{Decimal, DecimalFormatter};

pub mod temporal;
mod util;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the remaining input that wasn't
/// consumed.
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remaining unparsed input.
    pub(crate) input: &'i [u8],
}

impl<'i, V: core::fmt::Debug> core::fmt::Debug for Parsed<'i, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Parsed")
            .field("value", &self.value)
            .field("input", &String::from_utf8_lossy(self.input))
            .finish()
    }
}

/// A trait for printing year-months to a sink of UTF-8 text.
///
/// This is implemented for `String`, `Vec<u8>` and `&mut W` for any
/// `W: Write`. Use [`StdFmtWrite`] to print to any `core::fmt::Write`
/// implementation, including a `core::fmt::Formatter`.
pub trait Write {
    /// Write the given string to this writer.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Write the given character to this writer.
    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: Write> Write for &mut W {
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using `core::fmt::Write` implementations with [`Write`].
#[derive(Clone, Debug)]
pub struct StdFmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for StdFmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_str(string).map_err(|_| {
            Error::from_args(format_args!(
                "an error occurred when formatting an argument",
            ))
        })
    }
}

trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this buffer.
    /// The given formatter controls how the decimal is formatted.
    #[inline]
    fn write_int(
        &mut self,
        formatter: &DecimalFormatter,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        self.write_decimal(&Decimal::new(formatter, n.into()))
    }

    /// Write the given decimal number to this buffer.
    #[inline]
    fn write_decimal(&mut self, decimal: &Decimal) -> Result<(), Error> {
        self.write_str(decimal.as_str())
    }
}

impl<W: Write> WriteExt for W {}
