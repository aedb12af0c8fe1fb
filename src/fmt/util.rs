/// A simple formatter for converting `i64` values to ASCII byte strings.
///
/// This avoids going through the formatting machinery, which is a lot of
/// ceremony for zero padded years and months.
///
/// By default, this only includes the sign if it's negative. To always include
/// the sign, set `force_sign` to `true`.
#[derive(Clone, Debug)]
pub(crate) struct DecimalFormatter {
    force_sign: bool,
    minimum_digits: u8,
}

impl DecimalFormatter {
    /// Creates a new decimal formatter using the default configuration.
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { force_sign: false, minimum_digits: 1 }
    }

    /// Forces the sign to be rendered, even if it's positive. Zero is
    /// rendered with a positive sign.
    pub(crate) const fn force_sign(self, yes: bool) -> DecimalFormatter {
        DecimalFormatter { force_sign: yes, ..self }
    }

    /// The minimum number of digits that this number should be formatted with.
    /// If the number would have fewer digits than this, then it is padded out
    /// with zeros until the minimum is reached.
    ///
    /// The minimum number of digits is capped at the maximum number of digits
    /// for an i64 value (which is 19).
    pub(crate) const fn padding(self, mut digits: u8) -> DecimalFormatter {
        if digits > Decimal::MAX_I64_DIGITS {
            digits = Decimal::MAX_I64_DIGITS;
        }
        DecimalFormatter { minimum_digits: digits, ..self }
    }
}

/// A formatted decimal number that can be converted to a sequence of bytes.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_I64_LEN as usize],
    start: u8,
}

impl Decimal {
    /// Discovered via `i64::MIN.to_string().len()`.
    const MAX_I64_LEN: u8 = 20;
    /// Discovered via `i64::MAX.to_string().len()`.
    const MAX_I64_DIGITS: u8 = 19;

    /// Using the given formatter, turn the value given into a decimal
    /// representation using ASCII bytes.
    pub(crate) const fn new(
        formatter: &DecimalFormatter,
        value: i64,
    ) -> Decimal {
        let negative = value < 0;
        let mut value = value.unsigned_abs();
        let mut decimal =
            Decimal { buf: [0; Self::MAX_I64_LEN as usize], start: Self::MAX_I64_LEN };
        loop {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        while decimal.len() < formatter.minimum_digits {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0';
        }
        if negative {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'-';
        } else if formatter.force_sign {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'+';
        }
        decimal
    }

    /// Returns the total number of ASCII bytes (including the sign) that are
    /// used to represent this decimal number.
    const fn len(&self) -> u8 {
        Self::MAX_I64_LEN - self.start
    }

    /// Returns the ASCII representation of this decimal as a string slice.
    pub(crate) fn as_str(&self) -> &str {
        // OK because every byte written to `self.buf` is ASCII.
        core::str::from_utf8(&self.buf[usize::from(self.start)..]).unwrap()
    }
}
