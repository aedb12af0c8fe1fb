use crate::error::{fmt::Error as E, Error};

/// Parses an `i64` number from the beginning to the end of the given slice
/// of ASCII digit characters.
///
/// If any byte in the given slice is not `[0-9]`, then this returns an
/// error. Similarly, if the number parsed does not fit into an `i64`, then
/// this returns an error. Callers only ever hand this a handful of digits,
/// so overflow is reported as a range error.
#[inline(always)]
pub(crate) fn i64(bytes: &[u8]) -> Result<i64, Error> {
    let mut n: i64 = 0;
    for &byte in bytes {
        let digit = match byte.checked_sub(b'0') {
            Some(digit) if digit <= 9 => digit,
            _ => return Err(Error::from(E::ExpectedDigit { byte })),
        };
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(i64::from(digit)))
            .ok_or_else(|| Error::range("digits", i128::MAX, 0, i64::MAX))?;
    }
    Ok(n)
}

/// Splits the given input into two slices at the given position.
///
/// If the position is greater than the length of the slice given, then this
/// returns `None`.
#[inline(always)]
pub(crate) fn split(input: &[u8], at: usize) -> Option<(&[u8], &[u8])> {
    if at > input.len() {
        None
    } else {
        Some(input.split_at(at))
    }
}

/// Returns true if and only if the first byte of `input` is an ASCII digit.
#[inline(always)]
pub(crate) fn starts_with_digit(input: &[u8]) -> bool {
    input.first().map_or(false, |b| b.is_ascii_digit())
}
