use crate::{error, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    EmptyInput,
    ExpectedAnnotationClose { byte: Option<u8> },
    ExpectedAnnotationEquals,
    ExpectedCalendarAnnotationKey,
    ExpectedDigit { byte: u8 },
    ExpectedFourDigitYear,
    ExpectedSixDigitYear,
    ExpectedTwoDigitDay,
    ExpectedTwoDigitMonth,
    FailedCalendarLookup,
    FailedDay,
    FailedMonth,
    FailedYear,
    InvalidCalendarName,
    InvalidDate,
    InvalidDay,
    InvalidYearZero,
    TrailingInput { byte: u8 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            EmptyInput => f.write_str(
                "expected a year-month string, but found end of input",
            ),
            ExpectedAnnotationClose { byte: Some(byte) } => write!(
                f,
                "expected `]` to close calendar annotation, \
                 but found {byte:?} instead",
                byte = escape::Byte(byte),
            ),
            ExpectedAnnotationClose { byte: None } => f.write_str(
                "expected `]` to close calendar annotation, \
                 but found end of input",
            ),
            ExpectedAnnotationEquals => f.write_str(
                "expected `=` after `u-ca` in calendar annotation",
            ),
            ExpectedCalendarAnnotationKey => f.write_str(
                "expected annotation to start with `u-ca` \
                 (only calendar annotations are supported)",
            ),
            ExpectedDigit { byte } => write!(
                f,
                "invalid digit, expected 0-9 but got {byte:?}",
                byte = escape::Byte(byte),
            ),
            ExpectedFourDigitYear => f.write_str(
                "expected four digit year (or leading sign for \
                 six digit year), but found end of input",
            ),
            ExpectedSixDigitYear => f.write_str(
                "expected six digit year (because of a leading sign), \
                 but found end of input",
            ),
            ExpectedTwoDigitDay => f.write_str(
                "expected two digit day, but found end of input",
            ),
            ExpectedTwoDigitMonth => f.write_str(
                "expected two digit month, but found end of input",
            ),
            FailedCalendarLookup => {
                f.write_str("failed to find calendar from annotation")
            }
            FailedDay => f.write_str("failed to parse day in year-month"),
            FailedMonth => {
                f.write_str("failed to parse month in year-month")
            }
            FailedYear => f.write_str("failed to parse year in year-month"),
            InvalidCalendarName => {
                f.write_str("invalid calendar name in annotation")
            }
            InvalidDate => f.write_str("parsed reference day is not valid"),
            InvalidDay => f.write_str("parsed day is not valid"),
            InvalidYearZero => f.write_str(
                "year zero must be written without a sign or a \
                 positive sign, but not a negative sign",
            ),
            TrailingInput { byte } => write!(
                f,
                "parsed year-month, but found unexpected trailing \
                 input starting with {byte:?}",
                byte = escape::Byte(byte),
            ),
        }
    }
}
