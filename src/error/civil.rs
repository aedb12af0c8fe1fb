use alloc::boxed::Box;

use crate::{error, unit::Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    CalendarInPartialFields,
    EmptyPartialFields,
    FailedAdd,
    FailedDifference,
    FailedFromFields,
    FailedSubtract,
    FailedWith,
    FailedWithDay,
    IncompleteValue { slot: &'static str },
    InvalidResult { expected: Box<str>, found: Box<str> },
    LargestUnitNotAllowed { unit: Unit },
    MissingField { field: &'static str },
    UnknownEra { era: Box<str> },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
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
            CalendarInPartialFields => f.write_str(
                "the calendar of a year-month cannot be changed \
                 with partial fields",
            ),
            EmptyPartialFields => f.write_str(
                "partial fields must set at least one of \
                 `era`, `year` or `month`",
            ),
            FailedAdd => f.write_str("failed to add duration to year-month"),
            FailedDifference => f.write_str(
                "failed to compute difference between year-months",
            ),
            FailedFromFields => {
                f.write_str("failed to build year-month from fields")
            }
            FailedSubtract => {
                f.write_str("failed to subtract duration from year-month")
            }
            FailedWith => f.write_str("failed to replace year-month fields"),
            FailedWithDay => {
                f.write_str("failed to build date from year-month and day")
            }
            IncompleteValue { slot } => write!(
                f,
                "value was not produced by its constructor \
                 (missing internal `{slot}` field)",
            ),
            InvalidResult { ref expected, ref found } => write!(
                f,
                "calendar `{expected}` returned a value \
                 attached to calendar `{found}`",
            ),
            LargestUnitNotAllowed { unit } => write!(
                f,
                "largest unit for a year-month difference must be \
                 years or months, but found {unit}",
                unit = unit.plural(),
            ),
            MissingField { field } => {
                write!(f, "required field `{field}` is missing")
            }
            UnknownEra { ref era } => {
                write!(f, "era `{era}` is not known to this calendar")
            }
        }
    }
}
