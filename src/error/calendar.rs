use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DaysInMonthNotPositive { id: Box<str>, days: i8 },
    DuplicateIdentifier { id: Box<str> },
    EmptyIdentifier,
    InvalidIdentifier { id: Box<str> },
    UnknownIdentifier { id: Box<str> },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Calendar(err).into()
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
            DaysInMonthNotPositive { ref id, days } => write!(
                f,
                "calendar `{id}` reported {days} days in month, \
                 but every month must have at least one day",
            ),
            DuplicateIdentifier { ref id } => write!(
                f,
                "a calendar with identifier `{id}` is already registered",
            ),
            EmptyIdentifier => {
                f.write_str("calendar identifier must be non-empty")
            }
            InvalidIdentifier { ref id } => write!(
                f,
                "calendar identifier `{id}` is invalid \
                 (identifiers must be one or more ASCII alphanumeric \
                  segments of 3 to 8 bytes separated by `-`)",
            ),
            UnknownIdentifier { ref id } => {
                write!(f, "unknown calendar identifier `{id}`")
            }
        }
    }
}
