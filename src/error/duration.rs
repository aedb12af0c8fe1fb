use crate::{error, unit::Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    MixedSigns,
    OverflowBalanced { unit: Unit },
    OverflowCalendarUnits,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
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
            MixedSigns => f.write_str(
                "duration has units with mixed signs \
                 (all non-zero units must be positive or all negative)",
            ),
            OverflowBalanced { unit } => write!(
                f,
                "balancing duration overflowed the limits of {unit}",
                unit = unit.plural(),
            ),
            OverflowCalendarUnits => f.write_str(
                "adding years, months or weeks overflowed \
                 the limits of a date",
            ),
        }
    }
}
