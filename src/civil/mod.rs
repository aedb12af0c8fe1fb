/*!
Calendar values without a time or time zone.

The main type in this module is [`YearMonth`], a year and month attached to
a [`Calendar`](crate::calendar::Calendar). A minimal [`Date`] exists
alongside it because calendars do their arithmetic in terms of whole dates.

Both are built on top of an [`IsoDate`], the ISO 8601 year, month and day
that every calendar value is stored as.
*/

pub use self::{
    date::Date,
    iso::IsoDate,
    year_month::{
        YearMonth, YearMonthArithmetic, YearMonthDifference, YearMonthLike,
    },
};

mod date;
pub(crate) mod iso;
mod slots;
mod year_month;
