/*!
Calendar aware year-month values for Rust.

The central type of this crate is [`civil::YearMonth`]: a year and a month,
with no day, attached to a [`calendar::Calendar`]. The calendar decides what
the year and month of a value are and how arithmetic works. Two calendars
are built in (ISO 8601 and Gregorian with eras) and custom ones can be
plugged in by implementing [`calendar::CalendarProtocol`].

Year-months are immutable. They support

* Construction from integers, from a record of calendar
[`Fields`](calendar::Fields) or from a string.
* Replacing fields with [`YearMonth::with`](civil::YearMonth::with).
* Adding and subtracting a [`Duration`], which is first balanced so that
units smaller than a day fold into days.
* Computing the [`Duration`] between two year-months, even across
calendars.
* A total order with [`YearMonth::compare`](civil::YearMonth::compare).
* Round tripping through the [Temporal] textual format.

# Example

```
use jiff_calendar::{civil::YearMonth, ToDuration, Unit};

let ym: YearMonth = "2024-02".parse()?;
assert_eq!(ym.days_in_month(), 29);

// Subtraction starts at the end of the month. February 29 minus 29 days
// is January 31.
assert_eq!(ym.minus(29.days())?.to_string(), "2024-01");

// Addition starts at the beginning of the month.
assert_eq!(ym.plus(29.days())?.to_string(), "2024-03");

let later: YearMonth = "2025-07".parse()?;
assert_eq!(ym.difference(&later)?, 1.year().months(5));
assert_eq!(ym.difference((Unit::Month, &later))?, 17.months());

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - Adds an implementation of
`std::error::Error` for [`Error`].
* **logging** - Emits messages via the [`log`] crate. Calendar delegation
is logged at `trace` level, and calendars that return values attached to
some other calendar are logged at `warn` level before the resulting error
is returned.
* **serde** - Implements `Serialize` and `Deserialize` for
[`civil::YearMonth`] via its textual format.

[Temporal]: https://tc39.es/proposal-temporal/
[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors and custom calendars both need the heap, so there is no core-only
// mode.
extern crate alloc;

pub use crate::{
    duration::{Duration, ToDuration},
    error::Error,
    unit::Unit,
};

#[macro_use]
mod logging;

pub mod calendar;
pub mod civil;
mod duration;
mod error;
pub mod fmt;
pub mod locale;
mod unit;
mod util;
