/*!
Locale aware formatting of year-months.

This crate doesn't ship any locale data. Instead,
[`YearMonth::to_locale_string`](crate::civil::YearMonth::to_locale_string)
hands the value to a [`LocaleFormatter`] provided by the caller, which is
free to use whatever localization library it likes.
*/

use alloc::string::String;

use crate::civil::YearMonth;

/// A formatter that renders a year-month for display to humans.
///
/// # Example
///
/// ```
/// use jiff_calendar::{civil::YearMonth, locale::LocaleFormatter};
///
/// struct English;
///
/// impl LocaleFormatter for English {
///     fn format_year_month(&self, ym: &YearMonth) -> String {
///         const MONTHS: [&str; 12] = [
///             "January", "February", "March", "April", "May", "June",
///             "July", "August", "September", "October", "November",
///             "December",
///         ];
///         let month = MONTHS[usize::try_from(ym.month() - 1).unwrap()];
///         format!("{month} {year}", year = ym.year())
///     }
/// }
///
/// let ym = YearMonth::new(2021, 7)?;
/// assert_eq!(ym.to_locale_string(&English), "July 2021");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait LocaleFormatter {
    /// Formats the given year-month.
    fn format_year_month(&self, ym: &YearMonth) -> String;
}
