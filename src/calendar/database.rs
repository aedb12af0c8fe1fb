use alloc::vec::Vec;

use crate::{
    calendar::{Calendar, CalendarProtocol, GREGORIAN, ISO},
    error::{calendar::Error as E, Error},
};

/// A collection of calendars that can be looked up by identifier.
///
/// This is how calendar annotations like `[u-ca=gregory]` are resolved when
/// parsing. Every database knows about the built-in `iso8601` and `gregory`
/// calendars. Custom calendars can be registered with
/// [`CalendarDatabase::add`].
///
/// # Example
///
/// ```
/// use jiff_calendar::calendar::{Calendar, CalendarDatabase};
///
/// let db = CalendarDatabase::new();
/// assert_eq!(db.get("gregory")?, Calendar::gregorian());
/// assert!(db.get("hebrew").unwrap_err().is_invalid_calendar());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalendarDatabase {
    custom: Vec<Calendar>,
}

static BUILTIN: CalendarDatabase = CalendarDatabase::new();

impl CalendarDatabase {
    /// Creates a new database with only the built-in calendars.
    pub const fn new() -> CalendarDatabase {
        CalendarDatabase { custom: Vec::new() }
    }

    /// Returns a shared database with only the built-in calendars.
    pub(crate) fn builtin() -> &'static CalendarDatabase {
        &BUILTIN
    }

    /// Registers a calendar in this database.
    ///
    /// # Errors
    ///
    /// This returns an error when a calendar with the same identifier is
    /// already known to this database, including the built-in ones.
    pub fn add(&mut self, calendar: Calendar) -> Result<(), Error> {
        if self.find(calendar.id()).is_some() {
            return Err(Error::from(E::DuplicateIdentifier {
                id: calendar.id().into(),
            }));
        }
        debug!("registered calendar `{}`", calendar.id());
        self.custom.push(calendar);
        Ok(())
    }

    /// Returns the calendar with the given identifier.
    ///
    /// Identifiers are matched exactly.
    ///
    /// # Errors
    ///
    /// This returns an error when no calendar in this database has the
    /// given identifier.
    pub fn get(&self, id: &str) -> Result<Calendar, Error> {
        self.find(id).ok_or_else(|| {
            trace!("calendar lookup for `{id}` failed");
            Error::from(E::UnknownIdentifier { id: id.into() })
        })
    }

    /// Returns an iterator over the identifiers of every calendar in this
    /// database, built-in calendars first.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        [ISO.id(), GREGORIAN.id()]
            .into_iter()
            .chain(self.custom.iter().map(|cal| cal.id()))
    }

    fn find(&self, id: &str) -> Option<Calendar> {
        let builtin = [Calendar::iso(), Calendar::gregorian()];
        builtin
            .into_iter()
            .chain(self.custom.iter().cloned())
            .find(|cal| cal.id() == id)
    }
}
