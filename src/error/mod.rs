use alloc::{boxed::Box, sync::Arc};

pub(crate) mod calendar;
pub(crate) mod civil;
pub(crate) mod duration;
pub(crate) mod fmt;

/// An error that can occur in this crate.
///
/// Every fallible operation in this crate returns this one error type.
/// The broad categories of failure are:
///
/// * A value is out of range. For example, a month of `13`, or a year-month
/// outside of `-271821-04..=275760-09`.
/// * A calendar is invalid or unknown. For example, parsing
/// `2024-03-15[u-ca=hebrew]` without a calendar database that knows about
/// `hebrew`.
/// * A partial field record is malformed. For example, passing a calendar
/// to [`YearMonth::with`](crate::civil::YearMonth::with).
/// * A calendar implementation broke its contract. For example, a calendar
/// that returns a year-month attached to some other calendar.
/// * Parse errors.
///
/// # Introspection is limited
///
/// Other than the `Debug` and `Display` traits (and `std::error::Error`
/// when the `std` feature is enabled), only a handful of predicates like
/// [`Error::is_range`] are provided. Most predicates look at the *root*
/// cause of an error, which is the error closest to where something went
/// wrong.
///
/// # Design
///
/// There is only one error type, which keeps composition simple. It is
/// one word in size and cheap to clone.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheaply cloneable and to keep
    /// its size equal to one word.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// This is primarily meant for implementations of
    /// [`CalendarProtocol`](crate::calendar::CalendarProtocol) that need to
    /// report a failure that isn't covered by this crate's own errors.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::Error;
    ///
    /// let err = Error::from_args(format_args!("lunar tables missing"));
    /// assert_eq!(err.to_string(), "lunar tables missing");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated from a value being out of
    /// its allowed range.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::civil::YearMonth;
    ///
    /// assert!(YearMonth::new(2025, 13).unwrap_err().is_range());
    /// assert!(YearMonth::new(275760, 10).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::ErrorKind::*;
        matches!(
            *self.root().kind(),
            Range(_)
                | Duration(_)
                | Civil(self::civil::Error::LargestUnitNotAllowed { .. })
        )
    }

    /// Returns true when this error originated from an invalid or unknown
    /// calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::civil::YearMonth;
    ///
    /// let err = "2024-03-15[u-ca=hebrew]".parse::<YearMonth>().unwrap_err();
    /// assert!(err.is_invalid_calendar());
    /// ```
    pub fn is_invalid_calendar(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Calendar(_))
    }

    /// Returns true when this error originated from a partial field record
    /// that contained a disallowed field or lacked a required one.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::{
    ///     calendar::{Calendar, Disambiguation, Fields},
    ///     civil::YearMonth,
    /// };
    ///
    /// let ym = YearMonth::new(2021, 7)?;
    /// let fields = Fields::new().calendar(Calendar::gregorian());
    /// let err = ym.with(&fields, Disambiguation::Reject).unwrap_err();
    /// assert!(err.is_invalid_field_set());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_invalid_field_set(&self) -> bool {
        use self::civil::Error::*;

        matches!(
            *self.root().kind(),
            ErrorKind::Civil(
                CalendarInPartialFields
                    | EmptyPartialFields
                    | MissingField { .. }
                    | UnknownEra { .. }
            )
        )
    }

    /// Returns true when this error originated from a calendar
    /// implementation returning a value that violates its contract.
    ///
    /// This always indicates a bug in a calendar implementation.
    pub fn is_invalid_result(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Civil(self::civil::Error::InvalidResult { .. })
        )
    }

    /// Returns true when this error originated from an attempt to produce a
    /// value that was not fully initialized by its constructor.
    ///
    /// This always indicates a bug.
    pub fn is_invalid_receiver(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Civil(self::civil::Error::IncompleteValue { .. })
        )
    }

    /// Returns true when this error occurred while parsing the textual
    /// format.
    ///
    /// Unlike the other predicates, this looks at the entire chain of
    /// errors and not just the root cause. So for example, parsing
    /// `2021-02-30` returns an error for which both `is_parse` and
    /// `is_range` return true.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_calendar::civil::YearMonth;
    ///
    /// assert!("2021-7".parse::<YearMonth>().unwrap_err().is_parse());
    /// assert!("2021-02-30".parse::<YearMonth>().unwrap_err().is_parse());
    /// // A month of `13` is syntactically fine but out of range.
    /// let err = "2021-13".parse::<YearMonth>().unwrap_err();
    /// assert!(err.is_range() && !err.is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        self.chain().any(|err| matches!(*err.kind(), ErrorKind::Fmt(_)))
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "month")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        // OK because we just created this error (or were given a fresh one)
        // and so the `Arc` has exactly one reference.
        let inner = err.inner.as_mut().and_then(Arc::get_mut);
        match inner {
            Some(inner) => {
                assert!(
                    inner.cause.is_none(),
                    "cause of consequence must be `None`"
                );
                inner.cause = Some(self);
                err
            }
            // A shared consequent can't be given a cause, so the root
            // cause wins since that's what the predicates look at.
            None => self,
        }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        // OK because `Error::chain` is guaranteed to return a non-empty
        // iterator.
        self.chain().last().unwrap()
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            return core::fmt::Display::fmt(self, f);
        }
        let Some(ref inner) = self.inner else {
            return f.debug_struct("Error").field("kind", &"None").finish();
        };
        f.debug_struct("Error")
            .field("kind", &inner.kind)
            .field("cause", &inner.cause)
            .finish()
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Calendar(self::calendar::Error),
    Civil(self::civil::Error),
    Duration(self::duration::Error),
    Fmt(self::fmt::Error),
    Range(RangeError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Calendar(ref err) => err.fmt(f),
            Civil(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown jiff-calendar error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This backs the public `Error::from_args` API, which lets calendar
/// implementations outside this crate manufacture their own errors.
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        AdhocError { message: message.to_string().into_boxed_str() }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError { what, given: given.into(), min: min.into(), max: max.into() }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists to make `ErrorContext::context` work without needing public
/// `From` impls for every internal error enum.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`
/// without calling `map_err` everywhere.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: IntoError,
{
    #[inline(always)]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }
}
