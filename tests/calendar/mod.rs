use std::borrow::Cow;

use jiff_calendar::{
    calendar::{
        Calendar, CalendarDatabase, CalendarProtocol, Construct,
        Disambiguation, Fields, IsoCalendar,
    },
    civil::{Date, IsoDate, YearMonth},
    Duration, Error, ToDuration, Unit,
};

/// A calendar whose years are one ahead of ISO years.
///
/// Everything else is delegated to the ISO calendar, which makes it easy
/// to predict what the engine should do with it.
#[derive(Debug)]
struct Shifted;

impl Shifted {
    fn to_iso_fields(&self, fields: &Fields) -> Result<Fields, Error> {
        let year = fields.require_year()?;
        let mut iso = Fields::new().year(year - 1);
        if let Some(month) = fields.get_month() {
            iso = iso.month(month);
        }
        if let Some(day) = fields.get_day() {
            iso = iso.day(day);
        }
        Ok(iso)
    }
}

impl CalendarProtocol for Shifted {
    fn id(&self) -> &str {
        "shifted"
    }

    fn year(&self, iso: IsoDate) -> i32 {
        iso.year() + 1
    }

    fn month(&self, iso: IsoDate) -> i8 {
        iso.month()
    }

    fn era(&self, _: IsoDate) -> Option<Cow<'static, str>> {
        None
    }

    fn days_in_month(&self, iso: IsoDate) -> i8 {
        iso.days_in_month()
    }

    fn days_in_year(&self, iso: IsoDate) -> i16 {
        iso.days_in_year()
    }

    fn is_leap_year(&self, iso: IsoDate) -> bool {
        iso.in_leap_year()
    }

    fn date_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        let fields = self.to_iso_fields(fields)?;
        IsoCalendar.date_from_fields(&fields, disambiguation, target)
    }

    fn year_month_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, YearMonth>,
    ) -> Result<YearMonth, Error> {
        let fields = self.to_iso_fields(fields)?;
        IsoCalendar.year_month_from_fields(&fields, disambiguation, target)
    }

    fn add(
        &self,
        date: &Date,
        duration: Duration,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        IsoCalendar.add(date, duration, disambiguation, target)
    }

    fn difference(
        &self,
        one: &Date,
        two: &Date,
        largest: Unit,
    ) -> Result<Duration, Error> {
        IsoCalendar.difference(one, two, largest)
    }
}

pub(crate) fn shifted() -> Calendar {
    Calendar::new(Shifted).unwrap()
}

/// A calendar that ignores its construction targets and always returns
/// ISO values.
#[derive(Debug)]
struct Rogue;

impl CalendarProtocol for Rogue {
    fn id(&self) -> &str {
        "rogue"
    }

    fn year(&self, iso: IsoDate) -> i32 {
        iso.year()
    }

    fn month(&self, iso: IsoDate) -> i8 {
        iso.month()
    }

    fn era(&self, _: IsoDate) -> Option<Cow<'static, str>> {
        None
    }

    fn days_in_month(&self, iso: IsoDate) -> i8 {
        iso.days_in_month()
    }

    fn days_in_year(&self, iso: IsoDate) -> i16 {
        iso.days_in_year()
    }

    fn is_leap_year(&self, iso: IsoDate) -> bool {
        iso.in_leap_year()
    }

    fn date_from_fields(
        &self,
        fields: &Fields,
        _: Disambiguation,
        _: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        Date::new(
            fields.require_year()?,
            fields.require_month()?,
            fields.require_day()?,
        )
    }

    fn year_month_from_fields(
        &self,
        fields: &Fields,
        _: Disambiguation,
        _: Construct<'_, YearMonth>,
    ) -> Result<YearMonth, Error> {
        YearMonth::new(fields.require_year()?, fields.require_month()?)
    }

    fn add(
        &self,
        date: &Date,
        _: Duration,
        _: Disambiguation,
        _: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        Ok(Date::from_iso(date.iso_fields(), Calendar::iso()))
    }

    fn difference(&self, _: &Date, _: &Date, _: Unit) -> Result<Duration, Error> {
        Ok(Duration::new())
    }
}

/// A calendar that claims its months have no days.
#[derive(Debug)]
struct Empty;

impl CalendarProtocol for Empty {
    fn id(&self) -> &str {
        "empty"
    }

    fn year(&self, iso: IsoDate) -> i32 {
        iso.year()
    }

    fn month(&self, iso: IsoDate) -> i8 {
        iso.month()
    }

    fn era(&self, _: IsoDate) -> Option<Cow<'static, str>> {
        None
    }

    fn days_in_month(&self, _: IsoDate) -> i8 {
        0
    }

    fn days_in_year(&self, _: IsoDate) -> i16 {
        0
    }

    fn is_leap_year(&self, _: IsoDate) -> bool {
        false
    }

    fn date_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        IsoCalendar.date_from_fields(fields, disambiguation, target)
    }

    fn year_month_from_fields(
        &self,
        fields: &Fields,
        disambiguation: Disambiguation,
        target: Construct<'_, YearMonth>,
    ) -> Result<YearMonth, Error> {
        IsoCalendar.year_month_from_fields(fields, disambiguation, target)
    }

    fn add(
        &self,
        date: &Date,
        duration: Duration,
        disambiguation: Disambiguation,
        target: Construct<'_, Date>,
    ) -> Result<Date, Error> {
        IsoCalendar.add(date, duration, disambiguation, target)
    }

    fn difference(
        &self,
        one: &Date,
        two: &Date,
        largest: Unit,
    ) -> Result<Duration, Error> {
        IsoCalendar.difference(one, two, largest)
    }
}

#[test]
fn custom_calendar_accessors() -> crate::Result {
    let ym = YearMonth::new_with(2021, 7, shifted(), 1)?;
    assert_eq!(ym.year(), 2022);
    assert_eq!(ym.month(), 7);
    assert_eq!(ym.era(), None);
    assert_eq!(ym.days_in_month(), 31);

    let fields = ym.fields();
    assert_eq!(fields.get_year(), Some(2022));
    assert_eq!(fields.get_calendar(), Some(&shifted()));
    let iso = ym.iso_fields();
    assert_eq!((iso.year(), iso.month(), iso.day()), (2021, 7, 1));

    Ok(())
}

#[test]
fn custom_calendar_operations() -> crate::Result {
    let ym = YearMonth::new_with(2021, 7, shifted(), 1)?;

    let later = ym.plus(6.months())?;
    assert_eq!(later.calendar(), &shifted());
    assert_eq!((later.year(), later.month()), (2023, 1));
    assert_eq!(later.iso_fields().year(), 2022);

    let earlier = ym.minus(1.year())?;
    assert_eq!((earlier.year(), earlier.month()), (2021, 7));

    let replaced = ym.with(&Fields::new().year(2000), Disambiguation::Reject)?;
    assert_eq!(replaced.iso_fields().year(), 1999);

    let date = ym.with_day(31)?;
    assert_eq!(date.to_string(), "2021-07-31[u-ca=shifted]");
    assert_eq!(date.year(), 2022);

    assert_eq!(ym.difference(&later)?, 6.months());

    Ok(())
}

#[test]
fn cross_calendar_difference_is_symmetric() -> crate::Result {
    let iso = YearMonth::new(2020, 1)?;
    let shifted = YearMonth::new_with(2021, 3, shifted(), 1)?;
    let d1 = iso.difference(&shifted)?;
    let d2 = shifted.difference(&iso)?;
    assert_eq!(d1, 1.year().months(2));
    assert_eq!(d1, d2);
    Ok(())
}

#[test]
fn rogue_calendar_results_are_rejected() -> crate::Result {
    crate::init_logging();

    let rogue = Calendar::new(Rogue)?;
    let ym = YearMonth::new_with(2021, 7, rogue.clone(), 1)?;

    let err = ym.plus(1.month()).unwrap_err();
    assert!(err.is_invalid_result());
    insta::assert_snapshot!(
        err,
        @"failed to add duration to year-month: calendar `rogue` returned a value attached to calendar `iso8601`",
    );

    let err = ym.minus(1.month()).unwrap_err();
    assert!(err.is_invalid_result());

    let err = ym.with(&Fields::new().month(1), Disambiguation::Reject).unwrap_err();
    assert!(err.is_invalid_result());

    let err = ym.with_day(1).unwrap_err();
    assert!(err.is_invalid_result());

    let err = ym.difference(&ym).unwrap_err();
    assert!(err.is_invalid_result());

    let fields = Fields::new().year(2021).month(7).calendar(rogue);
    let err = YearMonth::from_item(&fields, Disambiguation::Reject).unwrap_err();
    assert!(err.is_invalid_result());

    Ok(())
}

#[test]
fn empty_months_are_rejected_when_subtracting() -> crate::Result {
    let ym = YearMonth::new_with(2021, 7, Calendar::new(Empty)?, 1)?;
    let err = ym.minus(1.month()).unwrap_err();
    assert!(err.is_invalid_calendar());
    insta::assert_snapshot!(
        err,
        @"failed to subtract duration from year-month: calendar `empty` reported 0 days in month, but every month must have at least one day",
    );
    // Addition anchors at the first day, so it doesn't care.
    assert_eq!(ym.plus(1.month())?.month(), 8);
    Ok(())
}

#[test]
fn invalid_identifiers() {
    #[derive(Debug)]
    struct Named(&'static str);

    impl CalendarProtocol for Named {
        fn id(&self) -> &str {
            self.0
        }
        fn year(&self, iso: IsoDate) -> i32 {
            iso.year()
        }
        fn month(&self, iso: IsoDate) -> i8 {
            iso.month()
        }
        fn era(&self, _: IsoDate) -> Option<Cow<'static, str>> {
            None
        }
        fn days_in_month(&self, iso: IsoDate) -> i8 {
            iso.days_in_month()
        }
        fn days_in_year(&self, iso: IsoDate) -> i16 {
            iso.days_in_year()
        }
        fn is_leap_year(&self, iso: IsoDate) -> bool {
            iso.in_leap_year()
        }
        fn date_from_fields(
            &self,
            fields: &Fields,
            disambiguation: Disambiguation,
            target: Construct<'_, Date>,
        ) -> Result<Date, Error> {
            IsoCalendar.date_from_fields(fields, disambiguation, target)
        }
        fn year_month_from_fields(
            &self,
            fields: &Fields,
            disambiguation: Disambiguation,
            target: Construct<'_, YearMonth>,
        ) -> Result<YearMonth, Error> {
            IsoCalendar.year_month_from_fields(fields, disambiguation, target)
        }
        fn add(
            &self,
            date: &Date,
            duration: Duration,
            disambiguation: Disambiguation,
            target: Construct<'_, Date>,
        ) -> Result<Date, Error> {
            IsoCalendar.add(date, duration, disambiguation, target)
        }
        fn difference(
            &self,
            one: &Date,
            two: &Date,
            largest: Unit,
        ) -> Result<Duration, Error> {
            IsoCalendar.difference(one, two, largest)
        }
    }

    for id in ["", "ab", "a-very-long-name", "gr\u{e9}gory", "greg ory"] {
        let err = Calendar::new(Named(id)).unwrap_err();
        assert!(err.is_invalid_calendar(), "{id:?} should be rejected");
    }
    for id in ["abc", "islamic-umalqura", "ethioaa"] {
        assert!(Calendar::new(Named(id)).is_ok(), "{id:?} should be valid");
    }
}

#[test]
fn database_registration() -> crate::Result {
    let mut db = CalendarDatabase::new();
    db.add(shifted())?;
    assert_eq!(db.get("shifted")?, shifted());
    assert!(db.add(shifted()).unwrap_err().is_invalid_calendar());
    assert_eq!(db.ids().collect::<Vec<_>>(), ["iso8601", "gregory", "shifted"]);
    Ok(())
}
