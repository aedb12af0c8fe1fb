use crate::{
    calendar::Calendar,
    civil::{Date, IsoDate, YearMonth},
    error::Error,
    fmt::{util::DecimalFormatter, Write, WriteExt},
};

#[derive(Clone, Debug)]
pub(super) struct YearMonthPrinter {
    _priv: (),
}

impl YearMonthPrinter {
    pub(super) const fn new() -> YearMonthPrinter {
        YearMonthPrinter { _priv: () }
    }

    /// Formats the given year-month into the writer given.
    ///
    /// The calendar annotation is only written for calendars other than
    /// ISO 8601. The reference day is always written along with an
    /// annotation. In ISO 8601, it is written only when it isn't `1`, so
    /// that parsing the output gives back an equal value.
    pub(super) fn print_year_month<W: Write>(
        &self,
        ym: &YearMonth,
        mut wtr: W,
    ) -> Result<(), Error> {
        let iso = ym.iso_fields();
        self.print_iso_year_month(iso, &mut wtr)?;
        if !ym.calendar().is_iso() {
            self.print_iso_day(iso, &mut wtr)?;
            self.print_calendar_annotation(ym.calendar(), &mut wtr)?;
        } else if iso.day() != 1 {
            self.print_iso_day(iso, &mut wtr)?;
        }
        Ok(())
    }

    /// Formats the given date into the writer given.
    ///
    /// The calendar annotation is only written for calendars other than
    /// ISO 8601.
    pub(super) fn print_date<W: Write>(
        &self,
        date: &Date,
        mut wtr: W,
    ) -> Result<(), Error> {
        let iso = date.iso_fields();
        self.print_iso_year_month(iso, &mut wtr)?;
        self.print_iso_day(iso, &mut wtr)?;
        if !date.calendar().is_iso() {
            self.print_calendar_annotation(date.calendar(), &mut wtr)?;
        }
        Ok(())
    }

    fn print_iso_year_month<W: Write>(
        &self,
        iso: IsoDate,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_YEAR_FOUR: DecimalFormatter =
            DecimalFormatter::new().padding(4);
        static FMT_YEAR_SIX: DecimalFormatter =
            DecimalFormatter::new().padding(6).force_sign(true);
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        if (0..=9999).contains(&iso.year()) {
            wtr.write_int(&FMT_YEAR_FOUR, iso.year())?;
        } else {
            wtr.write_int(&FMT_YEAR_SIX, iso.year())?;
        }
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, iso.month())?;
        Ok(())
    }

    fn print_iso_day<W: Write>(
        &self,
        iso: IsoDate,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, iso.day())?;
        Ok(())
    }

    fn print_calendar_annotation<W: Write>(
        &self,
        calendar: &Calendar,
        mut wtr: W,
    ) -> Result<(), Error> {
        wtr.write_str("[u-ca=")?;
        wtr.write_str(calendar.id())?;
        wtr.write_str("]")?;
        Ok(())
    }
}
