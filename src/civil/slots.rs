use crate::{
    calendar::Calendar,
    civil::IsoDate,
    error::{civil::Error as E, Error},
};

/// One internal field of a year-month value.
#[derive(Clone, Debug)]
pub(crate) enum Slot {
    IsoYear(i32),
    IsoMonth(i8),
    ReferenceDay(i8),
    Calendar(Calendar),
}

/// The frozen internal state of a year-month.
///
/// The only way to get one of these is through `SlotsBuilder::freeze`, which
/// refuses to produce a store with any field missing. There are no setters.
#[derive(Clone, Debug)]
pub(crate) struct Slots {
    iso: IsoDate,
    calendar: Calendar,
}

impl Slots {
    #[inline]
    pub(crate) fn iso(&self) -> IsoDate {
        self.iso
    }

    #[inline]
    pub(crate) fn iso_year(&self) -> i32 {
        self.iso.year()
    }

    #[inline]
    pub(crate) fn iso_month(&self) -> i8 {
        self.iso.month()
    }

    #[inline]
    pub(crate) fn reference_day(&self) -> i8 {
        self.iso.day()
    }

    #[inline]
    pub(crate) fn calendar(&self) -> &Calendar {
        &self.calendar
    }
}

/// A builder for `Slots` used only while a value is being constructed.
#[derive(Debug, Default)]
pub(crate) struct SlotsBuilder {
    iso_year: Option<i32>,
    iso_month: Option<i8>,
    reference_day: Option<i8>,
    calendar: Option<Calendar>,
}

impl SlotsBuilder {
    pub(crate) fn new() -> SlotsBuilder {
        SlotsBuilder::default()
    }

    pub(crate) fn set(mut self, slot: Slot) -> SlotsBuilder {
        match slot {
            Slot::IsoYear(year) => self.iso_year = Some(year),
            Slot::IsoMonth(month) => self.iso_month = Some(month),
            Slot::ReferenceDay(day) => self.reference_day = Some(day),
            Slot::Calendar(calendar) => self.calendar = Some(calendar),
        }
        self
    }

    /// Freezes this builder into a read-only store.
    ///
    /// Every slot must have been set and the ISO fields must form a valid
    /// date inside the supported range.
    pub(crate) fn freeze(self) -> Result<Slots, Error> {
        let missing = |slot| Error::from(E::IncompleteValue { slot });
        let year = self.iso_year.ok_or_else(|| missing("iso_year"))?;
        let month = self.iso_month.ok_or_else(|| missing("iso_month"))?;
        let day = self.reference_day.ok_or_else(|| missing("reference_day"))?;
        let calendar = self.calendar.ok_or_else(|| missing("calendar"))?;
        let iso = IsoDate::new(year, month, day)?;
        Ok(Slots { iso, calendar })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn freeze_complete() {
        let slots = SlotsBuilder::new()
            .set(Slot::IsoYear(2021))
            .set(Slot::IsoMonth(7))
            .set(Slot::ReferenceDay(1))
            .set(Slot::Calendar(Calendar::iso()))
            .freeze()
            .unwrap();
        assert_eq!(slots.iso_year(), 2021);
        assert_eq!(slots.iso_month(), 7);
        assert_eq!(slots.reference_day(), 1);
        assert!(slots.calendar().is_iso());
    }

    #[test]
    fn freeze_incomplete_is_invalid_receiver() {
        let err = SlotsBuilder::new()
            .set(Slot::IsoYear(2021))
            .set(Slot::IsoMonth(7))
            .set(Slot::Calendar(Calendar::iso()))
            .freeze()
            .unwrap_err();
        assert!(err.is_invalid_receiver());
        assert_eq!(
            err.to_string(),
            "value was not produced by its constructor \
             (missing internal `reference_day` field)",
        );

        let err = SlotsBuilder::new().freeze().unwrap_err();
        assert!(err.is_invalid_receiver());
    }

    #[test]
    fn freeze_invalid_date() {
        let err = SlotsBuilder::new()
            .set(Slot::IsoYear(2021))
            .set(Slot::IsoMonth(2))
            .set(Slot::ReferenceDay(29))
            .set(Slot::Calendar(Calendar::iso()))
            .freeze()
            .unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn later_set_wins() {
        let slots = SlotsBuilder::new()
            .set(Slot::IsoYear(2021))
            .set(Slot::IsoYear(2022))
            .set(Slot::IsoMonth(7))
            .set(Slot::ReferenceDay(1))
            .set(Slot::Calendar(Calendar::iso()))
            .freeze()
            .unwrap();
        assert_eq!(slots.iso_year(), 2022);
    }
}
