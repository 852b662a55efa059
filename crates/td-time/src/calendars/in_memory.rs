//! In-memory holiday calendars: holidays added at run time, keyed by
//! calendar id.
//!
//! Useful for tests and for callers that fetch calendars ahead of a batch and
//! hand them to the engine as a snapshot.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use td_core::errors::{Error, Result};

use crate::calendar::HolidayCalendar;

/// Named holiday calendars held in memory.
///
/// An unknown calendar id is an error unless the source was built with
/// [`InMemoryCalendars::lenient`], in which case it has no holidays.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendars {
    calendars: HashMap<String, BTreeSet<NaiveDate>>,
    lenient: bool,
}

impl InMemoryCalendars {
    /// Create a source with no calendars; unknown ids are errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source with no calendars; unknown ids have no holidays.
    pub fn lenient() -> Self {
        Self {
            lenient: true,
            ..Self::default()
        }
    }

    /// Register a calendar with the given holidays, replacing any previous
    /// calendar of the same id.
    pub fn with_calendar(
        mut self,
        calendar_id: impl Into<String>,
        holidays: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        self.calendars
            .insert(calendar_id.into(), holidays.into_iter().collect());
        self
    }

    /// Add a holiday, creating the calendar if needed.
    pub fn add_holiday(&mut self, calendar_id: &str, date: NaiveDate) {
        self.calendars
            .entry(calendar_id.to_string())
            .or_default()
            .insert(date);
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, calendar_id: &str, date: NaiveDate) {
        if let Some(days) = self.calendars.get_mut(calendar_id) {
            days.remove(&date);
        }
    }

    /// Return the number of holidays in a calendar (0 if unknown).
    pub fn holiday_count(&self, calendar_id: &str) -> usize {
        self.calendars.get(calendar_id).map_or(0, BTreeSet::len)
    }
}

impl HolidayCalendar for InMemoryCalendars {
    fn holidays(&self, calendar_id: &str) -> Result<BTreeSet<NaiveDate>> {
        match self.calendars.get(calendar_id) {
            Some(days) => Ok(days.clone()),
            None if self.lenient => Ok(BTreeSet::new()),
            None => Err(Error::Calendar(format!("unknown calendar {calendar_id:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_and_remove_holiday() {
        let mut cal = InMemoryCalendars::new();
        let holiday = date(2022, 12, 26);
        cal.add_holiday("england-and-wales", holiday);
        assert_eq!(cal.holiday_count("england-and-wales"), 1);
        assert!(cal.holidays("england-and-wales").unwrap().contains(&holiday));

        cal.remove_holiday("england-and-wales", holiday);
        assert_eq!(cal.holiday_count("england-and-wales"), 0);
    }

    #[test]
    fn unknown_calendar_is_an_error_unless_lenient() {
        let strict = InMemoryCalendars::new();
        assert!(matches!(strict.holidays("mars"), Err(Error::Calendar(_))));
        let lenient = InMemoryCalendars::lenient();
        assert!(lenient.holidays("mars").unwrap().is_empty());
    }

    #[test]
    fn public_holidays_is_the_union() {
        let cal = InMemoryCalendars::new()
            .with_calendar("england-and-wales", [date(2022, 12, 26), date(2022, 12, 27)])
            .with_calendar("scotland", [date(2022, 12, 27), date(2023, 1, 2)]);
        let ids = vec!["england-and-wales".to_string(), "scotland".to_string()];
        let all = cal.public_holidays(&ids).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&date(2023, 1, 2)));
    }
}
