//! `WorkingDayIndicator`: is a date a working day, and where is the next or
//! previous one.
//!
//! A date is a working day unless its weekday is listed as non-working or it
//! is a holiday in any of the requested calendars. Holiday sets are fetched
//! from the [`HolidayCalendar`] once per calendar id and memoised for the
//! lifetime of the indicator, which is one resolution pass.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use td_core::ensure;
use td_core::errors::{Error, Result};
use tracing::trace;

use crate::adjustment::WorkingDayAdjustment;
use crate::calendar::HolidayCalendar;
use crate::weekday::Weekday;

/// Upper bound on single-day steps taken while looking for a working day.
pub const DEFAULT_MAX_STEPS: u32 = 3660;

/// Working-day arithmetic over a holiday calendar source.
pub struct WorkingDayIndicator<'a> {
    calendar: &'a dyn HolidayCalendar,
    cache: RefCell<HashMap<String, Rc<BTreeSet<NaiveDate>>>>,
    max_steps: u32,
}

impl std::fmt::Debug for WorkingDayIndicator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkingDayIndicator")
            .field("calendar", &self.calendar)
            .field("cached", &self.cache.borrow().len())
            .field("max_steps", &self.max_steps)
            .finish()
    }
}

impl<'a> WorkingDayIndicator<'a> {
    /// Create an indicator with an empty holiday cache.
    pub fn new(calendar: &'a dyn HolidayCalendar) -> Self {
        Self {
            calendar,
            cache: RefCell::new(HashMap::new()),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Change the step bound.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Return `true` if `date` is neither a non-working weekday nor a holiday
    /// in any of `calendar_ids`.
    pub fn is_working_day(
        &self,
        date: NaiveDate,
        calendar_ids: &[String],
        non_working: &[Weekday],
    ) -> Result<bool> {
        if non_working.contains(&Weekday::from(date.weekday())) {
            return Ok(false);
        }
        for id in calendar_ids {
            if self.holidays_for(id)?.contains(&date) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The first working day strictly after `date`.
    pub fn next_working_day(
        &self,
        date: NaiveDate,
        calendar_ids: &[String],
        non_working: &[Weekday],
    ) -> Result<NaiveDate> {
        check_some_working_weekday(non_working)?;
        self.step(date, true, calendar_ids, non_working)
    }

    /// The first working day strictly before `date`.
    pub fn previous_working_day(
        &self,
        date: NaiveDate,
        calendar_ids: &[String],
        non_working: &[Weekday],
    ) -> Result<NaiveDate> {
        check_some_working_weekday(non_working)?;
        self.step(date, false, calendar_ids, non_working)
    }

    /// Move `date` onto a working day according to `adjustment`. A date that
    /// is already a working day is returned unchanged.
    pub fn adjust(
        &self,
        date: NaiveDate,
        adjustment: WorkingDayAdjustment,
        calendar_ids: &[String],
        non_working: &[Weekday],
    ) -> Result<NaiveDate> {
        if adjustment == WorkingDayAdjustment::Unadjusted
            || self.is_working_day(date, calendar_ids, non_working)?
        {
            return Ok(date);
        }
        match adjustment {
            WorkingDayAdjustment::Next => self.next_working_day(date, calendar_ids, non_working),
            WorkingDayAdjustment::Previous => {
                self.previous_working_day(date, calendar_ids, non_working)
            }
            WorkingDayAdjustment::Unadjusted => Ok(date),
        }
    }

    /// Advance `date` by `n` working days; each step lands on the next (or,
    /// for negative `n`, previous) working day.
    pub fn advance_working_days(
        &self,
        date: NaiveDate,
        n: i64,
        calendar_ids: &[String],
        non_working: &[Weekday],
    ) -> Result<NaiveDate> {
        if n == 0 {
            return Ok(date);
        }
        check_some_working_weekday(non_working)?;
        let forward = n > 0;
        let mut current = date;
        for _ in 0..n.unsigned_abs() {
            current = self.step(current, forward, calendar_ids, non_working)?;
        }
        Ok(current)
    }

    fn step(
        &self,
        date: NaiveDate,
        forward: bool,
        calendar_ids: &[String],
        non_working: &[Weekday],
    ) -> Result<NaiveDate> {
        let mut current = date;
        for _ in 0..self.max_steps {
            let shifted = if forward { current.succ_opt() } else { current.pred_opt() };
            current = shifted
                .ok_or_else(|| Error::Calendar(format!("no working day reachable from {date}")))?;
            if self.is_working_day(current, calendar_ids, non_working)? {
                trace!(%date, %current, forward, "stepped to working day");
                return Ok(current);
            }
        }
        Err(Error::Calendar(format!(
            "no working day within {} days of {date}",
            self.max_steps
        )))
    }

    fn holidays_for(&self, calendar_id: &str) -> Result<Rc<BTreeSet<NaiveDate>>> {
        if let Some(days) = self.cache.borrow().get(calendar_id) {
            return Ok(Rc::clone(days));
        }
        let days = Rc::new(self.calendar.holidays(calendar_id)?);
        trace!(calendar_id, holidays = days.len(), "cached holiday calendar");
        self.cache
            .borrow_mut()
            .insert(calendar_id.to_string(), Rc::clone(&days));
        Ok(days)
    }
}

fn check_some_working_weekday(non_working: &[Weekday]) -> Result<()> {
    ensure!(
        Weekday::ALL.iter().any(|d| !non_working.contains(d)),
        "every weekday is marked non-working"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::in_memory::InMemoryCalendars;
    use crate::calendar::NoHolidays;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const WEEKEND: [Weekday; 2] = [Weekday::Saturday, Weekday::Sunday];

    #[test]
    fn weekend_is_not_working() {
        let ind = WorkingDayIndicator::new(&NoHolidays);
        // 2022-10-15 is a Saturday
        assert!(!ind.is_working_day(date(2022, 10, 15), &[], &WEEKEND).unwrap());
        assert!(ind.is_working_day(date(2022, 10, 15), &[], &[]).unwrap());
        assert!(ind.is_working_day(date(2022, 10, 17), &[], &WEEKEND).unwrap());
    }

    #[test]
    fn holiday_is_not_working() {
        let cal = InMemoryCalendars::new().with_calendar("england-and-wales", [date(2022, 12, 26)]);
        let ind = WorkingDayIndicator::new(&cal);
        let ids = vec!["england-and-wales".to_string()];
        assert!(!ind.is_working_day(date(2022, 12, 26), &ids, &[]).unwrap());
        assert!(ind.is_working_day(date(2022, 12, 28), &ids, &[]).unwrap());
    }

    #[test]
    fn next_and_previous_skip_weekend() {
        let ind = WorkingDayIndicator::new(&NoHolidays);
        // Friday 2022-10-14 → Monday 2022-10-17
        assert_eq!(
            ind.next_working_day(date(2022, 10, 14), &[], &WEEKEND).unwrap(),
            date(2022, 10, 17)
        );
        assert_eq!(
            ind.previous_working_day(date(2022, 10, 17), &[], &WEEKEND).unwrap(),
            date(2022, 10, 14)
        );
    }

    #[test]
    fn adjust_leaves_working_days_alone() {
        let ind = WorkingDayIndicator::new(&NoHolidays);
        let thu = date(2022, 10, 13);
        let sat = date(2022, 10, 15);
        assert_eq!(ind.adjust(thu, WorkingDayAdjustment::Next, &[], &WEEKEND).unwrap(), thu);
        assert_eq!(
            ind.adjust(sat, WorkingDayAdjustment::Next, &[], &WEEKEND).unwrap(),
            date(2022, 10, 17)
        );
        assert_eq!(
            ind.adjust(sat, WorkingDayAdjustment::Previous, &[], &WEEKEND).unwrap(),
            date(2022, 10, 14)
        );
        assert_eq!(ind.adjust(sat, WorkingDayAdjustment::Unadjusted, &[], &WEEKEND).unwrap(), sat);
    }

    #[test]
    fn advance_counts_working_days() {
        let ind = WorkingDayIndicator::new(&NoHolidays);
        // Thursday + 5 working days = next Thursday
        assert_eq!(
            ind.advance_working_days(date(2022, 10, 13), 5, &[], &WEEKEND).unwrap(),
            date(2022, 10, 20)
        );
        assert_eq!(
            ind.advance_working_days(date(2022, 10, 20), -5, &[], &WEEKEND).unwrap(),
            date(2022, 10, 13)
        );
    }

    #[test]
    fn all_weekdays_non_working_fails() {
        let ind = WorkingDayIndicator::new(&NoHolidays);
        let err = ind.next_working_day(date(2022, 10, 13), &[], &Weekday::ALL).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
        let err = ind
            .advance_working_days(date(2022, 10, 13), -3, &[], &Weekday::ALL)
            .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
        let err = ind
            .adjust(date(2022, 10, 13), WorkingDayAdjustment::Previous, &[], &Weekday::ALL)
            .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
        // no stepping, nothing to check
        assert_eq!(
            ind.advance_working_days(date(2022, 10, 13), 0, &[], &Weekday::ALL).unwrap(),
            date(2022, 10, 13)
        );
    }

    #[test]
    fn step_bound_is_enforced() {
        let cal = InMemoryCalendars::new()
            .with_calendar("closed", (14..=31).map(|d| date(2022, 10, d)));
        let ind = WorkingDayIndicator::new(&cal).with_max_steps(10);
        let ids = vec!["closed".to_string()];
        let err = ind.next_working_day(date(2022, 10, 13), &ids, &[]).unwrap_err();
        assert!(matches!(err, Error::Calendar(_)));
    }
}
