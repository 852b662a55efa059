//! `HolidayCalendar`: the holiday-calendar collaborator boundary.
//!
//! Holiday data is owned by an external source (typically fetched from a
//! remote service). The engine only consumes it through this trait and never
//! retries; retries and timeouts belong to the implementor.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use td_core::errors::Result;

/// A source of public-holiday sets keyed by calendar identifier.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Holidays of a single calendar.
    fn holidays(&self, calendar_id: &str) -> Result<BTreeSet<NaiveDate>>;

    /// Union of the holidays of every calendar in `calendar_ids`.
    fn public_holidays(&self, calendar_ids: &[String]) -> Result<BTreeSet<NaiveDate>> {
        let mut all = BTreeSet::new();
        for id in calendar_ids {
            all.extend(self.holidays(id)?);
        }
        Ok(all)
    }
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for &T {
    fn holidays(&self, calendar_id: &str) -> Result<BTreeSet<NaiveDate>> {
        (**self).holidays(calendar_id)
    }
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for Arc<T> {
    fn holidays(&self, calendar_id: &str) -> Result<BTreeSet<NaiveDate>> {
        (**self).holidays(calendar_id)
    }
}

/// A source with no holidays in any calendar; only weekday rules apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn holidays(&self, _calendar_id: &str) -> Result<BTreeSet<NaiveDate>> {
        Ok(BTreeSet::new())
    }
}
