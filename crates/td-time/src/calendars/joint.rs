//! Joint calendar: several holiday sources answering as one.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use td_core::ensure;
use td_core::errors::Result;

use crate::calendar::HolidayCalendar;

/// Rule for combining the holiday sets of several sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JointCalendarRule {
    /// A day is a holiday if **any** source marks it (union of holidays).
    #[default]
    JoinHolidays,
    /// A day is a holiday only if **every** source marks it (intersection).
    JoinBusinessDays,
}

/// Several [`HolidayCalendar`] sources combined by a [`JointCalendarRule`].
///
/// Each source is asked for the same calendar id; an error from any source
/// is returned as is.
#[derive(Debug, Clone)]
pub struct JointCalendar {
    sources: Vec<Arc<dyn HolidayCalendar>>,
    rule: JointCalendarRule,
}

impl JointCalendar {
    /// Combine `sources` under `rule`. At least one source is required.
    pub fn new(sources: Vec<Arc<dyn HolidayCalendar>>, rule: JointCalendarRule) -> Result<Self> {
        ensure!(!sources.is_empty(), "a joint calendar needs at least one source");
        Ok(Self { sources, rule })
    }

    /// The combination rule.
    pub fn rule(&self) -> JointCalendarRule {
        self.rule
    }

    /// Number of combined sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always `false`; construction rejects an empty source list.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl HolidayCalendar for JointCalendar {
    fn holidays(&self, calendar_id: &str) -> Result<BTreeSet<NaiveDate>> {
        let mut sets = self.sources.iter().map(|s| s.holidays(calendar_id));
        let mut combined = match sets.next() {
            Some(first) => first?,
            None => return Ok(BTreeSet::new()),
        };
        for set in sets {
            let set = set?;
            match self.rule {
                JointCalendarRule::JoinHolidays => combined.extend(set),
                JointCalendarRule::JoinBusinessDays => combined.retain(|d| set.contains(d)),
            }
        }
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::in_memory::InMemoryCalendars;
    use td_core::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sources() -> Vec<Arc<dyn HolidayCalendar>> {
        vec![
            Arc::new(InMemoryCalendars::lenient().with_calendar(
                "england-and-wales",
                [date(2022, 12, 26), date(2022, 12, 27)],
            )),
            Arc::new(InMemoryCalendars::lenient().with_calendar(
                "england-and-wales",
                [date(2022, 12, 27), date(2022, 9, 19)],
            )),
        ]
    }

    #[test]
    fn join_holidays_is_the_union() {
        let cal = JointCalendar::new(sources(), JointCalendarRule::JoinHolidays).unwrap();
        let h = cal.holidays("england-and-wales").unwrap();
        assert_eq!(h.len(), 3);
        assert!(h.contains(&date(2022, 9, 19)));
    }

    #[test]
    fn join_business_days_is_the_intersection() {
        let cal = JointCalendar::new(sources(), JointCalendarRule::JoinBusinessDays).unwrap();
        let h = cal.holidays("england-and-wales").unwrap();
        assert_eq!(h.into_iter().collect::<Vec<_>>(), vec![date(2022, 12, 27)]);
    }

    #[test]
    fn empty_source_list_is_rejected() {
        let err = JointCalendar::new(Vec::new(), JointCalendarRule::default()).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }
}
