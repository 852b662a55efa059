//! Interval and working-day adjustment applied to an origin date.
//!
//! 1. Add `<prefix>IntervalDays` to the origin: calendar days when
//!    `<prefix>SkipNonWorkingDays` is false, otherwise one working day at a
//!    time.
//! 2. Move onto a working day per `<prefix>MustBeWorkingDay`.

use chrono::NaiveDate;
use td_core::errors::{Error, Result};
use td_core::FieldSuffix;
use td_time::{add_days, Weekday, WorkingDayAdjustment, WorkingDayIndicator};
use tracing::trace;

use crate::defaults::CalculationDefaults;
use crate::inputs::DateInputs;

/// Interval settings of one date type, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSettings {
    /// Days to add; may be negative.
    pub interval_days: i64,
    /// Count working days instead of calendar days.
    pub skip_non_working_days: bool,
    /// Holiday calendars.
    pub calendars: Vec<String>,
    /// Weekdays that are never working days.
    pub non_working_weekdays: Vec<Weekday>,
    /// Final adjustment onto a working day.
    pub must_be_working_day: WorkingDayAdjustment,
}

impl IntervalSettings {
    /// Read the settings from `inputs`, falling back to `defaults`.
    pub fn from_inputs(inputs: &DateInputs, defaults: &CalculationDefaults) -> Result<Self> {
        let object = inputs.object();
        let field = |suffix: FieldSuffix| object.field(suffix);

        let interval_days = match inputs.setting(FieldSuffix::IntervalDays) {
            Some(v) => v.trim().parse::<i64>().map_err(|_| {
                Error::parse(field(FieldSuffix::IntervalDays), v, "expected a whole number of days")
            })?,
            None => 0,
        };
        let skip_non_working_days = match inputs.setting(FieldSuffix::SkipNonWorkingDays) {
            Some(v) => parse_bool(&field(FieldSuffix::SkipNonWorkingDays), v)?,
            None => defaults.skip_non_working_days(),
        };
        let calendars = match inputs.setting(FieldSuffix::NonWorkingCalendar) {
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.calendars().to_vec(),
        };
        let non_working_weekdays = match inputs.setting(FieldSuffix::NonWorkingDaysOfWeek) {
            Some(v) => Weekday::parse_list(v)?,
            None => Vec::new(),
        };
        let must_be_working_day = match inputs.setting(FieldSuffix::MustBeWorkingDay) {
            Some(v) => v.parse()?,
            None => defaults.must_be_working_day(),
        };

        Ok(Self {
            interval_days,
            skip_non_working_days,
            calendars,
            non_working_weekdays,
            must_be_working_day,
        })
    }

    /// Apply the interval and the working-day adjustment to `origin`.
    pub fn apply(&self, origin: NaiveDate, indicator: &WorkingDayIndicator<'_>) -> Result<NaiveDate> {
        let shifted = if self.skip_non_working_days {
            indicator.advance_working_days(
                origin,
                self.interval_days,
                &self.calendars,
                &self.non_working_weekdays,
            )?
        } else {
            add_days(origin, self.interval_days)?
        };
        let adjusted = indicator.adjust(
            shifted,
            self.must_be_working_day,
            &self.calendars,
            &self.non_working_weekdays,
        )?;
        trace!(%origin, %shifted, %adjusted, interval = self.interval_days, "applied interval");
        Ok(adjusted)
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::parse(field, value, "expected true or false")),
    }
}
