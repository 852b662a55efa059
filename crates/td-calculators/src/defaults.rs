//! Defaults applied when a date type's facts leave a setting unspecified.

use chrono::{NaiveDate, NaiveTime};
use td_core::Settings;
use td_time::WorkingDayAdjustment;

/// Defaults used by the calculators of one configurator.
///
/// | Setting | Default |
/// |---|---|
/// | time of day for date-only values | `16:00` |
/// | base date of time-only dates | [`Settings::default_date`] |
/// | calendars when `<prefix>NonWorkingCalendar` is absent | none |
/// | `<prefix>SkipNonWorkingDays` | `true` |
/// | `<prefix>MustBeWorkingDay` | no adjustment |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationDefaults {
    default_time: NaiveTime,
    default_date: Option<NaiveDate>,
    calendars: Vec<String>,
    skip_non_working_days: bool,
    must_be_working_day: WorkingDayAdjustment,
}

impl Default for CalculationDefaults {
    fn default() -> Self {
        Self {
            default_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap_or(NaiveTime::MIN),
            default_date: None,
            calendars: Vec::new(),
            skip_non_working_days: true,
            must_be_working_day: WorkingDayAdjustment::Unadjusted,
        }
    }
}

impl CalculationDefaults {
    /// Set the time of day given to date-only values.
    pub fn with_default_time(mut self, time: NaiveTime) -> Self {
        self.default_time = time;
        self
    }

    /// Pin the base date of time-only dates instead of reading [`Settings`].
    pub fn with_default_date(mut self, date: NaiveDate) -> Self {
        self.default_date = Some(date);
        self
    }

    /// Set the calendars used when a date type names none.
    pub fn with_calendars(mut self, calendars: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.calendars = calendars.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether intervals count working days when the facts do not say.
    pub fn with_skip_non_working_days(mut self, skip: bool) -> Self {
        self.skip_non_working_days = skip;
        self
    }

    /// Set the adjustment used when the facts do not say.
    pub fn with_must_be_working_day(mut self, adjustment: WorkingDayAdjustment) -> Self {
        self.must_be_working_day = adjustment;
        self
    }

    /// Time of day given to date-only values.
    pub fn default_time(&self) -> NaiveTime {
        self.default_time
    }

    /// Base date of time-only dates.
    pub fn default_date(&self) -> NaiveDate {
        self.default_date
            .unwrap_or_else(|| Settings::instance().default_date())
    }

    /// Calendars used when a date type names none.
    pub fn calendars(&self) -> &[String] {
        &self.calendars
    }

    /// Whether intervals count working days by default.
    pub fn skip_non_working_days(&self) -> bool {
        self.skip_non_working_days
    }

    /// Default working-day adjustment.
    pub fn must_be_working_day(&self) -> WorkingDayAdjustment {
        self.must_be_working_day
    }
}
