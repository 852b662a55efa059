//! # td-time
//!
//! Weekday, date-time, holiday calendar, and working-day arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Working-day adjustment directive (next / previous / none).
pub mod adjustment;

/// Holiday calendar collaborator boundary.
pub mod calendar;

/// Concrete holiday calendar sources.
pub mod calendars;

/// Parsing, formatting, and time-of-day merging for local date-times.
pub mod date_time;

/// `Weekday`: day of the week, parsed from fact values.
pub mod weekday;

/// `WorkingDayIndicator`: working-day tests and stepping.
pub mod working_day;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use adjustment::WorkingDayAdjustment;
pub use calendar::{HolidayCalendar, NoHolidays};
pub use calendars::in_memory::InMemoryCalendars;
pub use calendars::joint::{JointCalendar, JointCalendarRule};
pub use date_time::{add_days, format_date_time, merge_time, parse_date_time, parse_time, DATE_TIME_FORMAT};
pub use weekday::Weekday;
pub use working_day::WorkingDayIndicator;
