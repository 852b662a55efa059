//! # taskdates
//!
//! Resolves the dates of a task (`nextHearingDate`, `dueDate`,
//! `priorityDate`, and any intermediate dates) from the facts produced by a
//! decision-table evaluation.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `td-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! taskdates = "0.1"
//! ```
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use taskdates::calculators::CalculationDefaults;
//! use taskdates::configurator::DateTypeConfigurator;
//! use taskdates::core::{AttributeMap, Fact, FactList};
//! use taskdates::time::InMemoryCalendars;
//!
//! let holidays = InMemoryCalendars::new()
//!     .with_calendar("england-and-wales", [NaiveDate::from_ymd_opt(2022, 10, 17).unwrap()]);
//! let configurator = DateTypeConfigurator::new(Arc::new(holidays)).with_defaults(
//!     CalculationDefaults::default().with_default_date(NaiveDate::from_ymd_opt(2022, 10, 13).unwrap()),
//! );
//!
//! let facts = FactList::from(vec![
//!     Fact::new("nextHearingDate", "2022-10-13T10:00"),
//!     Fact::new("dueDateOriginRef", "nextHearingDate"),
//!     Fact::new("dueDateIntervalDays", "2"),
//!     Fact::new("dueDateNonWorkingCalendar", "england-and-wales"),
//!     Fact::new("dueDateNonWorkingDaysOfWeek", "SATURDAY,SUNDAY"),
//! ]);
//! let mut attributes = AttributeMap::new();
//! configurator.configure_dates(&facts, false, false, &mut attributes).unwrap();
//!
//! assert_eq!(attributes["dueDate"], "2022-10-18T10:00");
//! assert_eq!(attributes["priorityDate"], "2022-10-13T16:00");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, facts, and date types.
pub use td_core as core;

/// Weekdays, date-times, holiday calendars, and working-day arithmetic.
pub use td_time as time;

/// Date calculation strategies.
pub use td_calculators as calculators;

/// Resolution order and the date-type configurator.
pub use td_configurator as configurator;
