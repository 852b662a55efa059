//! Global library settings.
//!
//! [`Settings`] holds the **default date**: the base date used when a date
//! type is configured with nothing but a time of day. It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`, fixed to the local
//! current date the first time it is read unless set explicitly.
//!
//! Thread safety: the default date is stored behind a `Mutex` so that it can
//! be changed from any thread. Tests that change it should use
//! [`ScopedDefaultDate`] so the previous value is restored.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use chrono::{Local, NaiveDate};

/// Process-wide settings used by taskdates.
pub struct Settings {
    default_date: Mutex<Option<NaiveDate>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            default_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<NaiveDate>> {
        self.default_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the default date, fixing it to today's local date on first use.
    pub fn default_date(&self) -> NaiveDate {
        *self.slot().get_or_insert_with(|| Local::now().date_naive())
    }

    /// Return the default date only if it has been fixed already.
    pub fn default_date_if_set(&self) -> Option<NaiveDate> {
        *self.slot()
    }

    /// Set the default date.
    pub fn set_default_date(&self, date: NaiveDate) {
        *self.slot() = Some(date);
    }

    /// Clear the default date; the next read fixes it to today again.
    pub fn reset_default_date(&self) {
        *self.slot() = None;
    }
}

/// Sets the default date for the lifetime of the guard and restores the
/// previous value on drop.
#[must_use = "the default date is restored as soon as the guard is dropped"]
pub struct ScopedDefaultDate {
    previous: Option<NaiveDate>,
}

impl ScopedDefaultDate {
    /// Set `date` as the default date until the guard is dropped.
    pub fn new(date: NaiveDate) -> Self {
        let settings = Settings::instance();
        let previous = settings.default_date_if_set();
        settings.set_default_date(date);
        Self { previous }
    }
}

impl Drop for ScopedDefaultDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(date) => settings.set_default_date(date),
            None => settings.reset_default_date(),
        }
    }
}
