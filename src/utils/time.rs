//! Timestamp source for punches and headers.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

/// Fixed-width `MM/DD/YY HH:MM:SS`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// Reject strftime patterns chrono cannot render.
pub fn check_format(format: &str) -> AppResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::Config(format!(
            "invalid timestamp_format '{}'",
            format
        )));
    }
    Ok(())
}

pub trait Clock {
    fn now(&self) -> String;
}

/// Wall clock in local time.
pub struct LocalClock {
    format: String,
}

impl LocalClock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl Clock for LocalClock {
    fn now(&self) -> String {
        let now = Local::now();
        let mut out = String::new();
        match write!(out, "{}", now.format(&self.format)) {
            Ok(()) => out,
            Err(_) => now.format(DEFAULT_TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Always returns the same instant. Used by tests and replays.
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
