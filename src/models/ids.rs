//! Validated numeric identifiers typed in at the terminal.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Seven-digit personnel number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub const MIN: u32 = 1_000_000;
    pub const MAX: u32 = 9_999_999;

    pub fn new(value: u32) -> AppResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(AppError::InvalidInput(
                "personnel # must be 7 digits".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn parse(input: &str) -> AppResult<Self> {
        let value: u32 = digits(input)
            .ok_or_else(|| AppError::InvalidInput("personnel # must be numeric".into()))?;
        Self::new(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Four-digit manager pin. The persisted `0` sentinel ("no pin yet") is
/// represented as `Option::<ManagerPin>::None`, never as a `ManagerPin`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ManagerPin(u16);

impl ManagerPin {
    pub fn new(value: u32) -> AppResult<Self> {
        if !(1000..=9999).contains(&value) {
            return Err(AppError::InvalidInput("pin must be 4 digits".into()));
        }
        Ok(Self(value as u16))
    }

    pub fn parse(input: &str) -> AppResult<Self> {
        let value: u32 = digits(input)
            .ok_or_else(|| AppError::InvalidInput("manager pin must be numeric".into()))?;
        Self::new(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

// Pins never show up in debug output or logs.
impl fmt::Debug for ManagerPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ManagerPin(****)")
    }
}

// Plain ASCII digits only; `str::parse` would also take a leading `+`.
fn digits(input: &str) -> Option<u32> {
    let s = input.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
