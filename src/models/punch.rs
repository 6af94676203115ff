use super::ids::EmployeeId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PunchKind {
    ClockIn,
    ClockOut,
    StartMeal,
    EndMeal,
}

impl PunchKind {
    /// Convert enum → ledger string
    pub fn to_ledger_str(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "CLOCK_IN",
            PunchKind::ClockOut => "CLOCK_OUT",
            PunchKind::StartMeal => "START_MEAL",
            PunchKind::EndMeal => "END_MEAL",
        }
    }

    /// Convert ledger string → enum
    pub fn from_ledger_str(s: &str) -> Option<Self> {
        match s {
            "CLOCK_IN" => Some(PunchKind::ClockIn),
            "CLOCK_OUT" => Some(PunchKind::ClockOut),
            "START_MEAL" => Some(PunchKind::StartMeal),
            "END_MEAL" => Some(PunchKind::EndMeal),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "you are now clocked in",
            PunchKind::ClockOut => "you are now clocked out",
            PunchKind::StartMeal => "start meal saved",
            PunchKind::EndMeal => "end meal saved",
        }
    }
}

/// One line of the punch ledger. Written once, never edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PunchEvent {
    pub employee_id: EmployeeId,
    pub employee_name: String, // denormalized at write time
    pub kind: PunchKind,
    pub timestamp: String,
}
