use serde::Serialize;

/// Clock state of one employee. A meal is only reachable from `OnClock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeStatus {
    OffClock,
    OnClock,
    OnMeal,
}

impl TimeStatus {
    /// Convert enum → file code
    pub fn to_code(&self) -> u8 {
        match self {
            TimeStatus::OffClock => 0,
            TimeStatus::OnClock => 1,
            TimeStatus::OnMeal => 2,
        }
    }

    /// Convert file code → enum
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TimeStatus::OffClock),
            1 => Some(TimeStatus::OnClock),
            2 => Some(TimeStatus::OnMeal),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeStatus::OffClock => "off clock",
            TimeStatus::OnClock => "on clock",
            TimeStatus::OnMeal => "on meal",
        }
    }
}
