use super::{EmployeeId, ManagerPin, Role, TimeStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub pay: f64,
    pub time_status: TimeStatus,
    role: Role,
    #[serde(skip)]
    pin: Option<ManagerPin>,
}

impl Employee {
    /// Build a record; an associate never keeps a pin.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        pay: f64,
        role: Role,
        pin: Option<ManagerPin>,
        time_status: TimeStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            pay,
            time_status,
            role,
            pin: if role.is_manager() { pin } else { None },
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn pin(&self) -> Option<ManagerPin> {
        self.pin
    }

    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    pub fn has_master(&self) -> bool {
        self.role.has_master()
    }

    /// Move to a manager tier, creating the pin when none exists yet.
    /// An existing pin is kept and `new_pin` is ignored.
    pub fn elevate(&mut self, role: Role, new_pin: Option<ManagerPin>) {
        if self.pin.is_none() {
            self.pin = new_pin;
        }
        self.role = role;
    }

    /// Back to associate; the pin goes with the manager tier.
    pub fn demote(&mut self) {
        self.role = Role::Associate;
        self.pin = None;
    }
}

/// Values gathered by the caller before an employee is added.
#[derive(Debug, Clone)]
pub struct EmployeeDraft {
    pub id: EmployeeId,
    pub name: String,
    pub pay: f64,
    pub role: Role,
    pub pin: Option<ManagerPin>,
}
