//! Read-only manager views: who is on the clock, and the employee list.

use super::permissions;
use super::session::AdminSession;
use super::timeclock::TimeClock;
use crate::errors::AppResult;
use crate::models::{Employee, EmployeeId, Role, TimeStatus};
use crate::utils::formatting::MASKED_ID;

#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub on_clock: Vec<Employee>,
    pub on_meal: Vec<Employee>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryRow {
    /// Personnel number, or a mask when the viewer may not see it.
    pub id_label: String,
    pub name: String,
    pub pay: f64,
    pub role: Role,
}

impl TimeClock {
    pub fn roster(&self, actor: EmployeeId) -> AppResult<Roster> {
        permissions::can_view_clocked_in(self.store.require(actor)?)?;

        let with_status = |status: TimeStatus| -> Vec<Employee> {
            self.store
                .iter()
                .filter(|e| e.time_status == status)
                .cloned()
                .collect()
        };

        Ok(Roster {
            on_clock: with_status(TimeStatus::OnClock),
            on_meal: with_status(TimeStatus::OnMeal),
        })
    }

    pub fn directory(&self, admin: &AdminSession) -> AppResult<Vec<DirectoryRow>> {
        let actor = self.store.require(admin.actor())?;

        Ok(self
            .store
            .iter()
            .map(|e| DirectoryRow {
                id_label: if permissions::can_view_id(actor, e) {
                    e.id.to_string()
                } else {
                    MASKED_ID.to_string()
                },
                name: e.name.clone(),
                pay: e.pay,
                role: e.role(),
            })
            .collect())
    }
}
