//! Clock in/out and meal punches.

use super::time_status::transition;
use super::timeclock::TimeClock;
use crate::errors::AppResult;
use crate::models::{EmployeeId, PunchEvent, PunchKind};

impl TimeClock {
    pub fn clock_in(&mut self, id: EmployeeId) -> AppResult<PunchEvent> {
        self.punch(id, PunchKind::ClockIn)
    }

    pub fn clock_out(&mut self, id: EmployeeId) -> AppResult<PunchEvent> {
        self.punch(id, PunchKind::ClockOut)
    }

    pub fn start_meal(&mut self, id: EmployeeId) -> AppResult<PunchEvent> {
        self.punch(id, PunchKind::StartMeal)
    }

    pub fn end_meal(&mut self, id: EmployeeId) -> AppResult<PunchEvent> {
        self.punch(id, PunchKind::EndMeal)
    }

    /// Most recent ledger entry for `id`, `None` when there are no punches.
    pub fn last_punch(&self, id: EmployeeId) -> AppResult<Option<PunchEvent>> {
        self.ledger().last_for(id)
    }

    pub fn punch_history(&self, id: EmployeeId) -> AppResult<Vec<PunchEvent>> {
        self.ledger().history_for(id)
    }

    pub fn punch(&mut self, id: EmployeeId, kind: PunchKind) -> AppResult<PunchEvent> {
        let employee = self.store.require(id)?;
        let next = transition(employee.time_status, kind)?;

        let event = PunchEvent {
            employee_id: id,
            employee_name: employee.name.clone(),
            kind,
            timestamp: self.now(),
        };

        let snapshot = self.store.clone();
        self.store.require_mut(id)?.time_status = next;
        self.commit(snapshot.clone())?;

        // The event only exists for a transition that was saved.
        if let Err(e) = self.ledger().append(&event) {
            self.rollback(snapshot);
            return Err(e);
        }

        self.record(
            kind.to_ledger_str(),
            &id.to_string(),
            &format!("{} at {}", event.employee_name, event.timestamp),
        );
        Ok(event)
    }
}
