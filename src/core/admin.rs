//! Administrative operations behind the manager pin gate.
//!
//! Each operation re-reads the actor and target from the store, runs the
//! permission checks, mutates, and persists. Any failure before the save
//! leaves the store untouched; a failed save restores it.

use super::permissions;
use super::session::AdminSession;
use super::timeclock::TimeClock;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Employee, EmployeeDraft, EmployeeId, ManagerPin, Role, RoleChange, TimeStatus,
};
use crate::storage::{employee_file, ledger};

#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub employee: Employee,
    /// The requested role was above associate but the actor lacks master
    /// access, so the record was created as an associate.
    pub downgraded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayChange {
    pub name: String,
    pub old_pay: f64,
    pub new_pay: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoleOutcome {
    Changed { name: String, from: Role, to: Role },
    /// Target already in the requested state; nothing was written.
    Unchanged(String),
}

pub fn validate_pay(pay: f64) -> AppResult<f64> {
    if !pay.is_finite() || pay < 0.0 {
        return Err(AppError::InvalidInput("Pay must be a positive number".into()));
    }
    Ok(pay)
}

/// Names end up in both line formats, so their delimiters are refused.
pub fn validate_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput("name must not be empty".into()));
    }
    if name.contains(employee_file::FIELD_DELIMITER)
        || name.contains(ledger::FIELD_DELIMITER)
        || name.contains(['\n', '\r'])
    {
        return Err(AppError::InvalidInput(format!(
            "name must not contain '{}' or '{}'",
            employee_file::FIELD_DELIMITER,
            ledger::FIELD_DELIMITER
        )));
    }
    Ok(name.to_string())
}

impl TimeClock {
    fn admin_actor(&self, admin: &AdminSession) -> AppResult<&Employee> {
        self.store.require(admin.actor())
    }

    pub fn add_employee(
        &mut self,
        admin: &AdminSession,
        draft: EmployeeDraft,
    ) -> AppResult<AddOutcome> {
        let actor = self.admin_actor(admin)?;
        permissions::can_add(actor)?;

        let name = validate_name(&draft.name)?;
        let pay = validate_pay(draft.pay)?;
        if self.store.contains(draft.id) {
            return Err(AppError::InvalidInput("ID already exists".into()));
        }

        let downgraded = draft.role.is_manager() && !actor.has_master();
        let (role, pin) = if actor.has_master() {
            (draft.role, draft.pin)
        } else {
            (Role::Associate, None)
        };
        if role.is_manager() && pin.is_none() {
            return Err(AppError::InvalidInput(
                "a 4-digit manager pin is required for a manager".into(),
            ));
        }

        let employee = Employee::new(draft.id, name, pay, role, pin, TimeStatus::OffClock);
        let actor_id = actor.id;

        let snapshot = self.store.clone();
        self.store.insert(employee.clone())?;
        self.commit(snapshot)?;

        self.record(
            "add",
            &employee.id.to_string(),
            &format!("{} added by {} as {:?}", employee.name, actor_id, role),
        );
        Ok(AddOutcome {
            employee,
            downgraded,
        })
    }

    pub fn remove_employee(
        &mut self,
        admin: &AdminSession,
        target: EmployeeId,
    ) -> AppResult<Employee> {
        let actor = self.admin_actor(admin)?;
        if target == actor.id {
            return Err(AppError::PermissionDenied(
                "You may not remove yourself as an employee".into(),
            ));
        }
        let target_emp = self.store.require(target)?;
        permissions::can_remove(actor, target_emp)?;
        let actor_id = actor.id;

        let snapshot = self.store.clone();
        let removed = self.store.remove(target)?;
        self.commit(snapshot)?;

        self.record(
            "remove",
            &target.to_string(),
            &format!("{} removed by {}", removed.name, actor_id),
        );
        Ok(removed)
    }

    pub fn change_pay(
        &mut self,
        admin: &AdminSession,
        target: EmployeeId,
        new_pay: f64,
    ) -> AppResult<PayChange> {
        let actor = self.admin_actor(admin)?;
        if target == actor.id {
            return Err(AppError::PermissionDenied(
                "You cannot change your own pay".into(),
            ));
        }
        permissions::can_change_pay(actor, self.store.require(target)?)?;
        let new_pay = validate_pay(new_pay)?;
        let actor_id = actor.id;

        let snapshot = self.store.clone();
        let emp = self.store.require_mut(target)?;
        let change = PayChange {
            name: emp.name.clone(),
            old_pay: emp.pay,
            new_pay,
        };
        emp.pay = new_pay;
        self.commit(snapshot)?;

        self.record(
            "pay",
            &target.to_string(),
            &format!(
                "{}: {:.2} -> {:.2} by {}",
                change.name, change.old_pay, change.new_pay, actor_id
            ),
        );
        Ok(change)
    }

    /// `new_pin` is only read when a promote/grant target has no pin yet.
    pub fn change_role(
        &mut self,
        admin: &AdminSession,
        target: EmployeeId,
        op: RoleChange,
        new_pin: Option<ManagerPin>,
    ) -> AppResult<RoleOutcome> {
        let actor = self.admin_actor(admin)?;
        if target == actor.id {
            return Err(AppError::PermissionDenied(
                "You cannot change your own status".into(),
            ));
        }
        let target_emp = self.store.require(target)?;
        permissions::can_change_role(actor, target_emp, op)?;

        let from = target_emp.role();
        let Some(to) = op.apply_to(from) else {
            return Ok(RoleOutcome::Unchanged(op.unchanged_message().to_string()));
        };

        if op.needs_pin() && target_emp.pin().is_none() && new_pin.is_none() {
            return Err(AppError::InvalidInput(
                "a 4-digit manager pin must be created first".into(),
            ));
        }
        let actor_id = actor.id;

        let snapshot = self.store.clone();
        let emp = self.store.require_mut(target)?;
        if to.is_manager() {
            emp.elevate(to, new_pin);
        } else {
            emp.demote();
        }
        let name = emp.name.clone();
        self.commit(snapshot)?;

        self.record(
            op.as_str(),
            &target.to_string(),
            &format!("{}: {:?} -> {:?} by {}", name, from, to, actor_id),
        );
        Ok(RoleOutcome::Changed { name, from, to })
    }
}
