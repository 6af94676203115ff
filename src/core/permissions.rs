//! Who may do what to whom.
//!
//! Every check is a pure function of the acting employee, the target and the
//! requested action. Denials carry the message shown to the operator.

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, ManagerPin, RoleChange};

fn deny(reason: &str) -> AppError {
    AppError::PermissionDenied(reason.to_string())
}

fn require_manager(actor: &Employee) -> AppResult<()> {
    if actor.is_manager() {
        Ok(())
    } else {
        Err(deny("manager access required"))
    }
}

/// Non-master viewers see other managers' ids masked.
pub fn can_view_id(actor: &Employee, target: &Employee) -> bool {
    actor.has_master() || !target.is_manager() || target.id == actor.id
}

pub fn can_add(actor: &Employee) -> AppResult<()> {
    require_manager(actor)
}

pub fn can_remove(actor: &Employee, target: &Employee) -> AppResult<()> {
    require_manager(actor)?;
    if target.id == actor.id {
        return Err(deny("You may not remove yourself as an employee"));
    }
    if target.is_manager() && !actor.has_master() {
        return Err(deny("You must have master access to remove a manager"));
    }
    Ok(())
}

pub fn can_change_pay(actor: &Employee, target: &Employee) -> AppResult<()> {
    require_manager(actor)?;
    if target.id == actor.id {
        return Err(deny("You cannot change your own pay"));
    }
    if target.has_master() && !actor.has_master() {
        return Err(deny(
            "You do not have permission to change this employee's pay",
        ));
    }
    Ok(())
}

/// Self and master-target restrictions shared with pay, checked before the
/// operation is known.
pub fn can_change_status(actor: &Employee, target: &Employee) -> AppResult<()> {
    require_manager(actor)?;
    if target.id == actor.id {
        return Err(deny("You cannot change your own status"));
    }
    if target.has_master() && !actor.has_master() {
        return Err(deny(
            "You do not have permission to change this employee's status",
        ));
    }
    Ok(())
}

pub fn can_change_role(actor: &Employee, target: &Employee, op: RoleChange) -> AppResult<()> {
    can_change_status(actor, target)?;
    match op {
        RoleChange::PromoteToManager => Ok(()),
        _ if actor.has_master() => Ok(()),
        RoleChange::DemoteToAssociate => {
            Err(deny("You do not have permission to demote employees"))
        }
        RoleChange::GrantMaster => Err(deny(
            "You do not have permission to grant master access",
        )),
        RoleChange::RevokeMaster => Err(deny(
            "You do not have permission to remove master access",
        )),
    }
}

pub fn can_view_clocked_in(actor: &Employee) -> AppResult<()> {
    require_manager(actor)
}

/// Compare a supplied pin with the actor's. A manager whose pin was never
/// created cannot pass.
pub fn verify_pin(actor: &Employee, supplied: ManagerPin) -> AppResult<()> {
    match actor.pin() {
        Some(pin) if pin == supplied => Ok(()),
        Some(_) => Err(AppError::AuthenticationFailed(
            "Incorrect, logging you out".into(),
        )),
        None => Err(AppError::AuthenticationFailed(
            "no manager pin on file, logging you out".into(),
        )),
    }
}

/// Gate of the edit-employee screen: manager tier plus the right pin.
pub fn can_edit_info(actor: &Employee, supplied: ManagerPin) -> AppResult<()> {
    require_manager(actor)?;
    verify_pin(actor, supplied)
}
