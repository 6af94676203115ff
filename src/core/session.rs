//! Login state held by the calling loop.

use super::permissions;
use super::store::EmployeeStore;
use crate::errors::AppResult;
use crate::models::{EmployeeId, ManagerPin};

/// The employee logged in at the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    actor: EmployeeId,
}

impl Session {
    pub fn login(store: &EmployeeStore, id: EmployeeId) -> AppResult<Self> {
        store.require(id)?;
        Ok(Self { actor: id })
    }

    pub fn actor(&self) -> EmployeeId {
        self.actor
    }

    /// Enter the edit screen. On `AuthenticationFailed` the caller must drop
    /// this session and return to the login prompt.
    pub fn unlock_admin(&self, store: &EmployeeStore, pin: ManagerPin) -> AppResult<AdminSession> {
        let actor = store.require(self.actor)?;
        permissions::can_edit_info(actor, pin)?;
        Ok(AdminSession { actor: self.actor })
    }
}

/// Proof that the pin gate was passed for this login. Administrative
/// operations only accept this token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession {
    actor: EmployeeId,
}

impl AdminSession {
    pub fn actor(&self) -> EmployeeId {
        self.actor
    }
}
