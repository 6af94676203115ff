pub mod config;
pub mod employees;
pub mod init;
pub mod log;
pub mod punch;
pub mod roster;
pub mod terminal;

use crate::cli::parser::AdminArgs;
use crate::core::{AdminSession, Session, TimeClock};
use crate::errors::AppResult;
use crate::models::{EmployeeId, ManagerPin};

/// Resolve the acting employee from a typed personnel #.
pub(crate) fn login(clock: &TimeClock, raw_id: &str) -> AppResult<Session> {
    Session::login(clock.store(), EmployeeId::parse(raw_id)?)
}

/// Login plus the manager pin gate.
pub(crate) fn admin_login(clock: &TimeClock, auth: &AdminArgs) -> AppResult<AdminSession> {
    let session = login(clock, &auth.id)?;
    let pin = ManagerPin::parse(&auth.pin)?;
    session.unlock_admin(clock.store(), pin)
}
