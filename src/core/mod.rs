pub mod admin;
pub mod config;
pub mod log;
pub mod permissions;
pub mod punch;
pub mod roster;
pub mod session;
pub mod store;
pub mod time_status;
pub mod timeclock;

pub use admin::{AddOutcome, PayChange, RoleOutcome};
pub use roster::{DirectoryRow, Roster};
pub use session::{AdminSession, Session};
pub use store::EmployeeStore;
pub use timeclock::TimeClock;
