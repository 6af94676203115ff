pub mod employee;
pub mod ids;
pub mod punch;
pub mod role;
pub mod time_status;

pub use employee::{Employee, EmployeeDraft};
pub use ids::{EmployeeId, ManagerPin};
pub use punch::{PunchEvent, PunchKind};
pub use role::{Role, RoleChange};
pub use time_status::TimeStatus;
