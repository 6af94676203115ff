//! Line-oriented persistence: the employee file and the punch ledger.

pub mod employee_file;
pub mod ledger;
pub mod seed;

pub use employee_file::EmployeeFile;
pub use ledger::PunchLedger;
