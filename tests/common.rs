#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use punchclock::core::{AdminSession, Session, TimeClock};
use punchclock::models::{Employee, EmployeeId, ManagerPin, Role, TimeStatus};
use punchclock::storage::{EmployeeFile, PunchLedger};
use punchclock::utils::FixedClock;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const NOW: &str = "10/19/26 09:00:00";

pub const MASTER: u32 = 1111111;
pub const MASTER_2: u32 = 1111112;
pub const MANAGER: u32 = 3000001;
pub const MANAGER_2: u32 = 3000002;
pub const ASSOCIATE: u32 = 2000001;
pub const ASSOCIATE_2: u32 = 2000002;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Fresh, empty data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("punchclock_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp data dir");
    path
}

pub fn id(n: u32) -> EmployeeId {
    EmployeeId::new(n).expect("valid id")
}

pub fn pin(n: u32) -> ManagerPin {
    ManagerPin::new(n).expect("valid pin")
}

pub fn employee(n: u32, name: &str, pay: f64, role: Role, pin_value: u32) -> Employee {
    let p = if pin_value == 0 { None } else { Some(pin(pin_value)) };
    Employee::new(id(n), name, pay, role, p, TimeStatus::OffClock)
}

/// Two masters, two plain managers, two associates.
pub fn staff() -> Vec<Employee> {
    vec![
        employee(MASTER, "Sam Master", 25.00, Role::Master, 1111),
        employee(MASTER_2, "Sue Master", 24.00, Role::Master, 4444),
        employee(MANAGER, "Mia Manager", 19.50, Role::Manager, 2222),
        employee(MANAGER_2, "Max Manager", 19.00, Role::Manager, 3333),
        employee(ASSOCIATE, "Ann Associate", 15.00, Role::Associate, 0),
        employee(ASSOCIATE_2, "Ben Associate", 14.50, Role::Associate, 0),
    ]
}

pub fn employees_file(dir: &Path) -> EmployeeFile {
    EmployeeFile::new(dir.join("employees.txt"))
}

pub fn ledger(dir: &Path) -> PunchLedger {
    PunchLedger::new(dir.join("punchRecords.txt"))
}

/// Write `employees` to a fresh directory and open a clock over it.
pub fn clock_with(dir: &Path, employees: &[Employee]) -> TimeClock {
    employees_file(dir).save(employees).expect("write employees");
    reopen(dir)
}

/// Load the files again, as a new login cycle would.
pub fn reopen(dir: &Path) -> TimeClock {
    let mut tc = TimeClock::new(
        employees_file(dir),
        ledger(dir),
        Box::new(FixedClock(NOW.to_string())),
    );
    tc.reload().expect("load employees");
    tc
}

pub fn admin(tc: &TimeClock, actor: u32, pin_value: u32) -> AdminSession {
    Session::login(tc.store(), id(actor))
        .expect("login")
        .unlock_admin(tc.store(), pin(pin_value))
        .expect("pin accepted")
}
