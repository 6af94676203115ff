//! `employees.txt` codec.
//!
//! One record per line, fields separated by `|` in the fixed order
//! `name|id|pay|isManager|managerPin|hasMaster|timeStatus`.

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EmployeeId, ManagerPin, Role, TimeStatus};
use crate::ui::messages::warning;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const FIELD_DELIMITER: char = '|';
const FIELD_COUNT: usize = 7;

pub struct EmployeeFile {
    path: PathBuf,
    // lines the last load could not read; written back verbatim on save
    unreadable: RefCell<Vec<String>>,
}

impl EmployeeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            unreadable: RefCell::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every well-formed record. A missing file reads as an empty set
    /// (first run). Lines that cannot be read are skipped but kept for the
    /// next `save`, so a rewrite never loses them.
    pub fn load(&self) -> AppResult<Vec<Employee>> {
        let mut unreadable = self.unreadable.borrow_mut();
        unreadable.clear();

        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::storage(&self.path, e)),
        };

        let mut out = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let decoded = if line.matches(FIELD_DELIMITER).count() < FIELD_COUNT - 1 {
                None
            } else {
                decode_line(line)
            };
            match decoded {
                Some(emp) => out.push(emp),
                None => {
                    warning(format!(
                        "Skipping malformed employee record at {}:{}",
                        self.path.display(),
                        lineno + 1
                    ));
                    unreadable.push(line.to_string());
                }
            }
        }
        Ok(out)
    }

    /// Raw lines the last `load` skipped.
    pub fn unreadable_lines(&self) -> Vec<String> {
        self.unreadable.borrow().clone()
    }

    /// Overwrite the file with the full set. Written to a sibling first and
    /// renamed into place, so a failed write leaves the old contents intact.
    pub fn save<'a>(&self, employees: impl IntoIterator<Item = &'a Employee>) -> AppResult<()> {
        let mut buf = String::new();
        for e in employees {
            buf.push_str(&encode_line(e));
            buf.push('\n');
        }
        for line in self.unreadable.borrow().iter() {
            buf.push_str(line);
            buf.push('\n');
        }

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| AppError::storage(dir, e))?;
        }

        let tmp = self.path.with_extension("tmp");
        let write = || -> io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(buf.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        };
        write().map_err(|e| AppError::storage(&self.path, e))
    }
}

pub fn encode_line(e: &Employee) -> String {
    let (is_manager, has_master) = e.role().to_flags();
    format!(
        "{name}|{id}|{pay}|{mgr}|{pin}|{master}|{status}",
        name = e.name,
        id = e.id,
        pay = e.pay,
        mgr = u8::from(is_manager),
        pin = e.pin().map(|p| p.value()).unwrap_or(0),
        master = u8::from(has_master),
        status = e.time_status.to_code(),
    )
}

pub fn decode_line(line: &str) -> Option<Employee> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_DELIMITER).collect();
    let [name, id, pay, mgr, pin, master, status] = fields.as_slice() else {
        return None;
    };

    let id = EmployeeId::new(id.trim().parse().ok()?).ok()?;
    let pay: f64 = pay.trim().parse().ok()?;
    if !pay.is_finite() || pay < 0.0 {
        return None;
    }
    let role = Role::from_flags(parse_flag(mgr)?, parse_flag(master)?);

    // 0 is the "pin not created yet" sentinel; anything else that is not a
    // 4-digit pin is read the same way and fixed through a role change
    let raw_pin = pin.trim().parse::<u32>().ok();
    let pin = raw_pin
        .filter(|v| *v != 0)
        .and_then(|v| ManagerPin::new(v).ok());
    if pin.is_none() && raw_pin != Some(0) {
        warning(format!(
            "Employee {}: stored pin is not 4 digits, treating it as unset",
            id
        ));
    }

    let status = match status.trim().parse::<u8>().ok().and_then(TimeStatus::from_code) {
        Some(s) => s,
        None => {
            warning(format!(
                "Employee {}: unknown time status, treating it as off the clock",
                id
            ));
            TimeStatus::OffClock
        }
    };

    Some(Employee::new(id, *name, pay, role, pin, status))
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim() {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}
