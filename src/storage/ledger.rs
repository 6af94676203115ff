//! Append-only punch ledger (`punchRecords.txt`).
//!
//! One event per line: `employeeId--name--KIND--timestamp`.

use crate::errors::{AppError, AppResult};
use crate::models::{EmployeeId, PunchEvent, PunchKind};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const FIELD_DELIMITER: &str = "--";

pub struct PunchLedger {
    path: PathBuf,
}

impl PunchLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add exactly one line; prior lines are never touched.
    pub fn append(&self, event: &PunchEvent) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| AppError::storage(dir, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::storage(&self.path, e))?;

        writeln!(file, "{}", encode_line(event)).map_err(|e| AppError::storage(&self.path, e))
    }

    /// Full scan in file order. Unreadable lines are ignored.
    pub fn events(&self) -> AppResult<Vec<PunchEvent>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::storage(&self.path, e)),
        };
        Ok(content.lines().filter_map(decode_line).collect())
    }

    pub fn history_for(&self, id: EmployeeId) -> AppResult<Vec<PunchEvent>> {
        let mut events = self.events()?;
        events.retain(|ev| ev.employee_id == id);
        Ok(events)
    }

    /// The last matching line is the most recent punch.
    pub fn last_for(&self, id: EmployeeId) -> AppResult<Option<PunchEvent>> {
        Ok(self.history_for(id)?.pop())
    }
}

pub fn encode_line(ev: &PunchEvent) -> String {
    [
        ev.employee_id.to_string().as_str(),
        ev.employee_name.as_str(),
        ev.kind.to_ledger_str(),
        ev.timestamp.as_str(),
    ]
    .join(FIELD_DELIMITER)
}

pub fn decode_line(line: &str) -> Option<PunchEvent> {
    let mut parts = line.splitn(4, FIELD_DELIMITER);
    let id = parts.next()?.trim().parse().ok()?;
    let employee_name = parts.next()?.to_string();
    let kind = PunchKind::from_ledger_str(parts.next()?)?;
    let timestamp = parts.next()?.to_string();

    Some(PunchEvent {
        employee_id: EmployeeId::new(id).ok()?,
        employee_name,
        kind,
        timestamp,
    })
}
