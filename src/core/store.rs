//! In-memory employee collection, keyed by personnel number.
//!
//! Records keep their file order so a save/load cycle does not shuffle the
//! file, but every lookup goes through the id; positions never leave this
//! module.

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EmployeeId};
use crate::ui::messages::warning;

#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded records. A repeated id keeps the first record.
    pub fn from_records(records: Vec<Employee>) -> Self {
        let mut store = Self::new();
        for e in records {
            if store.contains(e.id) {
                warning(format!("Duplicate personnel # {} ignored", e.id));
                continue;
            }
            store.employees.push(e);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn require(&self, id: EmployeeId) -> AppResult<&Employee> {
        self.get(id).ok_or_else(|| not_found(id))
    }

    pub fn require_mut(&mut self, id: EmployeeId) -> AppResult<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(id))
    }

    pub fn insert(&mut self, employee: Employee) -> AppResult<()> {
        if self.contains(employee.id) {
            return Err(AppError::InvalidInput(format!(
                "personnel # {} already exists",
                employee.id
            )));
        }
        self.employees.push(employee);
        Ok(())
    }

    pub fn remove(&mut self, id: EmployeeId) -> AppResult<Employee> {
        let pos = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.employees.remove(pos))
    }
}

fn not_found(id: EmployeeId) -> AppError {
    AppError::NotFound(format!("personnel # {} not found", id))
}
