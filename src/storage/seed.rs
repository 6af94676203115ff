//! Sample records written on first run, when the employee file is empty.

use crate::errors::AppResult;
use crate::models::{Employee, EmployeeId, ManagerPin, Role, TimeStatus};

pub fn sample_employees() -> AppResult<Vec<Employee>> {
    let rows: [(&str, u32, f64, Role, u32, TimeStatus); 5] = [
        ("Test User", 1111111, 20.00, Role::Master, 1111, TimeStatus::OnClock),
        ("Alex Martinez", 2039485, 15.25, Role::Associate, 0, TimeStatus::OnClock),
        ("Samantha Lee", 4012346, 16.10, Role::Manager, 2864, TimeStatus::OnMeal),
        ("Jordan Patel", 1964273, 15.75, Role::Associate, 0, TimeStatus::OnMeal),
        ("Chris Donovan", 4012348, 17.00, Role::Associate, 0, TimeStatus::OnClock),
    ];

    rows.into_iter()
        .map(|(name, id, pay, role, pin, status)| -> AppResult<Employee> {
            let pin = if pin == 0 { None } else { Some(ManagerPin::new(pin)?) };
            Ok(Employee::new(EmployeeId::new(id)?, name, pay, role, pin, status))
        })
        .collect()
}
