use super::admin_login;
use crate::cli::parser::{Commands, EmployeeCommands};
use crate::config::Config;
use crate::core::admin::{AddOutcome, PayChange};
use crate::core::{DirectoryRow, RoleOutcome, TimeClock};
use crate::errors::AppResult;
use crate::models::{EmployeeDraft, EmployeeId, ManagerPin};
use crate::ui::messages::{info, success, warning};
use crate::utils::format_pay;
use crate::utils::table::{Column, Table};

pub fn print_directory(rows: &[DirectoryRow]) {
    let mut table = Table::new(vec![
        Column::new("ID", 9),
        Column::new("NAME", 20),
        Column::new("PAY", 10),
        Column::new("ROLE", 4),
    ]);
    for r in rows {
        table.add_row(vec![
            r.id_label.clone(),
            r.name.clone(),
            format_pay(r.pay),
            r.role.tag().to_string(),
        ]);
    }
    println!("\nEMPLOYEES:");
    print!("{}", table.render());
}

pub fn report_added(outcome: &AddOutcome) {
    if outcome.downgraded {
        warning(format!(
            "Only master access can add managers: {} was added as an associate",
            outcome.employee.name
        ));
    }
    success("Employee added successfully.");
}

pub fn report_pay(change: &PayChange) {
    success(format!(
        "Pay updated: {} ({} to {})",
        change.name,
        format_pay(change.old_pay),
        format_pay(change.new_pay)
    ));
}

pub fn report_role(outcome: &RoleOutcome) {
    match outcome {
        RoleOutcome::Changed { name, to, .. } => {
            success(format!("{} is now {:?}", name, to));
        }
        RoleOutcome::Unchanged(msg) => info(msg),
    }
}

fn optional_pin(raw: &Option<String>) -> AppResult<Option<ManagerPin>> {
    raw.as_deref().map(ManagerPin::parse).transpose()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employees { action } = cmd else {
        return Ok(());
    };

    let mut clock = TimeClock::open(cfg)?;

    match action {
        EmployeeCommands::List(auth) => {
            let admin = admin_login(&clock, auth)?;
            print_directory(&clock.directory(&admin)?);
        }
        EmployeeCommands::Add {
            auth,
            name,
            new_id,
            pay,
            role,
            new_pin,
        } => {
            let admin = admin_login(&clock, auth)?;
            let draft = EmployeeDraft {
                id: EmployeeId::parse(new_id)?,
                name: name.clone(),
                pay: *pay,
                role: *role,
                pin: optional_pin(new_pin)?,
            };
            report_added(&clock.add_employee(&admin, draft)?);
        }
        EmployeeCommands::Remove { auth, target } => {
            let admin = admin_login(&clock, auth)?;
            let removed = clock.remove_employee(&admin, EmployeeId::parse(target)?)?;
            success(format!("{} has been removed", removed.name));
        }
        EmployeeCommands::Pay {
            auth,
            target,
            amount,
        } => {
            let admin = admin_login(&clock, auth)?;
            report_pay(&clock.change_pay(&admin, EmployeeId::parse(target)?, *amount)?);
        }
        EmployeeCommands::Role {
            auth,
            target,
            op,
            new_pin,
        } => {
            let admin = admin_login(&clock, auth)?;
            let outcome = clock.change_role(
                &admin,
                EmployeeId::parse(target)?,
                *op,
                optional_pin(new_pin)?,
            )?;
            report_role(&outcome);
        }
    }

    Ok(())
}
