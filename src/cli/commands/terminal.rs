//! Interactive punch-clock loop.
//!
//! Every login cycle reloads the employee file, authenticates one operator,
//! runs one menu action and returns to the login prompt. All values are
//! gathered here before the core operation is called.

use super::employees::{print_directory, report_added, report_pay, report_role};
use super::punch::{last_punch_message, punch_message};
use super::roster::print_roster;
use crate::cli::prompt::Prompt;
use crate::config::Config;
use crate::core::admin::{validate_name, validate_pay};
use crate::core::{AdminSession, Session, TimeClock, permissions};
use crate::errors::{AppError, AppResult};
use crate::models::{EmployeeDraft, EmployeeId, ManagerPin, PunchKind, Role, RoleChange};
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::display_name;
use std::io::{self, BufRead};

/// `None` from a prompt means stdin is closed.
macro_rules! answer {
    ($e:expr) => {
        match $e? {
            Some(v) => v,
            None => return Ok(Flow::Quit),
        }
    };
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Print business-rule failures and keep going; anything else is fatal.
fn report<T>(result: AppResult<T>) -> AppResult<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_business_rule() => {
            warning(e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn parse_binary(s: &str) -> AppResult<bool> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(AppError::InvalidInput("Enter only 0 or 1".into())),
    }
}

fn parse_pay(s: &str) -> AppResult<f64> {
    let pay = s
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput("Pay must be a positive number".into()))?;
    validate_pay(pay)
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut clock = TimeClock::open(cfg)?;
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());

    while run_cycle(&mut prompt, &mut clock)? == Flow::Continue {}
    Ok(())
}

fn run_cycle<R: BufRead>(prompt: &mut Prompt<R>, clock: &mut TimeClock) -> AppResult<Flow> {
    clock.reload()?;
    header(clock.now(), None);

    let session = answer!(prompt.ask_until("Enter your personnel #: ", |s| {
        Session::login(clock.store(), EmployeeId::parse(s)?)
    }));
    let actor = clock.store().require(session.actor())?.clone();
    header(clock.now(), Some(display_name(&actor).as_str()));

    println!("1 - Clock In");
    println!("2 - Clock Out");
    println!("3 - Start Meal");
    println!("4 - End Meal");
    println!("5 - Show Last Punch");
    let upper = if actor.is_manager() {
        println!("6 - View Clocked In");
        println!("7 - Edit Employee Info");
        println!("8 - Cancel");
        8
    } else {
        println!("6 - Cancel");
        6
    };

    let choice = answer!(prompt.ask_until("-> ", |s| match s.parse::<u8>() {
        Ok(n) if (1..=upper).contains(&n) => Ok(n),
        _ => Err(AppError::InvalidInput("Invalid, try again".into())),
    }));

    let punch = match choice {
        1 => Some(PunchKind::ClockIn),
        2 => Some(PunchKind::ClockOut),
        3 => Some(PunchKind::StartMeal),
        4 => Some(PunchKind::EndMeal),
        _ => None,
    };
    if let Some(kind) = punch {
        if let Some(ev) = report(clock.punch(actor.id, kind))? {
            success(punch_message(&ev));
        }
        return Ok(Flow::Continue);
    }

    match choice {
        5 => info(last_punch_message(clock.last_punch(actor.id)?.as_ref())),
        6 if actor.is_manager() => {
            if let Some(roster) = report(clock.roster(actor.id))? {
                print_roster(&roster);
            }
        }
        7 if actor.is_manager() => {
            let pin = answer!(prompt.ask_until("Enter manager pin: ", ManagerPin::parse));
            match session.unlock_admin(clock.store(), pin) {
                Ok(admin) => return edit_menu(prompt, clock, &admin),
                // wrong pin: back to the login prompt
                Err(e) if e.ends_session() => error(e),
                Err(e) => {
                    report::<()>(Err(e))?;
                }
            }
        }
        _ => {}
    }

    Ok(Flow::Continue)
}

fn edit_menu<R: BufRead>(
    prompt: &mut Prompt<R>,
    clock: &mut TimeClock,
    admin: &AdminSession,
) -> AppResult<Flow> {
    loop {
        print_directory(&clock.directory(admin)?);
        println!();
        println!("Would you like to:");
        println!("1 - Add");
        println!("2 - Remove");
        println!("3 - Change pay");
        println!("4 - Change Status");
        println!("5 - Exit");

        let Some(choice) = prompt.ask("->")? else {
            return Ok(Flow::Quit);
        };
        let flow = match choice.as_str() {
            "1" => add(prompt, clock, admin)?,
            "2" => remove(prompt, clock, admin)?,
            "3" => change_pay(prompt, clock, admin)?,
            "4" => change_status(prompt, clock, admin)?,
            "5" => return Ok(Flow::Continue),
            _ => {
                warning("Unknown, try again");
                Flow::Continue
            }
        };
        if flow == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
}

fn add<R: BufRead>(
    prompt: &mut Prompt<R>,
    clock: &mut TimeClock,
    admin: &AdminSession,
) -> AppResult<Flow> {
    let actor = clock.store().require(admin.actor())?.clone();

    let name = answer!(prompt.ask_until("Enter name: ", validate_name));
    let id = answer!(prompt.ask_until("Enter personnel #: ", |s| {
        let id = EmployeeId::parse(s)?;
        if clock.store().contains(id) {
            return Err(AppError::InvalidInput("ID already exists".into()));
        }
        Ok(id)
    }));
    let pay = answer!(prompt.ask_until("Enter pay: ", parse_pay));

    // Role and pin questions are only asked of master access.
    let mut role = Role::Associate;
    if actor.has_master() {
        let manager = answer!(prompt.ask_until(
            "Enter 0 for associate or 1 for manager: ",
            parse_binary
        ));
        if manager {
            let master = answer!(prompt.ask_until(
                "Enter 0 to continue or 1 to grant master access: ",
                parse_binary
            ));
            role = if master { Role::Master } else { Role::Manager };
        }
    }
    let pin = if role.is_manager() {
        Some(answer!(
            prompt.ask_until("Enter 4-digit manager pin: ", ManagerPin::parse)
        ))
    } else {
        None
    };

    let draft = EmployeeDraft {
        id,
        name,
        pay,
        role,
        pin,
    };
    if let Some(outcome) = report(clock.add_employee(admin, draft))? {
        report_added(&outcome);
    }
    Ok(Flow::Continue)
}

fn remove<R: BufRead>(
    prompt: &mut Prompt<R>,
    clock: &mut TimeClock,
    admin: &AdminSession,
) -> AppResult<Flow> {
    let id = answer!(prompt.ask_until("Enter employee #: ", EmployeeId::parse));
    if let Some(removed) = report(clock.remove_employee(admin, id))? {
        success(format!("{} has been removed", removed.name));
    }
    Ok(Flow::Continue)
}

fn change_pay<R: BufRead>(
    prompt: &mut Prompt<R>,
    clock: &mut TimeClock,
    admin: &AdminSession,
) -> AppResult<Flow> {
    let Some(id) = report(
        prompt
            .ask("Enter personnel #: ")
            .and_then(|s| s.map(|s| EmployeeId::parse(&s)).transpose()),
    )?
    else {
        return Ok(Flow::Continue);
    };
    let Some(id) = id else {
        return Ok(Flow::Quit);
    };

    // Permission first, so nobody types an amount that will be refused.
    let precheck = clock.store().require(admin.actor()).and_then(|actor| {
        clock
            .store()
            .require(id)
            .and_then(|target| permissions::can_change_pay(actor, target))
    });
    if report(precheck)?.is_none() {
        return Ok(Flow::Continue);
    }

    let amount = answer!(prompt.ask("Enter new pay: "));
    let Some(amount) = report(parse_pay(&amount))? else {
        return Ok(Flow::Continue);
    };
    if let Some(change) = report(clock.change_pay(admin, id, amount))? {
        report_pay(&change);
    }
    Ok(Flow::Continue)
}

fn change_status<R: BufRead>(
    prompt: &mut Prompt<R>,
    clock: &mut TimeClock,
    admin: &AdminSession,
) -> AppResult<Flow> {
    let Some(id) = report(
        prompt
            .ask("Enter personnel #: ")
            .and_then(|s| s.map(|s| EmployeeId::parse(&s)).transpose()),
    )?
    else {
        return Ok(Flow::Continue);
    };
    let Some(id) = id else {
        return Ok(Flow::Quit);
    };

    let precheck = clock.store().require(admin.actor()).and_then(|actor| {
        clock
            .store()
            .require(id)
            .and_then(|target| permissions::can_change_status(actor, target))
    });
    if report(precheck)?.is_none() {
        return Ok(Flow::Continue);
    }

    println!();
    println!("Would you like to:");
    println!("1 - Promote to manager");
    println!("2 - Demote to associate");
    println!("3 - Grant master access");
    println!("4 - Remove master access");
    let choice = answer!(prompt.ask("-> "));
    let op = match choice.as_str() {
        "1" => RoleChange::PromoteToManager,
        "2" => RoleChange::DemoteToAssociate,
        "3" => RoleChange::GrantMaster,
        "4" => RoleChange::RevokeMaster,
        _ => {
            warning("Invalid choice.");
            return Ok(Flow::Continue);
        }
    };

    // Ask for a pin only when the change will really create one.
    let target = clock.store().require(id)?.clone();
    let actor = clock.store().require(admin.actor())?.clone();
    let will_create_pin = permissions::can_change_role(&actor, &target, op).is_ok()
        && op.needs_pin()
        && op.apply_to(target.role()).is_some()
        && target.pin().is_none();
    let new_pin = if will_create_pin {
        Some(answer!(
            prompt.ask_until("Create manager pin: ", ManagerPin::parse)
        ))
    } else {
        None
    };

    if let Some(outcome) = report(clock.change_role(admin, id, op, new_pin))? {
        report_role(&outcome);
    }
    Ok(Flow::Continue)
}
