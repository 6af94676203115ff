use super::login;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeClock;
use crate::errors::AppResult;
use crate::models::{PunchEvent, PunchKind};
use crate::ui::messages::{info, success};

pub fn punch_message(ev: &PunchEvent) -> String {
    format!(
        "{}, {} at {}",
        ev.employee_name,
        ev.kind.describe(),
        ev.timestamp
    )
}

pub fn last_punch_message(last: Option<&PunchEvent>) -> String {
    match last {
        Some(ev) => format!("Last punch: {} at {}", ev.kind.to_ledger_str(), ev.timestamp),
        None => "No punches found.".to_string(),
    }
}

/// clock-in, clock-out, start-meal, end-meal, last, history
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (args, kind) = match cmd {
        Commands::ClockIn(a) => (a, Some(PunchKind::ClockIn)),
        Commands::ClockOut(a) => (a, Some(PunchKind::ClockOut)),
        Commands::StartMeal(a) => (a, Some(PunchKind::StartMeal)),
        Commands::EndMeal(a) => (a, Some(PunchKind::EndMeal)),
        Commands::Last(a) | Commands::History(a) => (a, None),
        _ => return Ok(()),
    };

    let mut clock = TimeClock::open(cfg)?;
    let session = login(&clock, &args.id)?;

    if let Some(kind) = kind {
        let ev = clock.punch(session.actor(), kind)?;
        success(punch_message(&ev));
        return Ok(());
    }

    if matches!(cmd, Commands::History(_)) {
        let events = clock.punch_history(session.actor())?;
        if events.is_empty() {
            info("No punches found.");
        }
        for ev in &events {
            println!("{:<20} {}", ev.timestamp, ev.kind.to_ledger_str());
        }
    } else {
        let last = clock.last_punch(session.actor())?;
        info(last_punch_message(last.as_ref()));
    }

    Ok(())
}
