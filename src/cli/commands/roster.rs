use super::login;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Roster, TimeClock};
use crate::errors::AppResult;
use crate::models::Employee;
use crate::utils::formatting::pad_right;

fn roster_line(e: &Employee) -> String {
    format!("{}{}", pad_right(&e.name, 20), e.role().tag())
}

pub fn print_roster(roster: &Roster) {
    println!("\n--Clocked In--");
    if roster.on_clock.is_empty() {
        println!("\nNo employees are clocked in");
    }
    for e in &roster.on_clock {
        println!("{}", roster_line(e));
    }

    if !roster.on_meal.is_empty() {
        println!("\n--On Meal--");
        for e in &roster.on_meal {
            println!("{}", roster_line(e));
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster(args) = cmd {
        let clock = TimeClock::open(cfg)?;
        let session = login(&clock, &args.id)?;
        print_roster(&clock.roster(session.actor())?);
    }
    Ok(())
}
