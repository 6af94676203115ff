//! Status lines printed to the operator.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", styled(Colour::Red, ICON_ERR), msg);
}

/// Terminal banner: title, current time and, once logged in, the actor.
pub fn header<T: fmt::Display>(now: T, actor: Option<&str>) {
    println!();
    println!(
        "{}",
        Colour::Blue.bold().paint("Employee Time Management System")
    );
    println!("{}", now);
    if let Some(name) = actor {
        println!("{}", name);
    }
}
