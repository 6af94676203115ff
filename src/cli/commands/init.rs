use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::TimeClock;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the employee file, seeded with sample records when empty
///  - the activity log database
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.as_deref(), cli.test)?;

    println!("⚙️  Initializing punchclock…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("👥 Employees   : {}", cfg.employees_path().display());
    println!("🕑 Punches     : {}", cfg.punch_path().display());
    println!("🗄️  Activity log: {}", cfg.activity_db_path().display());

    let clock = TimeClock::open(&cfg)?;
    clock.record(
        "init",
        "",
        &format!("{} employees on file", clock.store().len()),
    );

    success(format!(
        "punchclock initialization completed ({} employees on file)",
        clock.store().len()
    ));
    Ok(())
}
