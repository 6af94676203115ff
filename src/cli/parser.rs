use crate::models::{Role, RoleChange};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for punchclock
/// Single-operator punch clock with manager administration
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A punch-clock terminal: clock in/out, meal breaks and employee administration",
    long_about = None
)]
pub struct Cli {
    /// Keep every data file in this directory (useful for tests or a second site)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Personnel number of the employee at the terminal.
#[derive(Args, Debug, Clone)]
pub struct ActorArgs {
    #[arg(long = "id", value_name = "PERSONNEL#", help = "Your 7-digit personnel #")]
    pub id: String,
}

/// Manager credentials for the edit-employee commands.
#[derive(Args, Debug, Clone)]
pub struct AdminArgs {
    #[arg(long = "id", value_name = "PERSONNEL#", help = "Your 7-digit personnel #")]
    pub id: String,

    #[arg(long = "pin", value_name = "PIN", help = "Your 4-digit manager pin")]
    pub pin: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, data files and activity log
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print rows from the activity log")]
        print: bool,
    },

    /// Clock in
    ClockIn(ActorArgs),

    /// Clock out
    ClockOut(ActorArgs),

    /// Start a meal break
    StartMeal(ActorArgs),

    /// End a meal break
    EndMeal(ActorArgs),

    /// Show your last punch
    Last(ActorArgs),

    /// Show all your punches, oldest first
    History(ActorArgs),

    /// View who is clocked in and on a meal (managers)
    Roster(ActorArgs),

    /// Edit employee info (managers, pin required)
    Employees {
        #[command(subcommand)]
        action: EmployeeCommands,
    },

    /// Interactive punch-clock terminal
    Terminal,
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List employees
    List(AdminArgs),

    /// Add an employee
    Add {
        #[command(flatten)]
        auth: AdminArgs,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "new-id", value_name = "PERSONNEL#")]
        new_id: String,

        #[arg(long = "pay", allow_negative_numbers = true)]
        pay: f64,

        /// Only honoured for actors with master access
        #[arg(long = "role", value_enum, default_value = "associate")]
        role: Role,

        #[arg(long = "new-pin", value_name = "PIN", help = "Manager pin for the new employee")]
        new_pin: Option<String>,
    },

    /// Remove an employee
    Remove {
        #[command(flatten)]
        auth: AdminArgs,

        #[arg(long = "target", value_name = "PERSONNEL#")]
        target: String,
    },

    /// Change an employee's pay
    Pay {
        #[command(flatten)]
        auth: AdminArgs,

        #[arg(long = "target", value_name = "PERSONNEL#")]
        target: String,

        #[arg(long = "amount", allow_negative_numbers = true)]
        amount: f64,
    },

    /// Promote, demote, grant or revoke master access
    Role {
        #[command(flatten)]
        auth: AdminArgs,

        #[arg(long = "target", value_name = "PERSONNEL#")]
        target: String,

        #[arg(long = "op", value_enum)]
        op: RoleChange,

        #[arg(long = "new-pin", value_name = "PIN", help = "Pin to create if the target has none")]
        new_pin: Option<String>,
    },
}
