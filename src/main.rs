//! punchclock main entrypoint.

use punchclock::run;
use punchclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
