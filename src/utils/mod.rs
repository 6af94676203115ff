pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{display_name, format_pay};
pub use time::{Clock, FixedClock, LocalClock};
