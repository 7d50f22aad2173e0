/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("compose", "bringing up stack {}", project_name);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod command;
pub mod error;
pub mod wrapper;

pub use command::ComposeCommand;
pub use error::{Error, Result};
pub use wrapper::{ComposeOptions, ComposeWrapper};
