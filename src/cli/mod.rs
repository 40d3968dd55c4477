pub mod command;
pub mod display;
pub mod error;
pub mod interface;

pub use command::{Command, Invocation};
pub use error::{CliError, InputError};
pub use interface::{insert_once, run_invocation, serve, Outcome, CLI};
