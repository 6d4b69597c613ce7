pub mod executor;
pub mod shell_command;

pub use executor::{CommandExecutor, CommandOutput, SystemExecutor, tail_lines};
pub use shell_command::ShellCommand;
