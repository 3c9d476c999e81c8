//! Command implementations.

pub mod add;
pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod update;

pub use add::AddCommand;
pub use completions::CompletionsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use init::InitCommand;
pub use update::UpdateCommand;
