pub mod classify;
pub mod config;
pub mod grammar;
pub mod interpreter;
pub mod result;

pub use classify::{classify, CommandFamily};
pub use config::TerminalConfig;
pub use interpreter::CommandInterpreter;
pub use result::{
    CommandError, CommandPayload, CommandResult, ErrorKind, ErrorPayload,
};
