//! Interactive game module
//!
//! Provides a readline-based interface that drives a
//! [`SessionEngine`](tod_application::SessionEngine).

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::GameRepl;
