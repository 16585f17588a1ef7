pub mod command;
pub mod run;

pub use command::Cli;
pub use run::{build_state, run_app};
