pub mod cli_args;
pub mod run;

pub use cli_args::CliArgs;
