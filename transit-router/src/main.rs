use clap::Parser;
use log::error;
use transit_router::cli::run;
use transit_router::cli::CliArgs;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    match run::command_line_runner(&args) {
        Ok(_) => {}
        Err(e) => error!("{}", e),
    }
}
