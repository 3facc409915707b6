use clap::Parser;

/// Command-line front door for `route_search`, the in-repo way to exercise the
/// engine end to end without standing up the HTTP layer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// transit-router service configuration TOML file
    #[arg(short, long, value_name = "*.toml")]
    pub config_file: String,

    /// newline-delimited JSON file, one `{"from": [lat, lon], "to": [lat, lon]}` query per line
    #[arg(short, long, value_name = "*.json")]
    pub query_file: String,
}
