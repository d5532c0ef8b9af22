use clap::Parser;

/// Command-line interface definition for rpomodoro.
/// Everything else happens in the interactive menu.
#[derive(Parser, Debug)]
#[command(
    name = "rpomodoro",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal focus timer: big block digits, a daily goal and a progress bar",
    long_about = None
)]
pub struct Cli {
    /// Override the settings record path (useful for tests or a second profile)
    #[arg(long = "data")]
    pub data: Option<String>,

    /// Log level for the file log (error, warn, info, debug, trace)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}
