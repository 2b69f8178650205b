use clap::Parser;
use std::path::PathBuf;

/// Monitoring plugin that checks majordomo2 list membership against a fixed set of addresses.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // CONFIG
    /// Read configuration from FILE.
    #[arg(short, long = "file", value_name = "FILE", help_heading = "CONFIG")]
    pub file: PathBuf,

    // NETWORK
    /// Timeout for each request in seconds (0 leaves it to the caller).
    #[arg(long, default_value_t = 0, help_heading = "NETWORK")]
    pub timeout: u64,

    // OUTPUT
    /// Increase diagnostic logging on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "OUTPUT")]
    pub verbose: u8,
}
