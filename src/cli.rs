use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input screenplay (tab-indented plain text)
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
    /// Print the statistics as JSON on stdout
    #[arg(long)]
    pub print_stats: bool,
    /// Skip the JSON-lines dialogue dataset
    #[arg(long)]
    pub no_dataset: bool,
    /// Log scene boundaries and other parser details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter; `RUST_LOG` still wins when set.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
