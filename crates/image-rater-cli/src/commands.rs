use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "image-rater")]
#[command(about = "Collect human Likert ratings for a folder of study images", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive rating session over the configured image folder
    Run {
        /// Fixed shuffle seed for a reproducible presentation order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the number of ratings collected so far
    Tally,
    /// Print configuration values
    PrintConfig,
}
