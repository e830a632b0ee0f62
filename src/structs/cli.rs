use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "archaeologist")]
#[clap(about = "Technical debt analysis for git repositories", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
