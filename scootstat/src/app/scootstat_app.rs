use super::ScootstatOperation;
use clap::Parser;

/// command line tool for the batch analysis of e-scooter trip exports
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ScootstatApp {
    #[command(subcommand)]
    pub op: ScootstatOperation,
}
