//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{parse, payload, records, shapes};

/// Inspect and validate Monoid protocol documents.
#[derive(Parser, Debug)]
#[command(name = "monoid")]
#[command(author, version = env!("MONOID_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a document against a shape and print it back
    Parse(parse::ParseArgs),

    /// Print the payload of a message
    Payload(payload::PayloadArgs),

    /// Extract records from a newline-delimited message stream
    Records(records::RecordsArgs),

    /// List the shape names accepted by --shape
    Shapes(shapes::ShapesArgs),
}
