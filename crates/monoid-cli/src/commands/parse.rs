//! Parse command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use monoid_core::Shape;

use crate::{input, output};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Shape to validate against (see `monoid shapes`)
    #[arg(long, short)]
    pub shape: Shape,

    /// Input file (defaults to stdin)
    pub file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let text = input::read_to_string(args.file.as_deref())?;
    let value: serde_json::Value =
        serde_json::from_str(&text).context("Input is not valid JSON")?;

    let document = monoid_core::parse(args.shape, value)
        .with_context(|| format!("Input is not a valid {}", args.shape.type_name()))?;
    info!(shape = %args.shape, "document is valid");

    let canonical = monoid_core::serialize(&document)?;
    output::document(&canonical, args.pretty)
}
