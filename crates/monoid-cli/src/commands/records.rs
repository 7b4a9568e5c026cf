//! Records command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use monoid_core::{Message, MessageReader, Record};

use crate::{input, output};

#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// Input file holding one message per line (defaults to stdin)
    pub file: Option<PathBuf>,

    /// Only print records from this schema
    #[arg(long)]
    pub schema: Option<String>,

    /// Fail on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: RecordsArgs) -> Result<()> {
    let reader = MessageReader::new(input::open(args.file.as_deref())?);

    let records: Box<dyn Iterator<Item = monoid_core::Result<Record>>> = if args.strict {
        Box::new(reader.filter_map(|item| match item {
            Ok(Message::Record(record)) => Some(Ok(record)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        }))
    } else {
        Box::new(reader.records())
    };

    let mut count = 0usize;
    for record in records {
        let record = record.context("Failed to read message stream")?;

        if let Some(schema) = &args.schema
            && record.schema_name != *schema
        {
            debug!(schema = %record.schema_name, "skipping record from other schema");
            continue;
        }

        output::json(&record)?;
        count += 1;
    }

    info!(count, "finished reading records");
    let noun = if count == 1 { "record" } else { "records" };
    output::success(&format!("{} {}", count, noun));

    Ok(())
}
