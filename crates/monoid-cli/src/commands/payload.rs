//! Payload command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use monoid_core::Message;

use crate::{input, output};

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Input file holding one message (defaults to stdin)
    pub file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: PayloadArgs) -> Result<()> {
    let text = input::read_to_string(args.file.as_deref())?;
    let message: Message = monoid_core::from_str(&text).context("Input is not a valid Message")?;

    output::field("type", message.message_type().as_str());

    match &message {
        Message::Schema(schemas) => output::document(schemas, args.pretty),
        Message::Record(record) => output::document(record, args.pretty),
        Message::Spec(spec) => output::document(spec, args.pretty),
        Message::Validate(validate) => output::document(validate, args.pretty),
    }
}
