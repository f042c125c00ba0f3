//! examples command: show gallery inputs and their conversions

use crate::rewrite::{convert, OutputLine};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

/// Gallery inputs, one per supported reference syntax
pub const EXAMPLES: [&str; 6] = [
    "npm install react@18.2.0",
    r#"import React from "react""#,
    r#"require("lodash")"#,
    "https://www.npmjs.com/package/@hybridxweb/copyright-x",
    "https://www.npmjs.com/package/axios",
    "@types/node@20.0.0",
];

#[derive(Args)]
pub struct ExamplesArgs {
    /// Output the gallery as compact JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ExampleEntry {
    input: String,
    lines: Vec<OutputLine>,
}

/// Run the examples command
pub fn run_examples(args: ExamplesArgs) -> Result<()> {
    if args.json {
        let entries: Vec<ExampleEntry> = EXAMPLES
            .iter()
            .map(|input| ExampleEntry {
                input: input.to_string(),
                lines: convert(input).lines,
            })
            .collect();
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }

    for input in EXAMPLES {
        println!("{input}");
        for line in &convert(input).lines {
            println!("  -> {}", line.render());
        }
        println!();
    }

    Ok(())
}
