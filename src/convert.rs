//! convert command: rewrite npm package references as unpkg CDN links

use crate::rewrite::convert;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;

#[derive(Args)]
pub struct ConvertArgs {
    /// File containing package references to convert
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Convert a reference given directly on the command line
    #[arg(long)]
    text: Option<String>,

    /// Read input from stdin
    #[arg(long)]
    stdin: bool,

    /// Output the conversion result as compact JSON
    #[arg(long)]
    json: bool,
}

/// Run the convert command
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let input = get_input(&args)?;
    let result = convert(&input);

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    for line in &result.lines {
        println!("{}", line.render());
    }

    Ok(())
}

/// Get input text from --text, stdin, or a file
fn get_input(args: &ConvertArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if args.stdin {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return Ok(input);
    }

    if let Some(file) = &args.file {
        return std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read file: {}", file));
    }

    eprintln!("Usage:");
    eprintln!("  unpkger convert --text <TEXT>  Convert a reference given as an argument");
    eprintln!("  unpkger convert --stdin        Convert text read from stdin");
    eprintln!("  unpkger convert <FILE>         Convert references found in a file");
    std::process::exit(1);
}
