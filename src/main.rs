//! unpkger CLI
//!
//! Converts npm package references (install commands, import/require
//! statements, registry URLs, bare specifiers) into unpkg CDN links.

use anyhow::Result;
use clap::{Parser, Subcommand};

use unpkger::convert::{run_convert, ConvertArgs};
use unpkger::examples::{run_examples, ExamplesArgs};

#[derive(Parser)]
#[command(name = "unpkger")]
#[command(version)]
#[command(about = "Convert npm package references to unpkg CDN links")]
#[command(long_about = "Turns npm install commands, import/require statements, npm registry URLs, and bare package specifiers into unpkg CDN links for browser-ready prototyping.\n\nCommands:\n  convert    Convert references in text, a file, or stdin\n  examples   Show example inputs and their conversions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert npm package references to unpkg CDN links
    Convert(ConvertArgs),
    /// Show example inputs and their conversions
    Examples(ExamplesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => run_convert(args),
        Commands::Examples(args) => run_examples(args),
    }
}
