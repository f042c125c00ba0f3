//! unpkger: Convert npm package references to unpkg CDN links
//!
//! Commands:
//! - convert: rewrite references in text, a file, or stdin
//! - examples: show gallery inputs and their conversions

pub mod convert;
pub mod examples;
pub mod rewrite;

pub use rewrite::{convert, ConversionResult, Label, OutputLine, PackageReference};
