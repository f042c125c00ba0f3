//! npm reference recognition and unpkg URL rewriting
//!
//! The converter is a fixed-priority list of pattern rules, each applied as
//! a global find-and-replace pass over shared text. Later rules see the
//! output of earlier rules; rewritten URLs no longer match any rule, so a
//! second conversion over produced output is a no-op.

use regex::{Captures, Regex};
use serde::Serialize;

/// Base URL of the unpkg CDN
pub const UNPKG_BASE: &str = "https://unpkg.com";

/// An npm package reference captured from input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    /// Package name; scoped names keep the leading `@scope/`
    pub name: String,
    /// Version as written, `None` when the reference carries no version
    pub version: Option<String>,
}

impl PackageReference {
    fn from_captures(caps: &Captures) -> Self {
        Self {
            name: caps[1].to_string(),
            version: caps.get(2).map(|m| m.as_str().to_string()),
        }
    }

    /// Version to use in URLs: the captured one, or `latest`
    pub fn resolved_version(&self) -> &str {
        self.version.as_deref().unwrap_or("latest")
    }

    /// CDN URL for this reference
    pub fn unpkg_url(&self) -> String {
        format!("{}/{}@{}", UNPKG_BASE, self.name, self.resolved_version())
    }
}

/// How a converted line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Plain converted (or passed-through) line
    Result,
    /// Direct CDN file link, emitted for registry URLs
    CdnLink,
    /// Package browsing link, emitted for registry URLs
    BrowsePackage,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Result => write!(f, "Result"),
            Label::CdnLink => write!(f, "CDN Link"),
            Label::BrowsePackage => write!(f, "Browse Package"),
        }
    }
}

/// One line of converter output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub label: Label,
    pub url: String,
}

impl OutputLine {
    /// Wire form with the label-derived prefix (`CDN: `, `Browse: `)
    pub fn render(&self) -> String {
        match self.label {
            Label::Result => self.url.clone(),
            Label::CdnLink => format!("CDN: {}", self.url),
            Label::BrowsePackage => format!("Browse: {}", self.url),
        }
    }
}

/// Ordered output of one conversion call
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub lines: Vec<OutputLine>,
}

impl ConversionResult {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The output line, when the conversion produced exactly one
    pub fn single(&self) -> Option<&OutputLine> {
        match self.lines.as_slice() {
            [line] => Some(line),
            _ => None,
        }
    }
}

/// A recognition rule: a pattern plus the replacement it produces
struct Rule {
    pattern: Regex,
    render: fn(&PackageReference) -> String,
}

impl Rule {
    fn new(pattern: &str, render: fn(&PackageReference) -> String) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            render,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                (self.render)(&PackageReference::from_captures(caps))
            })
            .into_owned()
    }
}

/// Recognition rules in priority order
fn rules() -> Vec<Rule> {
    vec![
        // npm install package[@version]
        Rule::new(r"npm install\s+(@?[A-Za-z0-9._/-]+)(?:@(\S+))?", script_tag),
        // import ... from 'package[@version]'
        Rule::new(
            r#"import\s+.*?\s+from\s+['"](@?[A-Za-z0-9._/-]+)(?:@([^'"]+))?['"]"#,
            bare_url,
        ),
        // require('package[@version]')
        Rule::new(
            r#"require\(['"](@?[A-Za-z0-9._/-]+)(?:@([^'"]+))?['"]\)"#,
            bare_url,
        ),
        // npm registry URLs, optionally pinned with /v/<version>
        Rule::new(
            r"https?://(?:www\.)?npmjs\.com/package/(@?[A-Za-z0-9._/-]+)",
            cdn_and_browse,
        ),
        // A whole line that is nothing but a package specifier
        Rule::new(r"(?m)^(@?[A-Za-z0-9._/-]+)(?:@(\S+))?$", bare_url),
    ]
}

fn script_tag(reference: &PackageReference) -> String {
    format!(r#"<script src="{}"></script>"#, reference.unpkg_url())
}

fn bare_url(reference: &PackageReference) -> String {
    reference.unpkg_url()
}

fn cdn_and_browse(reference: &PackageReference) -> String {
    // The registry pattern's name class also swallows a trailing
    // `/v/<version>` path segment; split it back apart so pinned
    // registry URLs resolve to the pinned version.
    let (name, version) = match reference.name.split_once("/v/") {
        Some((name, version)) => (name, Some(version)),
        None => (reference.name.as_str(), reference.version.as_deref()),
    };
    let url = format!("{}/{}@{}", UNPKG_BASE, name, version.unwrap_or("latest"));
    format!("CDN: {url}/<file-path>\nBrowse: {url}/")
}

/// Convert free-form text containing npm package references into unpkg
/// CDN links.
///
/// Total over its input: empty or whitespace-only text yields an empty
/// result, and unrecognized text passes through unchanged as `Result`
/// lines. Matches surface in the order they appear in the text.
pub fn convert(text: &str) -> ConversionResult {
    if text.trim().is_empty() {
        return ConversionResult::default();
    }

    let mut rewritten = text.to_string();
    for rule in rules() {
        rewritten = rule.apply(&rewritten);
    }

    let lines = rewritten
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(label_line)
        .collect();

    ConversionResult { lines }
}

/// Label a rewritten line by its prefix, stripping the prefix from the
/// stored URL
fn label_line(line: &str) -> OutputLine {
    if let Some(rest) = line.strip_prefix("CDN:") {
        OutputLine {
            label: Label::CdnLink,
            url: rest.trim_start().to_string(),
        }
    } else if let Some(rest) = line.strip_prefix("Browse:") {
        OutputLine {
            label: Label::BrowsePackage,
            url: rest.trim_start().to_string(),
        }
    } else {
        OutputLine {
            label: Label::Result,
            url: line.to_string(),
        }
    }
}
