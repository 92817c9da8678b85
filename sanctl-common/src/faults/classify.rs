//! Signature matcher.
//!
//! Raw command output arrives in several shapes: plain text, structured
//! faults carrying a message or "why" field, and faults reported as a
//! list of hex problem-message codes. [`RawOutput`] is the closed set
//! of those shapes; matching first renders any of them down to one
//! string, then runs the catalog's regexes over it.
//!
//! Matching flags are part of the contract: case-insensitive,
//! multi-line, and dot-matches-newline, so a single-line pattern still
//! hits a vendor message that wraps. Numeric status codes are rendered
//! as lowercase `0x`-prefixed hex and matched as text in the same pass.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use super::catalog::{FaultPattern, FaultSignature};

/// Raw command output, one of the shapes the array (or its management
/// service) produces. Probe priority when normalizing is the
/// declaration order here: message, why, codes, mapping, verbatim text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOutput {
    /// A structured fault exposing a message field.
    Fault { message: String },
    /// An event-style fault exposing a "why" field.
    Event { why: String },
    /// A fault reported as hex problem-message codes.
    Coded { hex_codes: Vec<String> },
    /// A generic field mapping; only the "why" key is consulted.
    Fields(BTreeMap<String, String>),
    /// Plain output text, used as-is.
    Text(String),
}

impl RawOutput {
    /// Render this output down to the single string signatures are
    /// tested against.
    ///
    /// Hex codes are joined with single spaces; each code is stripped
    /// of a trailing numeric-format artifact first so upstream
    /// formatting quirks cannot defeat a match. A mapping without a
    /// "why" key degrades to the empty string — classification never
    /// fails, it just finds nothing.
    pub fn matchable(&self) -> Cow<'_, str> {
        match self {
            Self::Fault { message } => Cow::Borrowed(message),
            Self::Event { why } => Cow::Borrowed(why),
            Self::Coded { hex_codes } => Cow::Owned(
                hex_codes
                    .iter()
                    .map(|code| strip_format_artifact(code))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Self::Fields(fields) => {
                Cow::Borrowed(fields.get("why").map(String::as_str).unwrap_or(""))
            }
            Self::Text(text) => Cow::Borrowed(text),
        }
    }

    /// True when there is nothing to classify.
    pub fn is_empty(&self) -> bool {
        self.matchable().is_empty()
    }
}

impl From<&str> for RawOutput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawOutput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Render a status code as the lowercase hex text used for matching.
pub fn to_hex(code: u64) -> String {
    format!("{code:#x}")
}

/// Drop the trailing length suffix some numeric formatters append.
fn strip_format_artifact(code: &str) -> &str {
    code.strip_suffix('L')
        .or_else(|| code.strip_suffix('l'))
        .unwrap_or(code)
}

/// Compiled catalog, built once per process on first use.
fn signature_regexes() -> &'static HashMap<FaultSignature, Regex> {
    static COMPILED: OnceLock<HashMap<FaultSignature, Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        FaultSignature::all()
            .iter()
            .map(|sig| {
                let source = match sig.pattern() {
                    FaultPattern::Text(text) => format!("(?ims){}", text.trim()),
                    FaultPattern::Code(code) => format!("(?ims){}", to_hex(code)),
                };
                let regex =
                    Regex::new(&source).expect("catalog patterns are valid regexes");
                (*sig, regex)
            })
            .collect()
    })
}

fn matches_signature(text: &str, signature: FaultSignature) -> bool {
    signature_regexes()
        .get(&signature)
        .is_some_and(|regex| regex.is_match(text))
}

/// Test raw output against a set of signatures.
///
/// An empty set means "any known fault": the whole catalog is tested.
/// The result is a logical OR, so evaluation short-circuits on the
/// first hit.
pub fn has_error(output: &RawOutput, signatures: &[FaultSignature]) -> bool {
    let text = output.matchable();
    let candidates = if signatures.is_empty() {
        FaultSignature::all()
    } else {
        signatures
    };
    candidates
        .iter()
        .any(|signature| matches_signature(&text, *signature))
}

/// True when the output looks like the storage processor itself is
/// unreachable.
///
/// Bounded to short outputs: a long diagnostic dump that merely
/// contains an unavailability phrase is not an SP outage.
pub fn sp_not_available(output: &RawOutput) -> bool {
    let text = output.matchable();
    text.chars().count() < 500 && has_error(output, &[FaultSignature::SpNotAvailable])
}
