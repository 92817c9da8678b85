//! Enumerated value registry.
//!
//! Every closed-set vendor value in this crate (tiering policy,
//! provisioning type, storage-processor identity, ...) implements
//! [`ArrayEnum`]: an immutable set of named members, each with a
//! canonical string or integer value, plus a reverse lookup from
//! arbitrary user/vendor text back to a member.
//!
//! Reverse lookup normalizes both sides the same way — lowercase, with
//! filler characters (spaces, dots, underscores) stripped — so
//! "Start High Then Auto", "starthighthenauto" and "start_high_then_auto"
//! all resolve to the same member. Matching walks members in
//! declaration order and the first hit wins.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

pub mod block;
pub mod fabric;
pub mod sp;
pub mod tiering;

/// Canonical value of an enumeration member: vendor values are either
/// display strings or small integers, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumValue {
    Str(&'static str),
    Int(i64),
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

/// Returned when no member of an enumeration matches the input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {input:?} as a {enumeration} value")]
pub struct EnumParseError {
    /// Name of the enumeration that rejected the input.
    pub enumeration: &'static str,
    /// The offending input, verbatim.
    pub input: String,
}

/// Filler characters ignored during reverse lookup.
///
/// Compiled once per process and reused; never rebuilt per call.
fn filler_pattern() -> &'static Regex {
    static FILLER: OnceLock<Regex> = OnceLock::new();
    FILLER.get_or_init(|| Regex::new("[_. ]").expect("filler pattern is a valid regex"))
}

/// Lowercase the input and strip filler characters.
pub fn normalize(text: &str) -> String {
    filler_pattern()
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

/// A closed set of named vendor values.
///
/// Implementations declare their members once, statically; nothing is
/// registered at runtime. `all()` must return every non-sentinel member
/// exactly once, in declaration order.
pub trait ArrayEnum: Sized + Copy + PartialEq + 'static {
    /// Canonical vendor value for this member.
    fn value(&self) -> EnumValue;

    /// All members in declaration order, sentinels excluded.
    fn all() -> &'static [Self];

    /// Enumeration name used in diagnostics.
    fn enum_name() -> &'static str;

    /// Canonical value, normalized the same way lookup input is.
    fn normalized_value(&self) -> String {
        match self.value() {
            EnumValue::Str(s) => normalize(s),
            EnumValue::Int(i) => i.to_string(),
        }
    }

    /// Reverse lookup from vendor text to a member.
    ///
    /// First declaration-order member whose normalized value equals the
    /// normalized input wins.
    fn parse(text: &str) -> Result<Self, EnumParseError> {
        let needle = normalize(text);
        Self::all()
            .iter()
            .copied()
            .find(|member| member.normalized_value() == needle)
            .ok_or_else(|| EnumParseError {
                enumeration: Self::enum_name(),
                input: text.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sample {
        Alpha,
        Beta,
        Third,
    }

    impl ArrayEnum for Sample {
        fn value(&self) -> EnumValue {
            match self {
                Self::Alpha => EnumValue::Str("Alpha One"),
                Self::Beta => EnumValue::Str("beta.two"),
                Self::Third => EnumValue::Int(3),
            }
        }

        fn all() -> &'static [Self] {
            &[Self::Alpha, Self::Beta, Self::Third]
        }

        fn enum_name() -> &'static str {
            "Sample"
        }
    }

    #[test]
    fn test_normalize_strips_filler() {
        assert_eq!(normalize("Start High Then Auto"), "starthighthenauto");
        assert_eq!(normalize("sp_a"), "spa");
        assert_eq!(normalize("sp.a"), "spa");
        assert_eq!(normalize("plain"), "plain");
    }

    #[test]
    fn test_parse_matches_any_spelling() {
        assert_eq!(Sample::parse("alpha one").unwrap(), Sample::Alpha);
        assert_eq!(Sample::parse("ALPHA_ONE").unwrap(), Sample::Alpha);
        assert_eq!(Sample::parse("Beta Two").unwrap(), Sample::Beta);
        assert_eq!(Sample::parse("3").unwrap(), Sample::Third);
    }

    #[test]
    fn test_parse_rejects_unknown_text() {
        let err = Sample::parse("gamma").unwrap_err();
        assert_eq!(err.enumeration, "Sample");
        assert_eq!(err.input, "gamma");
    }

    #[test]
    fn test_parse_round_trips_every_member() {
        for member in Sample::all() {
            let text = member.value().to_string();
            assert_eq!(Sample::parse(&text).unwrap(), *member);
        }
    }
}
