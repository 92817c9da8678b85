//! Storage-processor identity.
//!
//! Arrays report the owning controller in many spellings ("SP A",
//! "spa", "sp_a", "SP-A owner: A") and the control station is its own
//! beast. Lookup therefore goes through domain-specific suffix rules on
//! top of the registry normalization, and matches by containment rather
//! than equality.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ArrayEnum, EnumParseError, EnumValue, normalize};

/// A controller unit within the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageProcessor {
    SpA,
    SpB,
    /// The file-side control station.
    ControlStation,
}

impl ArrayEnum for StorageProcessor {
    fn value(&self) -> EnumValue {
        EnumValue::Str(self.canonical())
    }

    fn all() -> &'static [Self] {
        &[Self::SpA, Self::SpB, Self::ControlStation]
    }

    fn enum_name() -> &'static str {
        "StorageProcessor"
    }
}

/// Collapse a free-text SP spelling to its canonical short form.
///
/// Rules run in fixed order, first match wins:
/// - ends in "a" (but not "rra", so "celerra" survives) -> "spa"
/// - ends in "b" -> "spb"
/// - exactly "cs" -> "celerra"
fn normalize_sp(text: &str) -> String {
    let stripped = normalize(text);
    if stripped.ends_with('a') && !stripped.ends_with("rra") {
        "spa".to_string()
    } else if stripped.ends_with('b') {
        "spb".to_string()
    } else if stripped == "cs" {
        "celerra".to_string()
    } else {
        stripped
    }
}

impl StorageProcessor {
    /// Canonical vendor display value.
    pub fn canonical(&self) -> &'static str {
        match self {
            Self::SpA => "SP A",
            Self::SpB => "SP B",
            Self::ControlStation => "Celerra",
        }
    }

    /// Lossy reverse lookup from vendor text.
    ///
    /// A member matches when its normalized short form is contained in
    /// the normalized input, so decorated spellings like "owner: SP A"
    /// still resolve. Unrecognized input logs a warning and yields
    /// `None`; callers that need a hard failure use [`Self::sp_index`].
    pub fn parse(text: &str) -> Option<Self> {
        let needle = normalize_sp(text);
        let found = Self::all()
            .iter()
            .copied()
            .find(|member| needle.contains(&normalize_sp(member.canonical())));
        if found.is_none() {
            warn!(input = text, "cannot parse input as a storage processor");
        }
        found
    }

    /// True when the input names SP A or SP B (not the control station).
    pub fn is_sp(text: &str) -> bool {
        matches!(Self::parse(text), Some(Self::SpA | Self::SpB))
    }

    /// Hardware index digit: the last character of the canonical
    /// lowercase value ("a" for SP A, "b" for SP B).
    pub fn sp_index(text: &str) -> Result<char, EnumParseError> {
        let member = Self::parse(text).ok_or_else(|| EnumParseError {
            enumeration: Self::enum_name(),
            input: text.to_string(),
        })?;
        member
            .canonical()
            .to_lowercase()
            .chars()
            .next_back()
            .ok_or_else(|| EnumParseError {
                enumeration: Self::enum_name(),
                input: text.to_string(),
            })
    }

    /// Member for a vendor positional index (index 0 is reserved).
    pub fn from_int_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::SpA),
            2 => Some(Self::SpB),
            3 => Some(Self::ControlStation),
            _ => None,
        }
    }

    /// Vendor positional index of this member.
    pub fn int_index(&self) -> usize {
        match self {
            Self::SpA => 1,
            Self::SpB => 2,
            Self::ControlStation => 3,
        }
    }
}
