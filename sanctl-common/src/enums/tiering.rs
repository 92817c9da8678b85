//! Tiering policies and preferences.
//!
//! The array never reports the tiering policy as one field: listings
//! show an "initial tier" and a "tiering policy" as independent free
//! text, and the pair has to be folded back into the policy member that
//! would have produced it on the command line.

use serde::{Deserialize, Serialize};

use super::{ArrayEnum, EnumValue};

/// Data-placement policy combining an initial tier with an ongoing
/// movement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieringPolicy {
    None,
    /// Start on the highest tier, then let auto-tiering move data.
    HighAuto,
    Auto,
    /// Pin to the highest available tier.
    High,
    /// Pin to the lowest available tier.
    Low,
    NoMovement,
}

/// Returned when an initial-tier / tiering-policy pair matches no
/// known combination.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("initial tier {initial:?} with tiering policy {policy:?} is not a valid combination")]
pub struct TierFieldsError {
    pub initial: String,
    pub policy: String,
}

impl ArrayEnum for TieringPolicy {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::None => "none",
            Self::HighAuto => "starthighthenauto",
            Self::Auto => "auto",
            Self::High => "highestavailable",
            Self::Low => "lowestavailable",
            Self::NoMovement => "nomovement",
        })
    }

    fn all() -> &'static [Self] {
        &[
            Self::None,
            Self::HighAuto,
            Self::Auto,
            Self::High,
            Self::Low,
            Self::NoMovement,
        ]
    }

    fn enum_name() -> &'static str {
        "TieringPolicy"
    }
}

impl TieringPolicy {
    /// Command-line fragments requesting this policy.
    pub fn option_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::HighAuto => &[
                "-initialTier",
                "highestAvailable",
                "-tieringPolicy",
                "autoTier",
            ],
            Self::Auto => &[
                "-initialTier",
                "optimizePool",
                "-tieringPolicy",
                "autoTier",
            ],
            Self::High => &[
                "-initialTier",
                "highestAvailable",
                "-tieringPolicy",
                "highestAvailable",
            ],
            Self::Low => &[
                "-initialTier",
                "lowestAvailable",
                "-tieringPolicy",
                "lowestAvailable",
            ],
            Self::NoMovement => &[
                "-initialTier",
                "optimizePool",
                "-tieringPolicy",
                "noMovement",
            ],
        }
    }

    /// Reconstruct the policy from the two listing fields.
    ///
    /// "noMovement" wins regardless of the initial tier: once movement
    /// is disabled the reported initial tier varies independently.
    /// Otherwise both fields must match a member's option fragments;
    /// members are scanned in declaration order.
    pub fn from_tier_fields(initial: &str, policy: &str) -> Result<Self, TierFieldsError> {
        if match_option(policy, "noMovement") {
            return Ok(Self::NoMovement);
        }
        for member in Self::all() {
            let tokens = member.option_tokens();
            if tokens.len() >= 4
                && match_option(initial, tokens[1])
                && match_option(policy, tokens[3])
            {
                return Ok(*member);
            }
        }
        Err(TierFieldsError {
            initial: initial.to_string(),
            policy: policy.to_string(),
        })
    }
}

/// Case-insensitive, space-insensitive exact comparison against a
/// command-line option fragment.
fn match_option(output: &str, option: &str) -> bool {
    output.replace(' ', "").to_lowercase() == option.to_lowercase()
}

/// Preferred tier for new allocations, as reported by positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieringPreference {
    Invalid,
    None,
    LowestAvailable,
    HighestAvailable,
}

impl ArrayEnum for TieringPreference {
    fn value(&self) -> EnumValue {
        EnumValue::Int(match self {
            Self::Invalid => 0,
            Self::None => 1,
            Self::LowestAvailable => 2,
            Self::HighestAvailable => 3,
        })
    }

    // Invalid is a reserved sentinel; it stays reachable through
    // from_int_index but is not a parse target.
    fn all() -> &'static [Self] {
        &[Self::None, Self::LowestAvailable, Self::HighestAvailable]
    }

    fn enum_name() -> &'static str {
        "TieringPreference"
    }
}

impl TieringPreference {
    pub fn from_int_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Invalid),
            1 => Some(Self::None),
            2 => Some(Self::LowestAvailable),
            3 => Some(Self::HighestAvailable),
            _ => None,
        }
    }
}

/// Relocation behavior for existing data, as reported by positional
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelocationPolicy {
    Invalid,
    None,
    TierPreference,
    Optimal,
}

impl ArrayEnum for RelocationPolicy {
    fn value(&self) -> EnumValue {
        EnumValue::Int(match self {
            Self::Invalid => 0,
            Self::None => 1,
            Self::TierPreference => 2,
            Self::Optimal => 3,
        })
    }

    fn all() -> &'static [Self] {
        &[Self::None, Self::TierPreference, Self::Optimal]
    }

    fn enum_name() -> &'static str {
        "RelocationPolicy"
    }
}

impl RelocationPolicy {
    pub fn from_int_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Invalid),
            1 => Some(Self::None),
            2 => Some(Self::TierPreference),
            3 => Some(Self::Optimal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tier_fields_high_auto() {
        let policy = TieringPolicy::from_tier_fields("highestAvailable", "autoTier").unwrap();
        assert_eq!(policy, TieringPolicy::HighAuto);
    }

    #[test]
    fn test_from_tier_fields_ignores_case_and_spaces() {
        let policy = TieringPolicy::from_tier_fields("Highest Available", "Auto Tier").unwrap();
        assert_eq!(policy, TieringPolicy::HighAuto);
    }

    #[test]
    fn test_from_tier_fields_no_movement_wins() {
        // Initial tier text is free to disagree once movement is off.
        for initial in ["optimizePool", "highestAvailable", "whatever"] {
            let policy = TieringPolicy::from_tier_fields(initial, "No Movement").unwrap();
            assert_eq!(policy, TieringPolicy::NoMovement);
        }
    }

    #[test]
    fn test_from_tier_fields_rejects_unknown_pair() {
        let err = TieringPolicy::from_tier_fields("topTier", "bottomTier").unwrap_err();
        assert_eq!(err.initial, "topTier");
        assert_eq!(err.policy, "bottomTier");
    }

    #[test]
    fn test_option_tokens_pairs() {
        assert_eq!(
            TieringPolicy::Low.option_tokens(),
            &["-initialTier", "lowestAvailable", "-tieringPolicy", "lowestAvailable"]
        );
        assert!(TieringPolicy::None.option_tokens().is_empty());
    }

    #[test]
    fn test_parse_policy_value() {
        assert_eq!(
            TieringPolicy::parse("Start High Then Auto").unwrap(),
            TieringPolicy::HighAuto
        );
    }

    #[test]
    fn test_preference_sentinel_excluded_from_all() {
        assert!(!TieringPreference::all().contains(&TieringPreference::Invalid));
        assert_eq!(
            TieringPreference::from_int_index(0),
            Some(TieringPreference::Invalid)
        );
    }
}
