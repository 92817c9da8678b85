//! Block-side enumerations: provisioning, compression, migration,
//! LUN/RAID/snapshot types.

use serde::{Deserialize, Serialize};

use super::{ArrayEnum, EnumValue};

/// How capacity for a LUN is provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionType {
    Thin,
    Thick,
    Compressed,
    Deduped,
}

impl ArrayEnum for ProvisionType {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Thin => "thin",
            Self::Thick => "thick",
            Self::Compressed => "compressed",
            Self::Deduped => "deduplicated",
        })
    }

    fn all() -> &'static [Self] {
        &[Self::Thin, Self::Thick, Self::Compressed, Self::Deduped]
    }

    fn enum_name() -> &'static str {
        "ProvisionType"
    }
}

impl ProvisionType {
    /// Command-line fragments requesting this provisioning type.
    ///
    /// Compression is requested separately, so a compressed LUN is
    /// still created thin.
    pub fn option_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::Thin => &["-type", "Thin"],
            Self::Thick => &["-type", "NonThin"],
            Self::Compressed => &["-type", "Thin"],
            Self::Deduped => &["-type", "Thin", "-deduplication", "on"],
        }
    }
}

/// Background compression rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionRate {
    Low,
    Medium,
    High,
}

impl ArrayEnum for CompressionRate {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }

    fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }

    fn enum_name() -> &'static str {
        "CompressionRate"
    }
}

/// LUN migration rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationRate {
    Low,
    Medium,
    High,
    Asap,
}

impl ArrayEnum for MigrationRate {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Asap => "asap",
        })
    }

    fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Asap]
    }

    fn enum_name() -> &'static str {
        "MigrationRate"
    }
}

/// LUN flavor as reported by listings.
///
/// Snapshot mount points report the same vendor value as snapshots;
/// reverse lookup resolves both spellings to [`Self::Snap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunType {
    Thin,
    NonThin,
    Snap,
    Compressed,
    NonCompressed,
    Deduped,
    NonDeduped,
}

impl ArrayEnum for LunType {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Thin => "Thin",
            Self::NonThin => "NonThin",
            Self::Snap => "Snap",
            Self::Compressed => "Compressed",
            Self::NonCompressed => "NonCompressed",
            Self::Deduped => "Deduped",
            Self::NonDeduped => "NonDeduped",
        })
    }

    fn all() -> &'static [Self] {
        &[
            Self::Thin,
            Self::NonThin,
            Self::Snap,
            Self::Compressed,
            Self::NonCompressed,
            Self::Deduped,
            Self::NonDeduped,
        ]
    }

    fn enum_name() -> &'static str {
        "LunType"
    }
}

/// RAID group type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaidType {
    Raid0,
    Raid1,
    Raid2,
    Raid3,
    Raid4,
    Raid5,
    Raid6,
    Raid10,
}

impl ArrayEnum for RaidType {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Raid0 => "r0",
            Self::Raid1 => "r1",
            Self::Raid2 => "r2",
            Self::Raid3 => "r3",
            Self::Raid4 => "r4",
            Self::Raid5 => "r5",
            Self::Raid6 => "r6",
            Self::Raid10 => "r1_0",
        })
    }

    fn all() -> &'static [Self] {
        &[
            Self::Raid0,
            Self::Raid1,
            Self::Raid2,
            Self::Raid3,
            Self::Raid4,
            Self::Raid5,
            Self::Raid6,
            Self::Raid10,
        ]
    }

    fn enum_name() -> &'static str {
        "RaidType"
    }
}

/// RAID types supported for storage pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolRaidType {
    Raid5,
    Raid6,
    Raid10,
}

impl ArrayEnum for PoolRaidType {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Raid5 => "r_5",
            Self::Raid6 => "r_6",
            Self::Raid10 => "r_10",
        })
    }

    fn all() -> &'static [Self] {
        &[Self::Raid5, Self::Raid6, Self::Raid10]
    }

    fn enum_name() -> &'static str {
        "PoolRaidType"
    }
}

impl PoolRaidType {
    /// Command-line fragments requesting this pool RAID type.
    pub fn option_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::Raid5 => &["-rtype", "r_5"],
            Self::Raid6 => &["-rtype", "r_6"],
            Self::Raid10 => &["-rtype", "r_10"],
        }
    }
}

/// What a snapshot was taken of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapType {
    Lun,
    ConsistencyGroup,
}

impl ArrayEnum for SnapType {
    fn value(&self) -> EnumValue {
        EnumValue::Int(match self {
            Self::Lun => 1,
            Self::ConsistencyGroup => 2,
        })
    }

    fn all() -> &'static [Self] {
        &[Self::Lun, Self::ConsistencyGroup]
    }

    fn enum_name() -> &'static str {
        "SnapType"
    }
}
