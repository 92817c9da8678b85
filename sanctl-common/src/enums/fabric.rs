//! Front-end and file-side enumerations: ports, shares, mirrors.

use serde::{Deserialize, Serialize};

use super::{ArrayEnum, EnumValue};

/// Front-end port transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortType {
    Fc,
    Iscsi,
    Fcoe,
    Sas,
    Ethernet,
    Other,
}

impl ArrayEnum for PortType {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Fc => "FC",
            Self::Iscsi => "iSCSI",
            Self::Fcoe => "FCoE",
            Self::Sas => "SAS",
            Self::Ethernet => "ethernet",
            Self::Other => "other",
        })
    }

    fn all() -> &'static [Self] {
        &[
            Self::Fc,
            Self::Iscsi,
            Self::Fcoe,
            Self::Sas,
            Self::Ethernet,
            Self::Other,
        ]
    }

    fn enum_name() -> &'static str {
        "PortType"
    }
}

impl PortType {
    /// Member for a vendor positional index (index 0 is reserved).
    pub fn from_int_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::Fc),
            2 => Some(Self::Iscsi),
            3 => Some(Self::Fcoe),
            4 => Some(Self::Sas),
            _ => None,
        }
    }
}

/// Export access level for a file share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    ReadWrite,
    ReadOnly,
    Access,
    Root,
}

impl ArrayEnum for AccessLevel {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::ReadWrite => "rw",
            Self::ReadOnly => "ro",
            Self::Access => "access",
            Self::Root => "root",
        })
    }

    fn all() -> &'static [Self] {
        &[Self::ReadWrite, Self::ReadOnly, Self::Access, Self::Root]
    }

    fn enum_name() -> &'static str {
        "AccessLevel"
    }
}

/// File share protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareType {
    Nfs,
    Cifs,
}

impl ArrayEnum for ShareType {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Nfs => "nfs",
            Self::Cifs => "cifs",
        })
    }

    fn all() -> &'static [Self] {
        &[Self::Nfs, Self::Cifs]
    }

    fn enum_name() -> &'static str {
        "ShareType"
    }
}

/// How a fractured mirror recovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorRecoveryPolicy {
    Manual,
    Auto,
}

impl ArrayEnum for MirrorRecoveryPolicy {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::Manual => "manual",
            Self::Auto => "automatic",
        })
    }

    fn all() -> &'static [Self] {
        &[Self::Manual, Self::Auto]
    }

    fn enum_name() -> &'static str {
        "MirrorRecoveryPolicy"
    }
}

impl MirrorRecoveryPolicy {
    /// Command-line fragments requesting this recovery policy.
    pub fn option_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::Manual => &["-recoverypolicy", "manual"],
            Self::Auto => &["-recoverypolicy", "auto"],
        }
    }
}

/// Mirror synchronization rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorSyncRate {
    High,
    Medium,
    Low,
}

impl ArrayEnum for MirrorSyncRate {
    fn value(&self) -> EnumValue {
        EnumValue::Str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }

    fn all() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low]
    }

    fn enum_name() -> &'static str {
        "MirrorSyncRate"
    }
}
