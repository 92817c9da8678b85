//! Fault signature catalog.
//!
//! Each signature names one vendor-reported fault condition and carries
//! its pattern: either a regex source (often an alternation of the
//! phrasings different firmware revisions emit for the same logical
//! fault) or a numeric status code. Signatures are plain data — the
//! matching rules live in [`crate::faults::classify`].
//!
//! Signatures are not mutually exclusive; several may describe the same
//! fault family (e.g. the generic not-found phrasings overlap the
//! object-specific ones). That is fine: the matcher is an any-of test.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern carried by a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultPattern {
    /// Regex source matched against normalized output text.
    Text(&'static str),
    /// Numeric status code; rendered as lowercase hex text before
    /// matching. Codes exceed 32-bit range.
    Code(u64),
}

/// Semantic category of a fault signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultCategory {
    /// The named object does not exist.
    NotFound,
    /// The service or storage processor cannot be reached.
    Unavailable,
    /// The target is not a valid recipient for this command.
    InvalidTarget,
    /// A name collides with an existing object.
    NameConflict,
    /// The object already exists.
    AlreadyExists,
    /// The resource is held by something else.
    InUse,
    /// The object is in a state that forbids the operation.
    InvalidState,
    /// The object is already a member of a group.
    MembershipConflict,
    /// The operation is not supported in the current state.
    Unsupported,
}

impl FaultCategory {
    /// Human-readable category name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::Unavailable => "unavailable",
            Self::InvalidTarget => "invalid target",
            Self::NameConflict => "name conflict",
            Self::AlreadyExists => "already exists",
            Self::InUse => "in use",
            Self::InvalidState => "invalid state",
            Self::MembershipConflict => "membership conflict",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Named vendor fault conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum FaultSignature {
    // -- Generic --
    /// Object lookup failed, any phrasing.
    GeneralNotFound,
    /// The SP (or its management service) is unreachable.
    SpNotAvailable,
    /// Command sent to something that is not a storage system.
    NotASp,

    // -- Storage groups --
    SgNameInUse,
    SgLunAlreadyExists,
    SgHostLunMissing,
    SgHostLunInUse,

    // -- LUNs --
    LunAlreadyExpanded,
    LunExpandSizeInvalid,
    LunNameInUse,
    LunPreparing,
    LunInStorageGroup,
    LunNotMigrating,
    LunNotSnapMountPoint,
    LunInConsistencyGroup,

    // -- Compression --
    CompressionAlreadyEnabled,

    // -- Consistency groups --
    CgDeleting,
    CgExists,
    CgSnapNameExists,
    CgNotFound,

    // -- Snapshots --
    SnapNameInUse,
    SnapAttached,
    SnapAlreadyMounted,
    SnapNotAttached,

    // -- Migration --
    MigrationTargetNotReady,

    // -- Pools --
    PoolNameInUse,
    PoolDiskUsed,
    PoolDestroying,

    // -- File side --
    NasGeneralError,
    VdmIdInvalid,
    VdmExists,
    MoverIdInvalid,
    FsNotFound,
    FsExists,
    FsSnapExists,
    MoverInterfaceNameExists,
    MoverInterfaceExists,
    MoverInterfaceVlanIdInvalid,
    MoverInterfaceMissing,
    MoverInterfaceNotAttached,
    DomainJoinFailed,
    DomainUnjoinFailed,
}

impl FaultSignature {
    /// The pattern this signature matches on.
    #[must_use]
    pub const fn pattern(&self) -> FaultPattern {
        use FaultPattern::{Code, Text};
        match self {
            Self::GeneralNotFound => Text(
                "cannot find|\
                 may not exist|\
                 does not exist|\
                 cannot be found",
            ),
            Self::SpNotAvailable => Text(
                "^Error.*Message.*End of data stream.*|\
                 .*Message.*connection refused.*|\
                 ^Error.*Message.*Service Unavailable.*|\
                 ^A network error occurred while trying to connect.*|\
                 ^Exception: Error occurred because of time out\\s*",
            ),
            Self::NotASp => {
                Text(".*CLI commands are not supported by the target storage system.*")
            }

            Self::SgNameInUse => Text("Storage Group name already in use"),
            Self::SgLunAlreadyExists => Text(
                "LUN already exists in the specified storage group|\
                 Requested LUN has already been added to this Storage Group",
            ),
            Self::SgHostLunMissing => Text("No such Host LUN in this Storage Group"),
            Self::SgHostLunInUse => Text(
                "Requested Host LUN Number already in use|\
                 LUN mapping still exists",
            ),

            Self::LunAlreadyExpanded => Code(0x712d_8e04),
            Self::LunExpandSizeInvalid => Code(0x712d_8e04),
            Self::LunNameInUse => Code(0x712d_8d04),
            Self::LunPreparing => Code(0x712d_8e0e),
            Self::LunInStorageGroup => {
                Text("contained in a Storage Group|LUN mapping still exists")
            }
            Self::LunNotMigrating => {
                Text("The specified source LUN is not currently migrating")
            }
            Self::LunNotSnapMountPoint => Text("it is not a snapshot mount point"),
            Self::LunInConsistencyGroup => Code(0x716d_8025),

            Self::CompressionAlreadyEnabled => Text("already turned on"),

            Self::CgDeleting => Code(0x712d_8801),
            Self::CgExists => Code(0x716d_8021),
            Self::CgSnapNameExists => Code(0x716d_8005),
            Self::CgNotFound => Text("Cannot find the consistency group"),

            Self::SnapNameInUse => Code(0x716d_8005),
            Self::SnapAttached => Code(0x716d_8003),
            Self::SnapAlreadyMounted => Code(0x716d_8055),
            Self::SnapNotAttached => {
                Text("The specified Snapshot mount point is not currently attached.")
            }

            Self::MigrationTargetNotReady => Text("not available for migration"),

            Self::PoolNameInUse => Text("name is already used|name already in use"),
            Self::PoolDiskUsed => Text("already part of"),
            Self::PoolDestroying => Text("is Destroying"),

            Self::NasGeneralError => Code(13_690_601_492),
            Self::VdmIdInvalid => Code(14_227_341_325),
            Self::VdmExists => Code(13_421_840_550),
            Self::MoverIdInvalid => Code(14_227_341_323),
            Self::FsNotFound => Code(18_522_112_101),
            Self::FsExists => Code(13_691_191_325),
            Self::FsSnapExists => Code(13_690_535_947),
            Self::MoverInterfaceNameExists => Code(13_421_840_550),
            Self::MoverInterfaceExists => Code(13_691_781_136),
            Self::MoverInterfaceVlanIdInvalid => Code(13_421_850_371),
            Self::MoverInterfaceMissing => Code(13_691_781_134),
            Self::MoverInterfaceNotAttached => Text("not currently attached"),
            Self::DomainJoinFailed => Code(13_157_007_726),
            Self::DomainUnjoinFailed => Code(13_157_007_723),
        }
    }

    /// Semantic category of this signature.
    #[must_use]
    pub const fn category(&self) -> FaultCategory {
        use FaultCategory::*;
        match self {
            Self::GeneralNotFound
            | Self::SgHostLunMissing
            | Self::CgNotFound
            | Self::FsNotFound
            | Self::MoverInterfaceMissing => NotFound,

            Self::SpNotAvailable => Unavailable,

            Self::NotASp
            | Self::LunNotSnapMountPoint
            | Self::VdmIdInvalid
            | Self::MoverIdInvalid
            | Self::MoverInterfaceVlanIdInvalid => InvalidTarget,

            Self::SgNameInUse
            | Self::LunNameInUse
            | Self::CgSnapNameExists
            | Self::SnapNameInUse
            | Self::PoolNameInUse
            | Self::MoverInterfaceNameExists => NameConflict,

            Self::CompressionAlreadyEnabled
            | Self::CgExists
            | Self::SnapAlreadyMounted
            | Self::VdmExists
            | Self::FsExists
            | Self::FsSnapExists
            | Self::MoverInterfaceExists => AlreadyExists,

            Self::SgHostLunInUse | Self::SnapAttached | Self::PoolDiskUsed => InUse,

            Self::LunAlreadyExpanded
            | Self::LunExpandSizeInvalid
            | Self::LunPreparing
            | Self::LunNotMigrating
            | Self::CgDeleting
            | Self::SnapNotAttached
            | Self::PoolDestroying
            | Self::MoverInterfaceNotAttached
            | Self::NasGeneralError => InvalidState,

            Self::SgLunAlreadyExists
            | Self::LunInStorageGroup
            | Self::LunInConsistencyGroup => MembershipConflict,

            Self::MigrationTargetNotReady
            | Self::DomainJoinFailed
            | Self::DomainUnjoinFailed => Unsupported,
        }
    }

    /// Every signature, declaration order, exactly once.
    #[must_use]
    pub const fn all() -> &'static [FaultSignature] {
        &[
            Self::GeneralNotFound,
            Self::SpNotAvailable,
            Self::NotASp,
            Self::SgNameInUse,
            Self::SgLunAlreadyExists,
            Self::SgHostLunMissing,
            Self::SgHostLunInUse,
            Self::LunAlreadyExpanded,
            Self::LunExpandSizeInvalid,
            Self::LunNameInUse,
            Self::LunPreparing,
            Self::LunInStorageGroup,
            Self::LunNotMigrating,
            Self::LunNotSnapMountPoint,
            Self::LunInConsistencyGroup,
            Self::CompressionAlreadyEnabled,
            Self::CgDeleting,
            Self::CgExists,
            Self::CgSnapNameExists,
            Self::CgNotFound,
            Self::SnapNameInUse,
            Self::SnapAttached,
            Self::SnapAlreadyMounted,
            Self::SnapNotAttached,
            Self::MigrationTargetNotReady,
            Self::PoolNameInUse,
            Self::PoolDiskUsed,
            Self::PoolDestroying,
            Self::NasGeneralError,
            Self::VdmIdInvalid,
            Self::VdmExists,
            Self::MoverIdInvalid,
            Self::FsNotFound,
            Self::FsExists,
            Self::FsSnapExists,
            Self::MoverInterfaceNameExists,
            Self::MoverInterfaceExists,
            Self::MoverInterfaceVlanIdInvalid,
            Self::MoverInterfaceMissing,
            Self::MoverInterfaceNotAttached,
            Self::DomainJoinFailed,
            Self::DomainUnjoinFailed,
        ]
    }
}

impl fmt::Display for FaultSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_signature_once() {
        let mut seen = std::collections::HashSet::new();
        for sig in FaultSignature::all() {
            assert!(seen.insert(*sig), "duplicate catalog entry: {sig:?}");
        }
    }

    #[test]
    fn test_shared_codes_stay_in_sync() {
        // Distinct logical faults that the firmware reports under one
        // status code must keep identical patterns.
        assert_eq!(
            FaultSignature::LunAlreadyExpanded.pattern(),
            FaultSignature::LunExpandSizeInvalid.pattern()
        );
        assert_eq!(
            FaultSignature::CgSnapNameExists.pattern(),
            FaultSignature::SnapNameInUse.pattern()
        );
        assert_eq!(
            FaultSignature::VdmExists.pattern(),
            FaultSignature::MoverInterfaceNameExists.pattern()
        );
    }

    #[test]
    fn test_categories_cover_not_found_family() {
        assert_eq!(
            FaultSignature::GeneralNotFound.category(),
            FaultCategory::NotFound
        );
        assert_eq!(
            FaultSignature::SpNotAvailable.category(),
            FaultCategory::Unavailable
        );
        assert_eq!(
            FaultSignature::PoolNameInUse.category(),
            FaultCategory::NameConflict
        );
    }

    #[test]
    fn test_serde_names_are_stable() {
        let json = serde_json::to_string(&FaultSignature::GeneralNotFound).unwrap();
        assert_eq!(json, "\"GENERAL_NOT_FOUND\"");
        let back: FaultSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FaultSignature::GeneralNotFound);
    }
}
