//! Typed errors surfaced by the classification core.
//!
//! Callers branch on variants, not on vendor text: the raising policy
//! picks the variant from its expected-signature filter and the vendor
//! message rides along for diagnostics.

use crate::enums::EnumParseError;
use crate::enums::tiering::TierFieldsError;

/// Errors produced by array commands and their classification.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ArrayError {
    /// A command failed without a more specific classification.
    #[error("storage command failed: {0}")]
    Command(String),

    #[error("pool not found: {0}")]
    PoolNotFound(String),

    #[error("pool name already in use: {0}")]
    PoolNameInUse(String),

    #[error("pool is being destroyed: {0}")]
    PoolDestroying(String),

    #[error("disk already in use: {0}")]
    DiskInUse(String),

    #[error("failed to create pool: {0}")]
    CreatePool(String),

    #[error("LUN not found: {0}")]
    LunNotFound(String),

    #[error("name already in use: {0}")]
    NameInUse(String),

    #[error("resource busy: {0}")]
    ResourceBusy(String),

    /// The storage processor (or its management service) is
    /// unreachable.
    #[error("storage processor not available: {0}")]
    SpNotAvailable(String),

    #[error(transparent)]
    EnumParse(#[from] EnumParseError),

    #[error(transparent)]
    TierFields(#[from] TierFieldsError),
}
