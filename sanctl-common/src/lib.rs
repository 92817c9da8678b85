//! Shared classification core for the sanctl storage management client.
//!
//! This crate turns raw array command output into meaning. It carries:
//!
//! - the enumerated value registry and the domain enumerations
//!   (storage-processor identity, tiering, provisioning, ...),
//! - the fault signature catalog (vendor error phrasings and status
//!   codes as plain data),
//! - the signature matcher that normalizes heterogeneous output shapes
//!   and tests them against the catalog,
//! - the error-raising policy that decides whether a completed command
//!   failed and with which typed error.
//!
//! Everything here is pure and synchronous; the command transport that
//! produces the raw output lives in the consuming crate.

pub mod enums;
pub mod error;
pub mod faults;

pub use enums::sp::StorageProcessor;
pub use enums::tiering::TieringPolicy;
pub use enums::{ArrayEnum, EnumParseError, EnumValue};
pub use error::ArrayError;
pub use faults::catalog::{FaultCategory, FaultPattern, FaultSignature};
pub use faults::classify::{RawOutput, has_error, sp_not_available, to_hex};
pub use faults::policy::{FaultSource, OutputCheck, raise_if_err};
