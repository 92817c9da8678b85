//! Client-level error type.

use sanctl_common::ArrayError;

use crate::executor::ExecError;
use crate::parse::ResponseParseError;

/// Anything a client operation can fail with: a classified array
/// fault, a transport failure, or a malformed response.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Array(#[from] ArrayError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Parse(#[from] ResponseParseError),
}
