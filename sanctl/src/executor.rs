//! Command executor seam.
//!
//! The array is driven through its administrative CLI; how those
//! commands actually reach it (local vendor binary, SSH, a lab
//! simulator) is the caller's business. This module defines the seam
//! and a deterministic mock used by the test suites — no sockets, no
//! subprocesses.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use sanctl_common::{FaultSource, RawOutput};

/// Result of one completed administrative command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdResponse {
    stdout: String,
    return_code: i32,
}

impl CmdResponse {
    pub fn new(stdout: impl Into<String>, return_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            return_code,
        }
    }

    /// A blank success response.
    pub fn success() -> Self {
        Self::new("", 0)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn return_code(&self) -> i32 {
        self.return_code
    }

    pub fn succeeded(&self) -> bool {
        self.return_code == 0
    }
}

impl FaultSource for CmdResponse {
    fn raw_output(&self) -> RawOutput {
        RawOutput::from(self.stdout.as_str())
    }

    fn status_message(&self) -> Option<String> {
        if self.return_code == 0 {
            None
        } else {
            Some(format!(
                "command returned {}: {}",
                self.return_code,
                self.stdout.trim()
            ))
        }
    }
}

/// Errors from the transport itself, as opposed to faults the array
/// reports in its output.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to invoke {command:?}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// Mock executor received a command nothing was registered for.
    #[error("no canned response for command {0:?}")]
    UnmatchedCommand(String),
}

/// Executes administrative commands against the array.
pub trait CommandExecutor {
    fn execute(&self, tokens: &[String]) -> Result<CmdResponse, ExecError>;
}

static MOCK_CALL_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Deterministic executor backed by canned responses.
///
/// Lookup is exact-match first, then the longest registered prefix, so
/// a suite can pin one specific invocation while catching the rest of
/// a command family with a shorter prefix.
#[derive(Debug, Clone, Default)]
pub struct MockExecutor {
    responses: Vec<(Vec<String>, CmdResponse)>,
}

impl MockExecutor {
    pub fn builder() -> MockExecutorBuilder {
        MockExecutorBuilder::default()
    }

    /// Commands executed against any mock in this process.
    pub fn calls_made() -> usize {
        MOCK_CALL_COUNTER.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockExecutorBuilder {
    responses: Vec<(Vec<String>, CmdResponse)>,
}

impl MockExecutorBuilder {
    /// Respond to commands starting with `tokens`.
    pub fn on(mut self, tokens: &[&str], response: CmdResponse) -> Self {
        self.responses
            .push((tokens.iter().map(|t| t.to_string()).collect(), response));
        self
    }

    /// Respond with plain output text and a zero return code.
    pub fn on_text(self, tokens: &[&str], stdout: &str) -> Self {
        self.on(tokens, CmdResponse::new(stdout, 0))
    }

    pub fn build(self) -> MockExecutor {
        MockExecutor {
            responses: self.responses,
        }
    }
}

impl CommandExecutor for MockExecutor {
    fn execute(&self, tokens: &[String]) -> Result<CmdResponse, ExecError> {
        MOCK_CALL_COUNTER.fetch_add(1, Ordering::SeqCst);
        debug!(command = %tokens.join(" "), "mock executor invoked");

        if let Some((_, response)) = self.responses.iter().find(|(t, _)| t == tokens) {
            return Ok(response.clone());
        }
        self.responses
            .iter()
            .filter(|(t, _)| !t.is_empty() && tokens.starts_with(t))
            .max_by_key(|(t, _)| t.len())
            .map(|(_, response)| Ok(response.clone()))
            .unwrap_or_else(|| Err(ExecError::UnmatchedCommand(tokens.join(" "))))
    }
}
