//! Administrative command assembly.
//!
//! Commands go to the array as token vectors; typed values contribute
//! their own fragments via the enumeration `option_tokens()` tables so
//! spelling lives in exactly one place.

use std::fmt;

/// Builder for a vendor CLI token vector.
#[derive(Debug, Clone)]
pub struct CmdBuilder {
    tokens: Vec<String>,
}

impl CmdBuilder {
    /// Start a command with its base token (e.g. "storagepool").
    pub fn new(base: &str) -> Self {
        Self {
            tokens: vec![base.to_string()],
        }
    }

    /// Append one token.
    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Append a flag with a single value.
    pub fn opt(mut self, flag: &str, value: impl fmt::Display) -> Self {
        self.tokens.push(flag.to_string());
        self.tokens.push(value.to_string());
        self
    }

    /// Append a flag followed by several values.
    pub fn opt_list<I, T>(mut self, flag: &str, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tokens.push(flag.to_string());
        self.tokens.extend(values.into_iter().map(Into::into));
        self
    }

    /// Splice in an enumeration's command-line fragments.
    pub fn option_tokens(mut self, fragments: &[&str]) -> Self {
        self.tokens
            .extend(fragments.iter().map(|fragment| fragment.to_string()));
        self
    }

    pub fn build(self) -> Vec<String> {
        self.tokens
    }
}
