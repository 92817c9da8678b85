//! Tabular response parsing.
//!
//! The array answers listings as blocks of `Key:  Value` lines, one
//! blank-line-separated block per object:
//!
//! ```text
//! Pool Name:  Pool4File
//! Pool ID:  0
//! Raid Type:  r_5
//! Disks:
//! Bus 1 Enclosure 0 Disk 0
//! Bus 1 Enclosure 0 Disk 1
//! ```
//!
//! Lines without a colon continue the preceding field (disk lists,
//! wrapped values). Values keep their raw spelling; typed access goes
//! through the accessors on [`Record`].

use memchr::memchr;

/// One parsed key/value block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

/// Returned when a record is missing or mis-typed a required field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseParseError {
    #[error("record is missing field {0:?}")]
    MissingField(&'static str),
    #[error("field {field:?} has non-numeric value {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl Record {
    /// Raw value of a field, first occurrence.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn require(&self, key: &'static str) -> Result<&str, ResponseParseError> {
        self.get(key).ok_or(ResponseParseError::MissingField(key))
    }

    pub fn get_u64(&self, key: &'static str) -> Result<u64, ResponseParseError> {
        let value = self.require(key)?;
        value
            .trim()
            .parse()
            .map_err(|_| ResponseParseError::InvalidNumber {
                field: key,
                value: value.to_string(),
            })
    }

    pub fn get_f64(&self, key: &'static str) -> Result<f64, ResponseParseError> {
        let value = self.require(key)?;
        value
            .trim()
            .parse()
            .map_err(|_| ResponseParseError::InvalidNumber {
                field: key,
                value: value.to_string(),
            })
    }

    /// Value split on line breaks, empty lines dropped. Multi-line
    /// fields (disk lists) come back one entry per line.
    pub fn lines(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|value| {
                value
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Value split on commas, entries trimmed, empty entries dropped.
    pub fn list(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split response text into records on blank-line boundaries.
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current = Record::default();

    for line in text.lines() {
        let trimmed = line.trim_end();
        if trimmed.trim().is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
            continue;
        }

        match memchr(b':', trimmed.as_bytes()) {
            Some(at) => {
                let key = trimmed[..at].trim().to_string();
                let value = trimmed[at + 1..].trim().to_string();
                current.fields.push((key, value));
            }
            None => {
                // Continuation of the previous field, or preamble noise
                // before the first key — only the former is kept.
                if let Some((_, value)) = current.fields.last_mut() {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(trimmed.trim());
                }
            }
        }
    }
    if !current.is_empty() {
        records.push(current);
    }
    records
}
