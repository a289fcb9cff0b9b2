use std::fmt;

use serde_json::{Map, Value};

/// A validated lookup key: a trimmed string of 10 to 15 decimal digits.
///
/// Only [`crate::validate::validate`] constructs one, so holding an
/// `Identifier` means the format checks already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub(crate) fn new(digits: String) -> Self {
        Identifier(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Outcome of one remote query.
///
/// `Success` carries the decoded JSON object as received; key order is
/// preserved so the renderer can display unrecognized fields in the order
/// the server sent them. `Failure` carries a user-facing message. Neither
/// variant is retried or persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Success(Map<String, Value>),
    Failure(String),
}

/// Response keys with a dedicated label and position in the output.
///
/// Purely a presentation convention; nothing couples this to the server
/// schema. Everything else the server returns is rendered generically
/// after these.
pub const KNOWN_FIELDS: [&str; 7] = ["name", "fname", "mobile", "alt", "id", "address", "circle"];
