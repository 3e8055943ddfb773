use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::CompendiumKind;
use crate::error::DomainError;

/// Identifier of a record within one compendium pack.
///
/// Rendered as the collection noun followed by the 1-based index padded to
/// eight digits, e.g. `ancestry00000001`. Ids are assigned by position on
/// every run and are only unique within their own pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RecordId {
    kind: CompendiumKind,
    index: usize,
}

impl RecordId {
    /// Zero-padded width of the numeric suffix.
    pub const INDEX_WIDTH: usize = 8;

    /// Create an id from a 1-based index.
    pub fn new(kind: CompendiumKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Create the id for the row at `position` (0-based) in its source table.
    pub fn from_position(kind: CompendiumKind, position: usize) -> Self {
        Self::new(kind, position + 1)
    }

    pub fn kind(&self) -> CompendiumKind {
        self.kind
    }

    /// The 1-based index.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.kind.id_prefix(),
            self.index,
            width = Self::INDEX_WIDTH
        )
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, digits) = CompendiumKind::ALL
            .iter()
            .find_map(|kind| s.strip_prefix(kind.id_prefix()).map(|rest| (*kind, rest)))
            .ok_or_else(|| DomainError::invalid_id(format!("'{s}' has no known collection prefix")))?;

        if digits.len() != Self::INDEX_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "'{s}' does not end in an {}-digit index",
                Self::INDEX_WIDTH
            )));
        }

        let index: usize = digits
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("'{s}' has an unreadable index")))?;
        if index == 0 {
            return Err(DomainError::invalid_id(format!("'{s}' uses index 0; ids start at 1")));
        }

        Ok(Self::new(kind, index))
    }
}

impl TryFrom<String> for RecordId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.to_string()
    }
}
