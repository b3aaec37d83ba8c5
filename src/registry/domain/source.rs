//! Entry provenance tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label for the builtin provenance tag, used in catalog round-trips.
const BUILTIN_TAG: &str = "builtin";

/// Provenance of a registered entry.
///
/// Informational only: provenance affects no resolution logic, but it is
/// preserved on every entry and surfaced in listings and descriptors so
/// diagnostics can distinguish an overwritten builtin from a first-time
/// custom registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntrySource {
    /// Loaded from the static startup catalog.
    Builtin,
    /// Registered at runtime under a caller-provided tag (e.g. `user`).
    Custom(String),
}

impl EntrySource {
    /// Returns the provenance tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Builtin => BUILTIN_TAG,
            Self::Custom(tag) => tag,
        }
    }

    /// Returns `true` for catalog-loaded entries.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }
}

impl From<String> for EntrySource {
    fn from(tag: String) -> Self {
        if tag == BUILTIN_TAG {
            Self::Builtin
        } else {
            Self::Custom(tag)
        }
    }
}

impl From<EntrySource> for String {
    fn from(source: EntrySource) -> Self {
        source.as_str().to_owned()
    }
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
