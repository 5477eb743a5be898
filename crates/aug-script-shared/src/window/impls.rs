//! WindowReference trait implementations: conversions, Display, borrowing

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use super::WindowReference;
use crate::error::SharedError;

// ═══════════════════════════════════════════════════════════════════
// Validating Conversions
// ═══════════════════════════════════════════════════════════════════

impl TryFrom<String> for WindowReference {
    type Error = SharedError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::validate(Some(name))
    }
}

impl TryFrom<&str> for WindowReference {
    type Error = SharedError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::validate(Some(name.to_string()))
    }
}

/// `None` stands in for a missing (null) name and is rejected.
impl TryFrom<Option<String>> for WindowReference {
    type Error = SharedError;

    fn try_from(name: Option<String>) -> Result<Self, Self::Error> {
        Self::validate(name)
    }
}

impl FromStr for WindowReference {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Extraction
// ═══════════════════════════════════════════════════════════════════

impl From<WindowReference> for String {
    fn from(window: WindowReference) -> Self {
        window.into_name()
    }
}

impl AsRef<str> for WindowReference {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl Borrow<str> for WindowReference {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for WindowReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
