//! Named references to host windows
//!
//! Scripts never hold a window directly. They hold a [`WindowReference`]: an
//! immutable, validated name the host resolves on its side.

mod impls;

use crate::error::{Result, SharedError};

const EMPTY_NAME: &str = "name cannot be null or empty";

/// An immutable reference to a host window by name.
///
/// Every reference built through [`WindowReference::new`] or one of the
/// validating conversions has a non-empty name. The only exception is the
/// unnamed reference from [`WindowReference::unnamed`] (and `Default`),
/// which exists for frameworks that need zero-argument construction.
///
/// # Example
///
/// ```
/// use aug_script_shared::WindowReference;
///
/// let window = WindowReference::new("main-window")?;
/// assert_eq!(window.name(), "main-window");
///
/// assert!(WindowReference::new("").is_err());
/// # Ok::<(), aug_script_shared::SharedError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "Option<String>")
)]
pub struct WindowReference {
    name: String,
}

impl WindowReference {
    /// Create a reference to the window called `name`.
    ///
    /// Fails with [`SharedError::InvalidArgument`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::validate(Some(name.into()))
    }

    /// Create a reference with an empty name, skipping validation.
    ///
    /// Only for zero-argument construction (`Default`, `#[serde(default)]`).
    /// Code that needs a usable reference should call [`WindowReference::new`].
    pub fn unnamed() -> Self {
        Self {
            name: String::new(),
        }
    }

    /// The window name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if this reference came from the unnamed construction path
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Consume the reference, returning the owned name
    pub fn into_name(self) -> String {
        self.name
    }

    fn validate(name: Option<String>) -> Result<Self> {
        match name {
            Some(name) if !name.is_empty() => Ok(Self { name }),
            rejected => {
                tracing::debug!(name = ?rejected, "rejected window reference name");
                Err(SharedError::invalid_argument(EMPTY_NAME))
            }
        }
    }
}

impl Default for WindowReference {
    fn default() -> Self {
        Self::unnamed()
    }
}
