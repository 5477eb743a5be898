//! # aug-script-shared
//!
//! Value types shared between a scripting host and the scripts it runs.
//!
//! Scripts refer to host-side resources through small immutable values that
//! are validated once, at construction, and never change afterwards. The host
//! receives those values and resolves them against its own state.
//!
//! ## Contents
//!
//! - **[`WindowReference`]**: a named reference to a host window
//! - **[`SharedError`]**: the error returned when a value fails validation
//!
//! ## Features
//!
//! - `serde` (default): serialize shared values as their bare name and
//!   validate them again on deserialization
//!
//! ## Example
//!
//! ```
//! use aug_script_shared::{SharedError, WindowReference};
//!
//! let window: WindowReference = "main-window".parse()?;
//! assert_eq!(window.to_string(), "main-window");
//!
//! let err = WindowReference::new("").unwrap_err();
//! assert!(matches!(err, SharedError::InvalidArgument(_)));
//! # Ok::<(), SharedError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod window;

// Re-export main types
pub use error::{Result, SharedError};
pub use window::WindowReference;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
