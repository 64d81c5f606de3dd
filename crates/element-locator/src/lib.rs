//! Declarative element resolution for the claim workflow.
//!
//! A [`Selector`] is a pure `(kind, value)` descriptor coming straight from
//! configuration; [`resolver`] turns it into exactly one interactive element
//! with a bounded polling wait, or a typed failure. Ordered fallback chains
//! replace nested "try this, then that" handlers.

pub mod errors;
pub mod resolver;
pub mod types;

pub use errors::*;
pub use resolver::*;
pub use types::*;

// Re-exported so callers can name the handle types without depending on the
// CDP client directly.
pub use chromiumoxide::{Element, Page};
