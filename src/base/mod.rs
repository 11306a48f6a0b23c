//! Foundation types shared by every other module.
//!
//! This module provides the fundamentals used throughout the crate:
//! - [`Span`] — source-location interval attached to every token and AST node.
//! - Domain constants (the canonical Thrift file extension).
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod span;

pub use span::Span;

// Re-export text-size types for convenience, matching how byte offsets are
// represented inside a `Span`.
pub use text_size::{TextRange, TextSize};
