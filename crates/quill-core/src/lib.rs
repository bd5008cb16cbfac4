//! # quill-core
//!
//! Foundational types shared across the quill crates:
//! - 0-based [`Point`] and inclusive [`Span`] positions
//! - The [`Language`] registry (extensions, comment delimiters, grammar mapping)
//! - Capture-name classification for documentable-node queries
//! - Cross-cutting error types

pub mod capture;
pub mod errors;
pub mod language;
pub mod position;

pub use capture::{CaptureKind, CaptureRole};
pub use errors::CoreError;
pub use language::Language;
pub use position::{Point, Span};
