//! Type definitions shared between crates
//!
//! - `language` - Internationalization and language types

pub mod language;

pub use language::Language;
