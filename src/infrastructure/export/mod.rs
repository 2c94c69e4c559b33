//! Report exporters: JSON, CSV, Markdown, and plain text.
//!
//! Exporters are read-only consumers of the domain report structures;
//! field names in machine formats are stable and match the model
//! definitions.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;
