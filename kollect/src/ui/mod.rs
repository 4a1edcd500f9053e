//! Rendering of fetched collections for the terminal.
//!
//! - [`table`]: human-readable tables.
//! - [`output`]: every output format, tables included.

pub mod output;
pub mod table;
