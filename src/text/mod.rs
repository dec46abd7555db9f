//! Text grammar front end.
//!
//! A restricted, line-oriented subset of Graphviz DOT describing the same
//! circuits as the vector encoding. Stream kinds come from edge labels
//! (`conc`, `tails`) instead of value ranks.

pub mod line;
pub mod parser;

pub use line::{AttrList, LineKind};
pub use parser::{stream_kind, CircuitTextParser, ParseReport};
