//! Rendering boundary.
//!
//! Renderers turn a [`GraphSnapshot`] into an artifact. Rasterising is left
//! to external tools; the bundled renderers emit Graphviz DOT source and a
//! JSON dump of the records.

pub mod dot;
pub mod json;

pub use dot::DotRenderer;
pub use json::JsonRenderer;

use crate::error::Result;
use crate::graph::GraphSnapshot;
use serde::{Deserialize, Serialize};

/// Consumer of graph snapshots.
#[cfg_attr(test, mockall::automock)]
pub trait GraphRenderer {
    /// File extension of the produced artifact
    fn extension(&self) -> &'static str;

    fn render(&self, snapshot: &GraphSnapshot) -> Result<Vec<u8>>;
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Dot,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dot" | "gv" => Ok(OutputFormat::Dot),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {:?}", other)),
        }
    }
}
