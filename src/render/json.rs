//! JSON dump of the renderer records, for external renderers.

use crate::error::{CircuitError, Result};
use crate::graph::GraphSnapshot;
use crate::render::GraphRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl GraphRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, snapshot: &GraphSnapshot) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| CircuitError::Render(format!("Failed to serialize graph: {}", e)))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
