//! Flowchart generation job.
//!
//! Ties one input source, the configuration and a renderer together:
//!
//! ```text
//! CircuitSource ──► decoder / parser ──► GraphModel ──► decorations ──► GraphRenderer
//! ```

use crate::circuit::{decorate, CircuitData, CircuitVector, CircuitVectorDecoder, LegendOptions};
use crate::config::AppConfig;
use crate::error::{Result, ResultExt};
use crate::graph::{GraphModel, NodeKey};
use crate::render::{DotRenderer, GraphRenderer, JsonRenderer, OutputFormat};
use crate::text::CircuitTextParser;
use std::path::PathBuf;

/// Where a circuit description comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum CircuitSource {
    /// Literal circuit vector
    Vector(Vec<u32>),
    /// Two-line vector/weights data file
    DataFile(PathBuf),
    /// Text grammar document
    Text(String),
    /// Text grammar file
    TextFile(PathBuf),
}

/// Builds and renders one flowchart.
pub struct FlowchartJob<'a> {
    config: &'a AppConfig,
}

impl<'a> FlowchartJob<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Renderer for `format`, configured from the job's settings.
    pub fn renderer(&self, format: OutputFormat) -> Box<dyn GraphRenderer> {
        match format {
            OutputFormat::Dot => Box::new(DotRenderer::new(
                self.config.graph.clone(),
                self.config.render.weight_precision,
            )),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }

    /// Decode or parse `source` and apply decorations.
    pub fn build_model(&self, source: &CircuitSource) -> Result<GraphModel> {
        let (mut model, vector) = match source {
            CircuitSource::Vector(values) => {
                let vector = CircuitVector::new(values.clone())?;
                (CircuitVectorDecoder::decode_vector(&vector)?, Some(vector))
            }
            CircuitSource::DataFile(path) => {
                let data = CircuitData::load(path)?;
                let model = match &data.weights {
                    Some(weights) => CircuitVectorDecoder::decode_weighted(&data.vector, weights),
                    None => CircuitVectorDecoder::decode_vector(&data.vector),
                }
                .with_context(|| format!("Failed to decode {}", path.display()))?;
                (model, Some(data.vector))
            }
            CircuitSource::Text(text) => (CircuitTextParser::parse_str(text), None),
            CircuitSource::TextFile(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read circuit text {}", path.display()))?;
                (CircuitTextParser::parse_str(&text), None)
            }
        };

        for (sink, name) in self.config.sinks.renamed() {
            let key = NodeKey::Sink(sink);
            if model.node_id(&key).is_some() {
                model.set_label_override(key, name);
            }
        }

        decorate(
            &mut model,
            vector.as_ref(),
            LegendOptions {
                caption: self.config.render.show_vector_caption,
                legend: self.config.render.legend,
            },
        );

        Ok(model)
    }

    /// Build the model for `source` and hand its snapshot to `renderer`.
    pub fn run(&self, source: &CircuitSource, renderer: &dyn GraphRenderer) -> Result<Vec<u8>> {
        let model = self.build_model(source)?;
        let snapshot = model.snapshot();
        tracing::info!(
            "Rendering {} nodes and {} edges as {}",
            snapshot.nodes.len(),
            snapshot.edges.len(),
            renderer.extension()
        );
        renderer.render(&snapshot)
    }
}
