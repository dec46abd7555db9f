//! # circuit-vis: Separation Circuit Flowchart Generator
//!
//! Turns a description of a mineral-separation circuit into a directed
//! graph of feed, units and the three ranked sinks, and renders it as a
//! flowchart.
//!
//! ## Architecture
//!
//! - **Circuit**: decodes circuit vectors (`[feed, (primary, secondary)...]`)
//!   and ranks the sinks Tailing, Gormanium and Palusznium
//! - **Text**: parses the line-oriented `A -> B [label=conc]` grammar
//! - **Graph**: append-only model shared by both decoders, with a flat
//!   snapshot for renderers
//! - **Render**: Graphviz DOT and JSON output behind the [`GraphRenderer`] trait
//!
//! ## Configuration
//!
//! Settings are read from `circuit-vis.toml` in the working directory or the
//! platform config directory under `dev.circuit-vis`. See [`config`].
//!
//! ## Example
//!
//! ```
//! use circuit_vis::{CircuitVectorDecoder, Sink, NodeKey};
//!
//! let model = CircuitVectorDecoder::decode(&[0, 1, 2, 3, 4]).unwrap();
//! assert_eq!(model.edge_count(), 2 + 4);
//! assert!(model.node_id(&NodeKey::Sink(Sink::Tailing)).is_some());
//! ```

pub mod app;
pub mod circuit;
pub mod config;
pub mod error;
pub mod graph;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use app::{CircuitSource, FlowchartJob};
pub use circuit::{classify_sinks, CircuitData, CircuitVector, CircuitVectorDecoder, SinkRanks};
pub use config::AppConfig;
pub use error::{CircuitError, Result};
pub use graph::{GraphModel, GraphSnapshot, NodeKey, Sink, StreamKind, UnitRef};
pub use render::{DotRenderer, GraphRenderer, JsonRenderer, OutputFormat};
pub use text::CircuitTextParser;
