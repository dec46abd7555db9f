//! Settings sections of the configuration file
//!
//! # Main Types
//!
//! - [`GraphSettings`] - Graph-wide layout attributes (`[graph]`)
//! - [`SinkNames`] - Display names of the three ranked sinks (`[sinks]`)
//! - [`RenderSettings`] - Output format and decorations (`[render]`)

use crate::graph::{Shape, Sink};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};

/// Default number of decimals for flow weights
pub const DEFAULT_WEIGHT_PRECISION: usize = 2;

/// Layout direction of the flowchart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    /// Left to right
    #[default]
    LR,
    /// Top to bottom
    TB,
    /// Right to left
    RL,
    /// Bottom to top
    BT,
}

impl RankDir {
    pub const fn as_str(self) -> &'static str {
        match self {
            RankDir::LR => "LR",
            RankDir::TB => "TB",
            RankDir::RL => "RL",
            RankDir::BT => "BT",
        }
    }
}

/// Graph-wide attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Layout direction
    #[serde(default)]
    pub rankdir: RankDir,

    /// Default node outline
    #[serde(default)]
    pub node_shape: Shape,

    /// Arrowhead style applied to every edge
    #[serde(default = "default_arrowhead")]
    pub arrowhead: String,
}

fn default_arrowhead() -> String {
    "normal".to_string()
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            rankdir: RankDir::LR,
            node_shape: Shape::Rectangle,
            arrowhead: default_arrowhead(),
        }
    }
}

/// Display names for the ranked sinks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkNames {
    #[serde(default = "default_tailing")]
    pub tailing: String,

    #[serde(default = "default_gormanium")]
    pub gormanium: String,

    #[serde(default = "default_palusznium")]
    pub palusznium: String,
}

fn default_tailing() -> String {
    Sink::Tailing.name().to_string()
}

fn default_gormanium() -> String {
    Sink::Gormanium.name().to_string()
}

fn default_palusznium() -> String {
    Sink::Palusznium.name().to_string()
}

impl Default for SinkNames {
    fn default() -> Self {
        Self {
            tailing: default_tailing(),
            gormanium: default_gormanium(),
            palusznium: default_palusznium(),
        }
    }
}

impl SinkNames {
    pub fn name(&self, sink: Sink) -> &str {
        match sink {
            Sink::Tailing => &self.tailing,
            Sink::Gormanium => &self.gormanium,
            Sink::Palusznium => &self.palusznium,
        }
    }

    /// Sinks whose configured name differs from the built-in one
    pub fn renamed(&self) -> impl Iterator<Item = (Sink, &str)> + '_ {
        Sink::ALL
            .into_iter()
            .map(move |sink| (sink, self.name(sink)))
            .filter(|(sink, name)| *name != sink.name())
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Output format when none is given on the command line
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimals used when printing flow weights
    #[serde(default = "default_weight_precision")]
    pub weight_precision: usize,

    /// Append the concentrate/tailing legend
    #[serde(default = "default_true")]
    pub legend: bool,

    /// Append a caption node listing the circuit vector
    #[serde(default = "default_true")]
    pub show_vector_caption: bool,
}

fn default_weight_precision() -> usize {
    DEFAULT_WEIGHT_PRECISION
}

fn default_true() -> bool {
    true
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Dot,
            weight_precision: DEFAULT_WEIGHT_PRECISION,
            legend: true,
            show_vector_caption: true,
        }
    }
}
