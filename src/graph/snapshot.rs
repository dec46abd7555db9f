//! Renderer-facing records.
//!
//! A [`GraphSnapshot`] is the only thing a renderer sees: node and edge
//! records keyed by display name, in model insertion order.

use crate::graph::attr::{Color, Port, Shape, StreamKind};
use serde::{Deserialize, Serialize};

/// Snapshot of a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// Snapshot of a single edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<StreamKind>,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail_port: Option<Port>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_port: Option<Port>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<f32>,
}

impl EdgeRecord {
    /// Text to print along the edge: the free label, else the weight.
    pub fn display_label(&self, precision: usize) -> Option<String> {
        self.label
            .clone()
            .or_else(|| self.weight.map(|w| format!("{:.*}", precision, w)))
    }
}

/// Complete graph snapshot handed to a renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}
