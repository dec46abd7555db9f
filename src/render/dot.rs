//! Graphviz DOT output.
//!
//! Node statements are only written for nodes that carry attributes; every
//! other node is declared implicitly by the edges that use it, so the output
//! stays close to what a hand-written flowchart would look like.

use crate::config::{GraphSettings, DEFAULT_WEIGHT_PRECISION};
use crate::error::Result;
use crate::graph::{EdgeRecord, GraphSnapshot, NodeRecord};
use crate::render::GraphRenderer;
use std::fmt::Write;

/// Renders snapshots as `digraph` source.
#[derive(Debug, Clone)]
pub struct DotRenderer {
    graph: GraphSettings,
    weight_precision: usize,
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new(GraphSettings::default(), DEFAULT_WEIGHT_PRECISION)
    }
}

impl DotRenderer {
    pub fn new(graph: GraphSettings, weight_precision: usize) -> Self {
        Self {
            graph,
            weight_precision,
        }
    }

    /// DOT source for `snapshot`.
    pub fn to_dot(&self, snapshot: &GraphSnapshot) -> String {
        let mut out = String::new();
        out.push_str("digraph {\n");
        let _ = writeln!(out, "\trankdir={}", self.graph.rankdir.as_str());
        let _ = writeln!(out, "\tnode [shape={}]", self.graph.node_shape.as_str());

        for node in snapshot.nodes.iter().filter(|n| has_attributes(n)) {
            self.write_node(&mut out, node);
        }
        for edge in &snapshot.edges {
            self.write_edge(&mut out, edge);
        }

        out.push_str("}\n");
        out
    }

    fn write_node(&self, out: &mut String, node: &NodeRecord) {
        let mut attrs = Vec::new();
        if let Some(label) = &node.label {
            attrs.push(format!("label={}", quote(label)));
        }
        if let Some(shape) = node.shape {
            attrs.push(format!("shape={}", shape.as_str()));
        }
        if let Some(width) = node.width {
            attrs.push(format!("width={}", width));
        }
        if let Some(height) = node.height {
            attrs.push(format!("height={}", height));
        }
        let _ = writeln!(out, "\t{} [{}]", quote(&node.id), attrs.join(" "));
    }

    fn write_edge(&self, out: &mut String, edge: &EdgeRecord) {
        let mut attrs = vec![
            format!("arrowhead={}", quote_if_needed(&self.graph.arrowhead)),
            format!("color={}", edge.color.as_str()),
        ];
        if let Some(port) = edge.head_port {
            attrs.push(format!("headport={}", port.as_str()));
        }
        if let Some(label) = edge.display_label(self.weight_precision) {
            attrs.push(format!("label={}", quote(&label)));
        }
        if let Some(len) = edge.len {
            attrs.push(format!("len={}", len));
        }
        if let Some(port) = edge.tail_port {
            attrs.push(format!("tailport={}", port.as_str()));
        }
        let _ = writeln!(
            out,
            "\t{} -> {} [{}]",
            quote(&edge.from),
            quote(&edge.to),
            attrs.join(" ")
        );
    }
}

impl GraphRenderer for DotRenderer {
    fn extension(&self) -> &'static str {
        "dot"
    }

    fn render(&self, snapshot: &GraphSnapshot) -> Result<Vec<u8>> {
        Ok(self.to_dot(snapshot).into_bytes())
    }
}

fn has_attributes(node: &NodeRecord) -> bool {
    node.label.is_some() || node.shape.is_some() || node.width.is_some() || node.height.is_some()
}

/// Double-quote a DOT identifier, escaping quotes and backslashes.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn quote_if_needed(s: &str) -> String {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        s.to_string()
    } else {
        quote(s)
    }
}
