//! Append-only graph model shared by both circuit front ends.

use crate::graph::attr::{EdgeAttributes, NodeAttributes};
use crate::graph::id::{EdgeId, NodeId};
use crate::graph::key::NodeKey;
use crate::graph::snapshot::{EdgeRecord, GraphSnapshot, NodeRecord};
use std::collections::HashMap;

/// A node stored in the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub key: NodeKey,
    pub attrs: NodeAttributes,
}

/// A directed edge stored in the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub attrs: EdgeAttributes,
}

/// Two distinct node keys that render under the same display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAmbiguity {
    pub display_name: String,
    /// The key that was already in the model
    pub existing: NodeKey,
    /// The key that was added with a clashing name
    pub incoming: NodeKey,
}

/// In-memory circuit graph.
///
/// Nodes and edges can only be appended. Node keys are unique; edges are
/// not, so parallel edges between the same endpoints are all kept.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<NodeKey, NodeId>,
    by_display: HashMap<String, NodeId>,
    label_overrides: HashMap<NodeId, String>,
    ambiguities: Vec<IdAmbiguity>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or return the existing id if `key` is already present.
    ///
    /// Nodes are never mutated after creation, so `attrs` is ignored for an
    /// existing key.
    pub fn add_node(&mut self, key: NodeKey, attrs: NodeAttributes) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let id = NodeId::from_index(self.nodes.len());
        let shown = key.display_name();
        match self.by_display.get(&shown) {
            Some(&other) => {
                let existing = self.nodes[other.index()].key.clone();
                tracing::debug!(
                    "Node {:?} shares display name {:?} with {:?}",
                    key,
                    shown,
                    existing
                );
                self.ambiguities.push(IdAmbiguity {
                    display_name: shown,
                    existing,
                    incoming: key.clone(),
                });
            }
            None => {
                self.by_display.insert(shown, id);
            }
        }

        self.index.insert(key.clone(), id);
        self.nodes.push(Node { id, key, attrs });
        id
    }

    /// Add a node with default attributes if it does not exist yet.
    pub fn ensure_node(&mut self, key: NodeKey) -> NodeId {
        self.add_node(key, NodeAttributes::default())
    }

    /// Connect `from` to `to`, creating either endpoint on first use.
    pub fn add_edge(&mut self, from: NodeKey, to: NodeKey, attrs: EdgeAttributes) -> EdgeId {
        let from = self.ensure_node(from);
        let to = self.ensure_node(to);
        let id = EdgeId::from_index(self.edges.len());
        self.edges.push(Edge {
            id,
            from,
            to,
            attrs,
        });
        id
    }

    /// Record a display label for `key` without touching the node itself.
    ///
    /// The latest override wins.
    pub fn set_label_override(&mut self, key: NodeKey, label: impl Into<String>) -> NodeId {
        let id = self.ensure_node(key);
        self.label_overrides.insert(id, label.into());
        id
    }

    pub fn label_override(&self, id: NodeId) -> Option<&str> {
        self.label_overrides.get(&id).map(String::as_str)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node_id(&self, key: &NodeKey) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Key of an edge's endpoints.
    pub fn endpoints(&self, edge: &Edge) -> (&NodeKey, &NodeKey) {
        (
            &self.nodes[edge.from.index()].key,
            &self.nodes[edge.to.index()].key,
        )
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Display-name collisions seen while building the model.
    pub fn ambiguities(&self) -> &[IdAmbiguity] {
        &self.ambiguities
    }

    /// Read-only records for a renderer.
    ///
    /// Nodes that share a display name are merged into one record, keeping
    /// the first one's attributes. A label override on any of the merged
    /// nodes applies, the record's own node taking precedence.
    pub fn snapshot(&self) -> GraphSnapshot {
        let names: Vec<String> = self.nodes.iter().map(|n| n.key.display_name()).collect();

        let mut merged_overrides: HashMap<&str, &str> = HashMap::new();
        for (node, name) in self.nodes.iter().zip(&names) {
            if let Some(label) = self.label_overrides.get(&node.id) {
                merged_overrides.entry(name.as_str()).or_insert(label.as_str());
            }
        }

        let nodes = self
            .nodes
            .iter()
            .zip(&names)
            .filter(|(node, name)| {
                self.by_display
                    .get(name.as_str())
                    .is_some_and(|&first| first == node.id)
            })
            .map(|(node, name)| {
                let label = self
                    .label_overrides
                    .get(&node.id)
                    .map(String::as_str)
                    .or_else(|| merged_overrides.get(name.as_str()).copied())
                    .map(str::to_string)
                    .or_else(|| node.attrs.label.clone());
                NodeRecord {
                    id: name.clone(),
                    shape: node.attrs.shape,
                    label,
                    width: node.attrs.width,
                    height: node.attrs.height,
                }
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .map(|edge| EdgeRecord {
                from: names[edge.from.index()].clone(),
                to: names[edge.to.index()].clone(),
                kind: edge.attrs.kind,
                color: edge.attrs.color,
                label: edge.attrs.label.clone(),
                weight: edge.attrs.weight,
                tail_port: edge.attrs.tail_port,
                head_port: edge.attrs.head_port,
                len: edge.attrs.len,
            })
            .collect();

        GraphSnapshot { nodes, edges }
    }
}
