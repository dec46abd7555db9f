//! Flowchart decorations: the vector caption and the stream legend.

use crate::circuit::vector::CircuitVector;
use crate::graph::{Color, EdgeAttributes, GraphModel, NodeAttributes, NodeKey};

const LEGEND_EDGE_LEN: f32 = 0.5;

/// Which decorations to append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendOptions {
    pub caption: bool,
    pub legend: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            caption: true,
            legend: true,
        }
    }
}

/// Append the caption (vector sources only) and legend to `model`.
pub fn decorate(model: &mut GraphModel, vector: Option<&CircuitVector>, options: LegendOptions) {
    if options.caption {
        if let Some(vector) = vector {
            model.add_node(
                NodeKey::named(format!("vector = {}", vector)),
                NodeAttributes::invisible(),
            );
        }
    }

    if options.legend {
        legend_entry(
            model,
            "",
            "Concentrate flow with path",
            "Concentrate flow rate (kg/s)",
            Color::Blue,
        );
        legend_entry(
            model,
            " ",
            "Tailing flow with path",
            "Tailing flow rate (kg/s)",
            Color::Red,
        );
    }
}

fn legend_entry(model: &mut GraphModel, anchor: &str, target: &str, label: &str, color: Color) {
    model.add_node(NodeKey::named(anchor), NodeAttributes::invisible());
    model.add_node(NodeKey::named(target), NodeAttributes::invisible());
    model.add_edge(
        NodeKey::named(anchor),
        NodeKey::named(target),
        EdgeAttributes::plain(color)
            .with_label(label)
            .with_len(LEGEND_EDGE_LEN),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Shape;

    #[test]
    fn test_full_decoration() {
        let vector = CircuitVector::new(vec![0, 1, 2]).unwrap();
        let mut model = GraphModel::new();
        decorate(&mut model, Some(&vector), LegendOptions::default());

        let snapshot = model.snapshot();
        let ids: Vec<&str> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "vector = [0, 1, 2]",
                "",
                "Concentrate flow with path",
                " ",
                "Tailing flow with path",
            ]
        );
        assert!(snapshot.nodes.iter().all(|n| n.shape == Some(Shape::None)));

        assert_eq!(snapshot.edges.len(), 2);
        assert_eq!(snapshot.edges[0].color, Color::Blue);
        assert_eq!(
            snapshot.edges[1].label.as_deref(),
            Some("Tailing flow rate (kg/s)")
        );
    }

    #[test]
    fn test_caption_needs_vector() {
        let mut model = GraphModel::new();
        decorate(
            &mut model,
            None,
            LegendOptions {
                caption: true,
                legend: false,
            },
        );
        assert_eq!(model.node_count(), 0);
    }
}
