//! Node and edge attributes carried by the graph model.
//!
//! These are renderer hints only. Nothing in the decoders reads them back.

use serde::{Deserialize, Serialize};

/// The kind of material flowing along a stream edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    /// Concentrate stream
    Primary,
    /// Tailing stream
    Secondary,
}

impl StreamKind {
    pub const fn color(self) -> Color {
        match self {
            StreamKind::Primary => Color::Blue,
            StreamKind::Secondary => Color::Red,
        }
    }
}

/// Edge stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Black,
    Blue,
    Red,
}

impl Color {
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

/// Compass point an edge attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Port {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "w")]
    West,
}

impl Port {
    pub const fn as_str(self) -> &'static str {
        match self {
            Port::North => "n",
            Port::East => "e",
            Port::South => "s",
            Port::West => "w",
        }
    }
}

/// Node outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Rectangle,
    Box,
    Ellipse,
    /// No outline at all, used for captions and legend anchors
    None,
}

impl Shape {
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Rectangle => "rectangle",
            Shape::Box => "box",
            Shape::Ellipse => "ellipse",
            Shape::None => "none",
        }
    }
}

/// Attributes attached to a node when it is first added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Outline override; the renderer's default shape applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl NodeAttributes {
    /// Zero-sized node without an outline
    pub fn invisible() -> Self {
        Self {
            shape: Some(Shape::None),
            label: None,
            width: Some(0.0),
            height: Some(0.0),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Attributes attached to an edge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeAttributes {
    /// Stream classification, if the edge carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<StreamKind>,
    #[serde(default)]
    pub color: Color,
    /// Free text annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Numeric flow rate annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail_port: Option<Port>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_port: Option<Port>,
    /// Preferred edge length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<f32>,
}

impl EdgeAttributes {
    /// A classified stream edge, colored by its kind
    pub fn stream(kind: StreamKind) -> Self {
        Self {
            kind: Some(kind),
            color: kind.color(),
            ..Default::default()
        }
    }

    /// An unclassified edge with the given color
    pub fn plain(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_ports(mut self, tail: Port, head: Port) -> Self {
        self.tail_port = Some(tail);
        self.head_port = Some(head);
        self
    }

    pub fn with_len(mut self, len: f32) -> Self {
        self.len = Some(len);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_colors() {
        assert_eq!(EdgeAttributes::stream(StreamKind::Primary).color, Color::Blue);
        assert_eq!(
            EdgeAttributes::stream(StreamKind::Secondary).color,
            Color::Red
        );
        assert_eq!(EdgeAttributes::default().color, Color::Black);
    }

    #[test]
    fn test_invisible_node() {
        let attrs = NodeAttributes::invisible().with_label("caption");
        assert_eq!(attrs.shape, Some(Shape::None));
        assert_eq!(attrs.width, Some(0.0));
        assert_eq!(attrs.label.as_deref(), Some("caption"));
    }

    #[test]
    fn test_shape_serde_names() {
        let json = serde_json::to_string(&Shape::None).unwrap();
        assert_eq!(json, "\"none\"");
        let port: Port = serde_json::from_str("\"w\"").unwrap();
        assert_eq!(port, Port::West);
    }
}
