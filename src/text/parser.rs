//! Best-effort parser for the circuit text grammar.

use crate::graph::{Color, EdgeAttributes, GraphModel, NodeKey, StreamKind};
use crate::text::line::LineKind;

/// Label value marking a concentrate stream
pub const CONCENTRATE_LABEL: &str = "conc";

/// Label value marking a tailing stream
pub const TAILING_LABEL: &str = "tails";

/// Per-parse counters, mostly for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseReport {
    pub lines: usize,
    pub edges: usize,
    pub labels: usize,
    pub skipped: usize,
}

/// Builds a [`GraphModel`] from circuit text.
///
/// Every line is handled on its own in a single forward pass, so a broken
/// line never affects its neighbours. Parsing cannot fail; callers that need
/// completeness should inspect the model or the [`ParseReport`].
pub struct CircuitTextParser;

impl CircuitTextParser {
    /// Parse a sequence of lines.
    pub fn parse<I, S>(lines: I) -> GraphModel
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_with_report(lines).0
    }

    /// Parse a whole document.
    pub fn parse_str(text: &str) -> GraphModel {
        Self::parse(text.lines())
    }

    pub fn parse_with_report<I, S>(lines: I) -> (GraphModel, ParseReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut model = GraphModel::new();
        let mut report = ParseReport::default();

        for (line_no, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            report.lines += 1;

            match LineKind::classify(line) {
                LineKind::Edge { from, to, attrs } => {
                    let label = attrs.get("label");
                    let mut edge = match label.and_then(stream_kind) {
                        Some(kind) => EdgeAttributes::stream(kind),
                        None => EdgeAttributes::plain(Color::Black),
                    };
                    if let Some(label) = label {
                        edge = edge.with_label(label);
                    }
                    tracing::trace!("line {}: edge {} -> {} ({:?})", line_no + 1, from, to, label);
                    model.add_edge(NodeKey::Named(from), NodeKey::Named(to), edge);
                    report.edges += 1;
                }
                LineKind::Node { name, label } => {
                    tracing::trace!("line {}: label {:?} for {}", line_no + 1, label, name);
                    model.set_label_override(NodeKey::Named(name), label);
                    report.labels += 1;
                }
                LineKind::Ignored => {
                    if !line.trim().is_empty() {
                        tracing::trace!("line {}: skipped {:?}", line_no + 1, line);
                    }
                    report.skipped += 1;
                }
            }
        }

        tracing::debug!(
            "Parsed {} lines: {} edges, {} labels, {} skipped",
            report.lines,
            report.edges,
            report.labels,
            report.skipped
        );

        (model, report)
    }
}

/// Stream kind for an edge label, matched exactly.
pub fn stream_kind(label: &str) -> Option<StreamKind> {
    match label {
        CONCENTRATE_LABEL => Some(StreamKind::Primary),
        TAILING_LABEL => Some(StreamKind::Secondary),
        _ => None,
    }
}
