//! Circuit vector decoding.

use crate::circuit::rank::{classify_sinks, SinkRanks};
use crate::circuit::vector::CircuitVector;
use crate::error::{CircuitError, Result};
use crate::graph::{
    Color, EdgeAttributes, GraphModel, NodeKey, Port, StreamKind, UnitRef,
};

/// Preferred length of the black feed edge
const FEED_EDGE_LEN: f32 = 0.5;

/// Decodes circuit vectors into a [`GraphModel`].
///
/// Output is a single deterministic pass:
///
/// 1. two entry edges `Feed -> Unit(v[0])`, blue then black
/// 2. for each unit `i`, a primary edge to `v[2i + 1]` then a secondary edge
///    to `v[2i + 2]`
///
/// Destinations equal to one of the three largest distinct values become
/// sinks; anything else is a unit named by the value.
pub struct CircuitVectorDecoder;

impl CircuitVectorDecoder {
    /// Decode a raw slice, validating the pairing invariant first.
    pub fn decode(values: &[u32]) -> Result<GraphModel> {
        let vector = CircuitVector::new(values.to_vec())?;
        Self::decode_vector(&vector)
    }

    /// Decode an already validated vector.
    pub fn decode_vector(vector: &CircuitVector) -> Result<GraphModel> {
        Self::build(vector, None)
    }

    /// Decode and annotate each stream edge with a flow weight.
    ///
    /// `weights` holds either one entry per stream edge, or one per vector
    /// element, in which case the leading (feed) entry is skipped.
    pub fn decode_weighted(vector: &CircuitVector, weights: &[f64]) -> Result<GraphModel> {
        let streams = vector.stream_count();
        let weights = if weights.len() == streams {
            weights
        } else if weights.len() == vector.len() {
            &weights[1..]
        } else {
            return Err(CircuitError::WeightCount {
                expected: streams,
                found: weights.len(),
            });
        };
        Self::build(vector, Some(weights))
    }

    /// Resolve a destination value against the global ranking.
    pub fn resolve(value: u32, ranks: &SinkRanks) -> NodeKey {
        match ranks.resolve(value) {
            Some(sink) => NodeKey::Sink(sink),
            None => NodeKey::Unit(UnitRef::Value(value)),
        }
    }

    fn build(vector: &CircuitVector, weights: Option<&[f64]>) -> Result<GraphModel> {
        let ranks = classify_sinks(vector.values())?;
        let mut model = GraphModel::new();

        let entry = NodeKey::unit_value(vector.feed_unit());
        model.add_edge(
            NodeKey::Feed,
            entry.clone(),
            EdgeAttributes::plain(Color::Blue).with_ports(Port::East, Port::West),
        );
        model.add_edge(
            NodeKey::Feed,
            entry,
            EdgeAttributes::plain(Color::Black)
                .with_len(FEED_EDGE_LEN)
                .with_ports(Port::East, Port::West),
        );

        let mut weights = weights.map(|w| w.iter().copied());
        for (i, (primary, secondary)) in vector.pairs().enumerate() {
            let from = NodeKey::unit_index(i as u32);
            for (value, kind) in [
                (primary, StreamKind::Primary),
                (secondary, StreamKind::Secondary),
            ] {
                let mut attrs = EdgeAttributes::stream(kind);
                if let Some(weight) = weights.as_mut().and_then(Iterator::next) {
                    attrs = attrs.with_weight(weight);
                }
                model.add_edge(from.clone(), Self::resolve(value, &ranks), attrs);
            }
        }

        tracing::debug!(
            "Decoded {} units into {} nodes and {} edges (ranks {:?}, {} ambiguous names)",
            vector.unit_count(),
            model.node_count(),
            model.edge_count(),
            ranks.as_tuple(),
            model.ambiguities().len()
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Sink;

    const SAMPLE: [u32; 13] = [0, 3, 1, 3, 2, 3, 5, 4, 7, 6, 3, 3, 8];

    fn destinations(model: &GraphModel, unit: u32) -> Vec<(NodeKey, Option<StreamKind>)> {
        let id = model.node_id(&NodeKey::unit_index(unit)).unwrap();
        model
            .edges_from(id)
            .map(|e| (model.endpoints(e).1.clone(), e.attrs.kind))
            .collect()
    }

    #[test]
    fn test_sample_vector() {
        let model = CircuitVectorDecoder::decode(&SAMPLE).unwrap();

        assert_eq!(model.edge_count(), 2 + 12);
        assert_eq!(
            destinations(&model, 0),
            vec![
                (NodeKey::unit_value(3), Some(StreamKind::Primary)),
                (NodeKey::unit_value(1), Some(StreamKind::Secondary)),
            ]
        );
        assert_eq!(
            destinations(&model, 3),
            vec![
                (NodeKey::unit_value(4), Some(StreamKind::Primary)),
                (NodeKey::Sink(Sink::Gormanium), Some(StreamKind::Secondary)),
            ]
        );
        assert_eq!(
            destinations(&model, 4),
            vec![
                (NodeKey::Sink(Sink::Palusznium), Some(StreamKind::Primary)),
                (NodeKey::unit_value(3), Some(StreamKind::Secondary)),
            ]
        );
        assert_eq!(
            destinations(&model, 5),
            vec![
                (NodeKey::unit_value(3), Some(StreamKind::Primary)),
                (NodeKey::Sink(Sink::Tailing), Some(StreamKind::Secondary)),
            ]
        );
    }

    #[test]
    fn test_feed_edge_is_doubled() {
        let model = CircuitVectorDecoder::decode(&SAMPLE).unwrap();
        let edges = model.edges();

        for edge in &edges[..2] {
            let (from, to) = model.endpoints(edge);
            assert_eq!(from, &NodeKey::Feed);
            assert_eq!(to, &NodeKey::unit_value(0));
            assert_eq!(edge.attrs.tail_port, Some(Port::East));
            assert_eq!(edge.attrs.head_port, Some(Port::West));
            assert_eq!(edge.attrs.kind, None);
        }
        assert_eq!(edges[0].attrs.color, Color::Blue);
        assert_eq!(edges[0].attrs.len, None);
        assert_eq!(edges[1].attrs.color, Color::Black);
        assert_eq!(edges[1].attrs.len, Some(FEED_EDGE_LEN));
    }

    #[test]
    fn test_index_and_value_spaces_stay_distinct() {
        let model = CircuitVectorDecoder::decode(&SAMPLE).unwrap();
        let index = model.node_id(&NodeKey::unit_index(3)).unwrap();
        let value = model.node_id(&NodeKey::unit_value(3)).unwrap();
        assert_ne!(index, value);
        assert!(model
            .ambiguities()
            .iter()
            .any(|a| a.display_name == "Unit 3"));
    }

    #[test]
    fn test_malformed_vector() {
        let err = CircuitVectorDecoder::decode(&[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, CircuitError::MalformedVector { len: 4 }));
    }

    #[test]
    fn test_insufficient_distinct_values() {
        let err = CircuitVectorDecoder::decode(&[1, 1, 1]).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::InsufficientDistinctValues { found: 1 }
        ));
    }

    #[test]
    fn test_weights_follow_stream_edges() {
        let vector = CircuitVector::new(vec![0, 1, 2, 3, 4]).unwrap();
        let model = CircuitVectorDecoder::decode_weighted(&vector, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let weights: Vec<Option<f64>> = model.edges().iter().map(|e| e.attrs.weight).collect();
        assert_eq!(
            weights,
            vec![None, None, Some(1.0), Some(2.0), Some(3.0), Some(4.0)]
        );

        let model =
            CircuitVectorDecoder::decode_weighted(&vector, &[9.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(model.edges()[2].attrs.weight, Some(1.0));
        assert_eq!(model.edges()[5].attrs.weight, Some(4.0));
    }

    #[test]
    fn test_weight_count_mismatch() {
        let vector = CircuitVector::new(vec![0, 1, 2, 3, 4]).unwrap();
        let err = CircuitVectorDecoder::decode_weighted(&vector, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::WeightCount {
                expected: 4,
                found: 2
            }
        ));
    }

    use proptest::prelude::*;

    /// Vectors whose values stay below `units + 3` with all three sink values present.
    fn well_formed_circuit() -> impl Strategy<Value = Vec<u32>> {
        (2usize..12).prop_flat_map(|units| {
            let n = units as u32;
            (
                0..n,
                prop::collection::vec(0..n + 3, units * 2 - 3),
                Just(n),
            )
                .prop_map(|(feed, mut rest, n)| {
                    rest.extend([n, n + 1, n + 2]);
                    let mut vector = vec![feed];
                    vector.extend(rest);
                    vector
                })
        })
    }

    proptest! {
        #[test]
        fn test_counts_for_any_valid_vector(
            mut values in prop::collection::vec(0u32..30, 1..20),
        ) {
            values.extend([100, 101, 102]);
            if values.len() % 2 == 0 {
                values.push(0);
            }
            let model = CircuitVectorDecoder::decode(&values).unwrap();

            let index_units = model
                .nodes()
                .iter()
                .filter(|n| matches!(n.key, NodeKey::Unit(UnitRef::Index(_))))
                .count();
            prop_assert_eq!(index_units, values.len() / 2);

            let feed = model.node_id(&NodeKey::Feed).unwrap();
            prop_assert_eq!(model.edges_from(feed).count(), 2);
            prop_assert_eq!(model.edge_count(), 2 + values.len() - 1);
        }

        #[test]
        fn test_destinations_are_units_or_sinks(values in well_formed_circuit()) {
            let units = (values.len() / 2) as u32;
            let model = CircuitVectorDecoder::decode(&values).unwrap();

            for edge in &model.edges()[2..] {
                match model.endpoints(edge).1 {
                    NodeKey::Unit(unit) => prop_assert!(unit.number() < units),
                    NodeKey::Sink(_) => {}
                    other => prop_assert!(false, "unexpected destination {:?}", other),
                }
            }
        }

        #[test]
        fn test_decode_is_deterministic(values in well_formed_circuit()) {
            let a = CircuitVectorDecoder::decode(&values).unwrap().snapshot();
            let b = CircuitVectorDecoder::decode(&values).unwrap().snapshot();
            prop_assert_eq!(a, b);
        }
    }
}
