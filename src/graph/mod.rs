//! Circuit graph model.
//!
//! Both front ends (the circuit vector decoder and the text grammar parser)
//! build a [`GraphModel`]; renderers only ever see the [`GraphSnapshot`] it
//! produces.
//!
//! ```text
//! [CircuitVectorDecoder] ──┐
//!                          ├──► [GraphModel] ──► snapshot() ──► [GraphRenderer]
//! [CircuitTextParser] ─────┘
//! ```

pub mod attr;
pub mod id;
pub mod key;
pub mod model;
pub mod snapshot;

pub use attr::{Color, EdgeAttributes, NodeAttributes, Port, Shape, StreamKind};
pub use id::{EdgeId, NodeId};
pub use key::{NodeKey, Sink, UnitRef};
pub use model::{Edge, GraphModel, IdAmbiguity, Node};
pub use snapshot::{EdgeRecord, GraphSnapshot, NodeRecord};
