//! Circuit vector front end.
//!
//! - [`rank`] - three-tier sink ranking over the whole vector
//! - [`vector`] - validated vectors and the two-line data file
//! - [`decoder`] - vector to [`GraphModel`](crate::graph::GraphModel)
//! - [`legend`] - caption and legend decorations

pub mod decoder;
pub mod legend;
pub mod rank;
pub mod vector;

pub use decoder::CircuitVectorDecoder;
pub use legend::{decorate, LegendOptions};
pub use rank::{classify_sinks, SinkRanks};
pub use vector::{CircuitData, CircuitVector};
