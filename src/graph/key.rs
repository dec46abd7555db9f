//! Node identities.
//!
//! A [`NodeKey`] names a node by what it is rather than where it is stored.
//! Unit numbers live in two separate spaces: the position of a unit in the
//! pairing scheme ([`UnitRef::Index`]) and a destination value read out of a
//! circuit vector ([`UnitRef::Value`]). Both display as `"Unit N"`, but the
//! model keeps them apart so collisions can be reported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three ranked terminal streams of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sink {
    /// Largest value in the vector
    Tailing,
    /// Second largest distinct value
    Gormanium,
    /// Third largest distinct value
    Palusznium,
}

impl Sink {
    /// All sinks in rank order
    pub const ALL: [Sink; 3] = [Sink::Tailing, Sink::Gormanium, Sink::Palusznium];

    pub const fn name(self) -> &'static str {
        match self {
            Sink::Tailing => "Tailing",
            Sink::Gormanium => "Gormanium",
            Sink::Palusznium => "Palusznium",
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference to a processing unit in one of the two numbering spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitRef {
    /// Structural position of the unit in the pairing scheme
    Index(u32),
    /// Destination value taken literally from the vector
    Value(u32),
}

impl UnitRef {
    /// The number shown after `"Unit "`
    pub fn number(self) -> u32 {
        match self {
            UnitRef::Index(n) | UnitRef::Value(n) => n,
        }
    }
}

/// Identity of a node in a [`GraphModel`](super::GraphModel).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    /// Synthetic plant feed
    Feed,
    /// A processing unit
    Unit(UnitRef),
    /// A ranked terminal stream
    Sink(Sink),
    /// A free-form node name, as used by the text grammar and legend nodes
    Named(String),
}

impl NodeKey {
    pub fn unit_index(index: u32) -> Self {
        NodeKey::Unit(UnitRef::Index(index))
    }

    pub fn unit_value(value: u32) -> Self {
        NodeKey::Unit(UnitRef::Value(value))
    }

    pub fn named(name: impl Into<String>) -> Self {
        NodeKey::Named(name.into())
    }

    /// The identifier handed to renderers.
    pub fn display_name(&self) -> String {
        match self {
            NodeKey::Feed => "Feed".to_string(),
            NodeKey::Unit(unit) => format!("Unit {}", unit.number()),
            NodeKey::Sink(sink) => sink.name().to_string(),
            NodeKey::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
