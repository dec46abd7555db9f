//! Rank-based sink classification.
//!
//! The three largest distinct values of a circuit vector stand for the
//! plant's terminal streams. Which sink a destination goes to depends only on
//! the value's rank across the whole vector, never on where it appears.

use crate::error::{CircuitError, Result};
use crate::graph::Sink;

/// The three largest distinct values of a vector, in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkRanks {
    pub first: u32,
    pub second: u32,
    pub third: u32,
}

impl SinkRanks {
    /// Sink assigned to `value`, or `None` for an ordinary unit.
    pub fn resolve(&self, value: u32) -> Option<Sink> {
        if value == self.first {
            Some(Sink::Tailing)
        } else if value == self.second {
            Some(Sink::Gormanium)
        } else if value == self.third {
            Some(Sink::Palusznium)
        } else {
            None
        }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.first, self.second, self.third)
    }
}

/// Find the three largest distinct values in `values`.
///
/// Duplicates of a ranked value never occupy a lower rank: `[5, 5, 3, 3, 1]`
/// ranks as `(5, 3, 1)`. Fails when fewer than three distinct values exist.
pub fn classify_sinks(values: &[u32]) -> Result<SinkRanks> {
    let mut top: [Option<u32>; 3] = [None; 3];

    for &value in values {
        if top.contains(&Some(value)) {
            continue;
        }

        if top[0].map_or(true, |t| value > t) {
            top = [Some(value), top[0], top[1]];
        } else if top[1].map_or(true, |t| value > t) {
            top = [top[0], Some(value), top[1]];
        } else if top[2].map_or(true, |t| value > t) {
            top[2] = Some(value);
        }
    }

    match top {
        [Some(first), Some(second), Some(third)] => Ok(SinkRanks {
            first,
            second,
            third,
        }),
        _ => Err(CircuitError::InsufficientDistinctValues {
            found: top.iter().flatten().count(),
        }),
    }
}
