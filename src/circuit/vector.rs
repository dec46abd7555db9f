//! Circuit vectors and the two-line data file format.
//!
//! A circuit vector is `[feed_unit, dest0a, dest0b, dest1a, dest1b, ...]`:
//! element 0 names the unit that receives the plant feed and every following
//! pair lists the concentrate and tailing destinations of one unit.
//!
//! # Data files
//!
//! ```text
//! 0 3 1 3 2 3 5 4 7 6 3 3 8
//! 12.5, 3.1, 9.0, 2.2, 8.8, 1.1, 7.7, 0.5, 6.6, 0.4, 5.5, 0.3
//! ```
//!
//! Line 1 is the vector and line 2 (optional) holds per-edge flow weights.
//! Both accept commas and/or whitespace as separators and may be wrapped in
//! `[` `]`.

use crate::error::{CircuitError, Result, ResultExt};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A circuit vector whose length leaves whole destination pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitVector(Vec<u32>);

impl CircuitVector {
    /// Validate the pairing invariant.
    pub fn new(values: Vec<u32>) -> Result<Self> {
        if values.is_empty() || (values.len() - 1) % 2 != 0 {
            return Err(CircuitError::MalformedVector { len: values.len() });
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unit receiving the plant feed.
    pub fn feed_unit(&self) -> u32 {
        self.0[0]
    }

    /// Number of processing units, one per destination pair.
    pub fn unit_count(&self) -> usize {
        self.0.len() / 2
    }

    /// Number of stream edges leaving the units.
    pub fn stream_count(&self) -> usize {
        self.0.len() - 1
    }

    /// `(concentrate, tailing)` destinations of each unit in order.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0[1..].chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

impl fmt::Display for CircuitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl FromStr for CircuitVector {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_list(s, 1)?)
    }
}

/// Contents of a vector data file.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitData {
    pub vector: CircuitVector,
    pub weights: Option<Vec<f64>>,
}

impl CircuitData {
    /// Parse the two-line format. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, first) = lines.next().ok_or_else(|| CircuitError::DataFile {
            line: 1,
            message: "missing circuit vector".to_string(),
        })?;
        let vector = CircuitVector::new(parse_list(first, line_no)?)?;

        let weights = match lines.next() {
            Some((line_no, second)) => Some(parse_list(second, line_no)?),
            None => None,
        };

        if let Some((line_no, _)) = lines.next() {
            tracing::warn!("Ignoring trailing content from line {} on", line_no);
        }

        Ok(Self { vector, weights })
    }

    /// Read and parse a data file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid data file {}", path.display()))
    }
}

/// Split a comma and/or whitespace separated list, tolerating brackets.
fn parse_list<T>(line: &str, line_no: usize) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let inner = line.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<T>().map_err(|e| CircuitError::DataFile {
                line: line_no,
                message: format!("invalid value {:?}: {}", token, e),
            })
        })
        .collect()
}
