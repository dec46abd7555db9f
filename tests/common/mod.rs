//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use circuit_vis::graph::{EdgeRecord, GraphSnapshot};
use std::io::Write;
use tempfile::NamedTempFile;

/// The sample circuit used throughout the docs
pub const SAMPLE_VECTOR: [u32; 13] = [0, 3, 1, 3, 2, 3, 5, 4, 7, 6, 3, 3, 8];

/// Write `contents` to a fresh temporary file
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Edges of `snapshot` running from `from` to `to`
pub fn edges_between<'a>(snapshot: &'a GraphSnapshot, from: &str, to: &str) -> Vec<&'a EdgeRecord> {
    snapshot
        .edges
        .iter()
        .filter(|e| e.from == from && e.to == to)
        .collect()
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
