//! Test data builders for circuit inputs

use circuit_vis::CircuitVector;

/// Builder for circuit vectors, one unit at a time
pub struct CircuitVectorBuilder {
    values: Vec<u32>,
}

impl CircuitVectorBuilder {
    pub fn new(feed_unit: u32) -> Self {
        Self {
            values: vec![feed_unit],
        }
    }

    /// Append a unit with its primary and secondary destinations
    pub fn unit(mut self, primary: u32, secondary: u32) -> Self {
        self.values.push(primary);
        self.values.push(secondary);
        self
    }

    pub fn values(self) -> Vec<u32> {
        self.values
    }

    pub fn build(self) -> CircuitVector {
        CircuitVector::new(self.values).expect("builder produced a malformed vector")
    }
}

/// Builder for text-grammar documents
#[derive(Default)]
pub struct CircuitTextBuilder {
    lines: Vec<String>,
}

impl CircuitTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn concentrate(self, from: &str, to: &str) -> Self {
        self.edge(from, to, Some("conc"))
    }

    pub fn tails(self, from: &str, to: &str) -> Self {
        self.edge(from, to, Some("tails"))
    }

    pub fn edge(mut self, from: &str, to: &str, label: Option<&str>) -> Self {
        match label {
            Some(label) => self
                .lines
                .push(format!("\"{}\" -> \"{}\" [label=\"{}\"]", from, to, label)),
            None => self.lines.push(format!("\"{}\" -> \"{}\"", from, to)),
        }
        self
    }

    pub fn label(mut self, node: &str, label: &str) -> Self {
        self.lines
            .push(format!("\"{}\" [label=\"{}\"]", node, label));
        self
    }

    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

