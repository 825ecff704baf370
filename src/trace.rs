//! The voltage-vs-time trace produced by a run.

/// One (time, voltage) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Elapsed simulation time (s)
    pub time_s: f64,
    /// Node voltage at this time (V)
    pub voltage_v: f64,
}

/// Append-only, ordered sequence of [`Sample`]s.
///
/// The first entry is always the initialization sample at `t = 0`; the loop
/// appends one sample per step. Never mutated after the loop exits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    samples: Vec<Sample>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// The time of the most recent sample, if any.
    pub fn last_time(&self) -> Option<f64> {
        self.samples.last().map(|s| s.time_s)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples in append order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}
