use std::collections::VecDeque;

use super::label::GestureLabel;
use crate::config::DebounceConfig;

/// Forwards a label only after it has been seen `threshold` frames in a row.
///
/// Every label goes through, `None` included; once a run is emitted the
/// buffer starts over.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer {
    threshold: usize,
    buffer: VecDeque<GestureLabel>,
}

impl Debouncer {
    pub fn new(threshold: usize) -> Self {
        let threshold = threshold.max(1);
        Self {
            threshold,
            buffer: VecDeque::with_capacity(threshold),
        }
    }

    pub fn from_config(config: &DebounceConfig) -> Self {
        Self::new(config.threshold)
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn push(&mut self, label: GestureLabel) -> Option<GestureLabel> {
        if self.buffer.len() >= self.threshold {
            self.buffer.pop_front();
        }
        self.buffer.push_back(label);

        if self.buffer.len() == self.threshold && self.buffer.iter().all(|&l| l == label) {
            self.buffer.clear();
            return Some(label);
        }
        None
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
