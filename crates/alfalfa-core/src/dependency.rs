//! DependencyTracker: records which reference hashes a frame actually
//! consumed while it was parsed, so the resulting source-hash only names
//! dependencies the frame genuinely has (spec §4.1 "Dependency tracking").
//!
//! Grounded on `examples/original_source/src/decoder/dependency_tracker.hh`.

use crate::hash::DecoderHash;
use crate::name::SourceName;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependencyTracker {
    state: bool,
    last: bool,
    golden: bool,
    alt: bool,
}

impl DependencyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_state(&mut self) {
        self.state = true;
    }
    pub fn mark_last(&mut self) {
        self.last = true;
    }
    pub fn mark_golden(&mut self) {
        self.golden = true;
    }
    pub fn mark_alt(&mut self) {
        self.alt = true;
    }

    pub fn uses_state(&self) -> bool {
        self.state
    }
    pub fn uses_last(&self) -> bool {
        self.last
    }
    pub fn uses_golden(&self) -> bool {
        self.golden
    }
    pub fn uses_alt(&self) -> bool {
        self.alt
    }

    /// Build a source-hash that only names the components this tracker
    /// observed the frame actually reading, filtering out the rest as
    /// wildcards even though the decoder held concrete values for them.
    pub fn build_source(&self, before: &DecoderHash) -> SourceName {
        SourceName {
            state: self.state.then_some(before.state),
            last: self.last.then_some(before.last),
            golden: self.golden.then_some(before.golden),
            alt: self.alt.then_some(before.alt),
        }
    }
}
