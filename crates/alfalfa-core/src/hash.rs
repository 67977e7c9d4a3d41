//! DecoderHash: compact identifier of a decoder's observable state
//! (spec §3, §4.3). The normative form is the 4-tuple
//! `(state, last, golden, alt)`; the 5-tuple continuation-hash variant from
//! the original implementation is deprecated and not carried forward
//! (spec §9 Open Questions).

use serde::{Deserialize, Serialize};

use crate::name::SourceName;

/// `(state_hash, last_hash, golden_hash, alt_hash)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecoderHash {
    pub state: u64,
    pub last: u64,
    pub golden: u64,
    pub alt: u64,
}

impl DecoderHash {
    pub fn new(state: u64, last: u64, golden: u64, alt: u64) -> Self {
        Self {
            state,
            last,
            golden,
            alt,
        }
    }

    /// A single 64-bit value that combines all four components, for use as
    /// a catalog secondary-index key.
    pub fn combined(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = twox_hash::XxHash64::default();
        self.state.hash(&mut hasher);
        self.last.hash(&mut hasher);
        self.golden.hash(&mut hasher);
        self.alt.hash(&mut hasher);
        hasher.finish()
    }

    /// True iff every *present* component of `source` equals the
    /// corresponding component here. Absent components are wildcards.
    pub fn can_decode(&self, source: &SourceName) -> bool {
        source.state.map_or(true, |h| h == self.state)
            && source.last.map_or(true, |h| h == self.last)
            && source.golden.map_or(true, |h| h == self.golden)
            && source.alt.map_or(true, |h| h == self.alt)
    }
}
