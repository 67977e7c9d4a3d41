//! DecoderState: all non-raster decoder persistent state (spec §3).

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use twox_hash::XxHash64;

/// Coefficient probabilities: [block type][coefficient band][local context][tree node].
///
/// Block types are Y-after-Y2 (0), Y2 (1), UV (2), Y-with-no-Y2 (3); bands
/// are the eight VP8 coefficient bands; local context is 0..3 derived from
/// neighboring nonzero-ness; tree node is one of the 11 probabilities that
/// walk the coefficient token tree.
pub type CoeffProbs = [[[[u8; 11]; 3]; 8]; 4];

/// Default VP8 coefficient probabilities (spec §4.1), laid out
/// `[block type][band][context][tree node]` in the same order as
/// `CoeffProbs`. Block type 0 is Y-after-Y2, 1 is Y2, 2 is UV, 3 is
/// Y-without-Y2, matching `PlaneType` in `alfalfa-codec`.
pub fn default_coeff_probs() -> CoeffProbs {
    DEFAULT_COEFF_PROBS
}

#[rustfmt::skip]
const DEFAULT_COEFF_PROBS: CoeffProbs = [
    // Block type 0: Y beginning at coefficient 1 (after Y2)
    [
        [[128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128],
         [128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128],
         [128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128]],
        [[253, 136, 254, 255, 228, 219, 128, 128, 128, 128, 128],
         [189, 129, 242, 255, 227, 213, 255, 219, 128, 128, 128],
         [106, 126, 227, 252, 214, 209, 255, 255, 128, 128, 128]],
        [[  1,  98, 248, 255, 236, 226, 255, 255, 128, 128, 128],
         [181, 133, 238, 254, 221, 234, 255, 154, 128, 128, 128],
         [ 78, 134, 202, 247, 198, 180, 255, 219, 128, 128, 128]],
        [[  1, 185, 249, 255, 243, 255, 128, 128, 128, 128, 128],
         [184, 150, 247, 255, 236, 224, 128, 128, 128, 128, 128],
         [ 77, 110, 216, 255, 236, 230, 128, 128, 128, 128, 128]],
        [[  1, 101, 251, 255, 241, 255, 128, 128, 128, 128, 128],
         [170, 139, 241, 252, 236, 209, 255, 255, 128, 128, 128],
         [ 37, 116, 196, 243, 228, 255, 255, 255, 128, 128, 128]],
        [[  1, 204, 254, 255, 245, 255, 128, 128, 128, 128, 128],
         [207, 160, 250, 255, 238, 128, 128, 128, 128, 128, 128],
         [102, 103, 225, 255, 233, 128, 128, 128, 128, 128, 128]],
        [[  1, 152, 252, 255, 240, 255, 128, 128, 128, 128, 128],
         [177, 135, 243, 255, 234, 225, 128, 128, 128, 128, 128],
         [ 80, 129, 211, 255, 194, 224, 128, 128, 128, 128, 128]],
        [[  1,   1, 255, 128, 128, 128, 128, 128, 128, 128, 128],
         [246,   1, 255, 128, 128, 128, 128, 128, 128, 128, 128],
         [255, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128]],
    ],
    // Block type 1: Y2
    [
        [[198,  35, 237, 223, 193, 187, 162, 160, 145, 155,  62],
         [131,  45, 198, 221, 172, 176, 220, 157, 252, 221,   1],
         [ 68,  47, 146, 208, 149, 167, 221, 162, 255, 223, 128]],
        [[  1, 149, 241, 255, 221, 224, 255, 255, 128, 128, 128],
         [184, 141, 234, 253, 222, 220, 255, 199, 128, 128, 128],
         [ 81,  99, 181, 242, 176, 190, 249, 202, 255, 255, 128]],
        [[  1, 129, 232, 253, 214, 197, 242, 196, 255, 255, 128],
         [ 99, 121, 210, 250, 201, 198, 255, 202, 128, 128, 128],
         [ 23,  91, 163, 242, 170, 187, 247, 210, 255, 255, 128]],
        [[  1, 200, 246, 255, 234, 255, 128, 128, 128, 128, 128],
         [109, 178, 241, 255, 231, 245, 255, 255, 128, 128, 128],
         [ 44, 130, 201, 253, 205, 192, 255, 255, 128, 128, 128]],
        [[  1, 132, 239, 251, 219, 209, 255, 165, 128, 128, 128],
         [ 94, 136, 225, 251, 218, 190, 255, 255, 128, 128, 128],
         [ 22, 100, 174, 245, 186, 161, 255, 199, 128, 128, 128]],
        [[  1, 182, 249, 255, 232, 235, 128, 128, 128, 128, 128],
         [124, 143, 241, 255, 227, 234, 128, 128, 128, 128, 128],
         [ 35,  77, 181, 251, 193, 211, 255, 205, 128, 128, 128]],
        [[  1, 157, 247, 255, 236, 231, 255, 255, 128, 128, 128],
         [121, 141, 235, 255, 225, 227, 255, 255, 128, 128, 128],
         [ 45,  99, 188, 251, 195, 217, 255, 224, 128, 128, 128]],
        [[  1,   1, 251, 255, 213, 255, 128, 128, 128, 128, 128],
         [203,   1, 248, 255, 255, 128, 128, 128, 128, 128, 128],
         [137,   1, 177, 255, 224, 255, 128, 128, 128, 128, 128]],
    ],
    // Block type 2: UV
    [
        [[253,   9, 248, 251, 207, 208, 255, 192, 128, 128, 128],
         [175,  13, 224, 243, 193, 185, 249, 198, 255, 255, 128],
         [ 73,  17, 171, 221, 161, 179, 236, 167, 255, 234, 128]],
        [[  1,  95, 247, 253, 212, 183, 255, 255, 128, 128, 128],
         [239,  90, 244, 250, 211, 209, 255, 255, 128, 128, 128],
         [155,  77, 195, 248, 188, 195, 255, 255, 128, 128, 128]],
        [[  1,  24, 239, 251, 218, 219, 255, 205, 128, 128, 128],
         [201,  51, 219, 255, 196, 186, 128, 128, 128, 128, 128],
         [ 69,  46, 190, 239, 201, 218, 255, 228, 128, 128, 128]],
        [[  1, 191, 251, 255, 255, 128, 128, 128, 128, 128, 128],
         [223, 165, 249, 255, 213, 255, 128, 128, 128, 128, 128],
         [141, 124, 248, 255, 255, 128, 128, 128, 128, 128, 128]],
        [[  1,  16, 248, 255, 255, 128, 128, 128, 128, 128, 128],
         [190,  36, 230, 255, 236, 255, 128, 128, 128, 128, 128],
         [149,   1, 255, 128, 128, 128, 128, 128, 128, 128, 128]],
        [[  1, 226, 255, 128, 128, 128, 128, 128, 128, 128, 128],
         [247, 192, 255, 128, 128, 128, 128, 128, 128, 128, 128],
         [240, 128, 255, 128, 128, 128, 128, 128, 128, 128, 128]],
        [[  1, 134, 252, 255, 255, 128, 128, 128, 128, 128, 128],
         [213,  62, 250, 255, 255, 128, 128, 128, 128, 128, 128],
         [ 55,  93, 255, 128, 128, 128, 128, 128, 128, 128, 128]],
        [[128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128],
         [128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128],
         [128, 128, 128, 128, 128, 128, 128, 128, 128, 128, 128]],
    ],
    // Block type 3: Y, no Y2
    [
        [[202,  24, 213, 235, 186, 191, 220, 160, 240, 175, 255],
         [126,  38, 166, 203, 150, 165, 182, 138, 246, 172, 255],
         [ 61,  46, 138, 188, 137, 167, 160, 116, 238, 133, 255]],
        [[  1, 112, 230, 250, 199, 191, 247, 159, 255, 255, 128],
         [166, 109, 228, 252, 211, 215, 255, 223, 128, 128, 128],
         [ 39,  77, 162, 232, 172, 180, 245, 178, 255, 255, 128]],
        [[  1,  52, 220, 246, 198, 199, 249, 220, 255, 255, 128],
         [124,  74, 191, 243, 183, 193, 250, 221, 255, 255, 128],
         [ 24,  71, 130, 219, 154, 170, 243, 182, 255, 255, 128]],
        [[  1, 182, 225, 249, 219, 240, 255, 224, 128, 128, 128],
         [149, 150, 226, 252, 216, 205, 255, 171, 128, 128, 128],
         [ 28, 108, 170, 242, 183, 194, 254, 223, 255, 255, 128]],
        [[  1,  81, 230, 252, 204, 203, 255, 192, 128, 128, 128],
         [123, 102, 209, 247, 188, 196, 255, 233, 128, 128, 128],
         [ 20,  95, 153, 243, 164, 173, 255, 203, 128, 128, 128]],
        [[  1, 222, 248, 255, 216, 213, 128, 128, 128, 128, 128],
         [168, 175, 246, 252, 235, 205, 255, 255, 128, 128, 128],
         [ 47, 116, 215, 255, 211, 212, 255, 255, 128, 128, 128]],
        [[  1, 121, 236, 253, 212, 214, 255, 255, 128, 128, 128],
         [141,  84, 213, 252, 201, 202, 255, 219, 128, 128, 128],
         [ 42,  80, 160, 240, 162, 185, 255, 205, 128, 128, 128]],
        [[  1,   1, 255, 128, 128, 128, 128, 128, 128, 128, 128],
         [244,   1, 255, 128, 128, 128, 128, 128, 128, 128, 128],
         [238,   1, 255, 128, 128, 128, 128, 128, 128, 128, 128]],
    ],
];

/// Y-mode (intra 16x16 prediction mode) probabilities: 4 tree probabilities.
pub type YModeProbs = [u8; 4];
pub fn default_y_mode_probs() -> YModeProbs {
    [112, 86, 140, 37]
}

/// UV-mode (intra chroma prediction mode) probabilities: 3 tree probabilities.
pub type UvModeProbs = [u8; 3];
pub fn default_uv_mode_probs() -> UvModeProbs {
    [162, 101, 204]
}

/// Motion vector component probabilities (per spec: sign, short tree, long
/// bits) for each of the two components (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MvComponentProbs {
    pub is_short: u8,
    pub sign: u8,
    pub short: [u8; 7],
    pub bits: [u8; 10],
}

pub type MvProbs = [MvComponentProbs; 2];

/// Default VP8 motion-vector component probabilities, row then column.
pub fn default_mv_probs() -> MvProbs {
    [
        MvComponentProbs {
            is_short: 162,
            sign: 128,
            short: [225, 146, 172, 147, 214, 39, 156],
            bits: [128, 129, 132, 75, 145, 178, 206, 239, 254, 254],
        },
        MvComponentProbs {
            is_short: 164,
            sign: 128,
            short: [204, 170, 119, 235, 140, 230, 228],
            bits: [128, 130, 130, 74, 148, 180, 203, 236, 254, 254],
        },
    ]
}

/// Full entropy-coding probability state carried between frames when
/// `refresh_entropy_probs` allows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntropyTables {
    pub coeff_probs: CoeffProbs,
    pub y_mode_probs: YModeProbs,
    pub uv_mode_probs: UvModeProbs,
    pub mv_probs: MvProbs,
}

impl EntropyTables {
    pub fn defaults() -> Self {
        Self {
            coeff_probs: default_coeff_probs(),
            y_mode_probs: default_y_mode_probs(),
            uv_mode_probs: default_uv_mode_probs(),
            mv_probs: default_mv_probs(),
        }
    }
}

/// Per-segment quantizer and filter-level adjustments, read once per frame.
/// The persistent macroblock-to-segment map lives on `DecoderState`
/// directly: VP8 only resends per-macroblock segment-id updates on frames
/// where `tree_probs` is `Some`, so the map itself has to survive frames
/// that don't touch it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segmentation {
    /// true = absolute values, false = delta from frame defaults.
    pub absolute_values: bool,
    pub quantizer_update: [i8; 4],
    pub filter_level_update: [i8; 4],
    /// Segment-id tree probabilities, present only on frames that update
    /// the per-macroblock segment map.
    pub tree_probs: Option<[u8; 3]>,
}

/// Per-reference-frame and per-mode loop-filter deltas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterAdjustments {
    pub ref_frame_delta: [i8; 4],
    pub mode_delta: [i8; 4],
}

/// All decoder state other than the raster references themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecoderState {
    pub width: u32,
    pub height: u32,
    pub entropy: EntropyTables,
    pub segmentation: Option<Segmentation>,
    /// One segment id (0..=3) per macroblock, row-major; persists across
    /// frames that don't update it.
    pub segment_map: Vec<u8>,
    pub filter_adjustments: Option<FilterAdjustments>,
}

impl DecoderState {
    pub fn new(width: u32, height: u32) -> Self {
        let mb_count = (width.div_ceil(16) * height.div_ceil(16)) as usize;
        Self {
            width,
            height,
            entropy: EntropyTables::defaults(),
            segmentation: None,
            segment_map: vec![0; mb_count],
            filter_adjustments: None,
        }
    }

    /// Reset all persistent state to the keyframe defaults, keeping
    /// dimensions.
    pub fn reset_to_keyframe_defaults(&mut self) {
        self.entropy = EntropyTables::defaults();
        self.segmentation = None;
        self.segment_map.iter_mut().for_each(|s| *s = 0);
        self.filter_adjustments = None;
    }

    /// 64-bit content hash of every field.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = XxHash64::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframe_reset_restores_defaults() {
        let mut state = DecoderState::new(16, 16);
        state.segmentation = Some(Segmentation {
            absolute_values: true,
            quantizer_update: [1, 2, 3, 4],
            filter_level_update: [0, 0, 0, 0],
            tree_probs: Some([1, 2, 3]),
        });
        state.segment_map[0] = 3;
        state.reset_to_keyframe_defaults();
        assert!(state.segmentation.is_none());
        assert!(state.segment_map.iter().all(|&s| s == 0));
        assert_eq!(state.entropy, EntropyTables::defaults());
    }

    #[test]
    fn equal_states_hash_equal() {
        let a = DecoderState::new(32, 32);
        let b = DecoderState::new(32, 32);
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn differing_dimensions_hash_differ() {
        let a = DecoderState::new(32, 32);
        let b = DecoderState::new(64, 32);
        assert_ne!(a.content_hash(), b.content_hash());
    }
}
