//! Intra/inter prediction modes and their decoding trees (spec §4.1
//! "Intra prediction modes", §4.1 interframe mode/motion-vector parsing).
//!
//! Grounded on `examples/original_source/src/decoder/modemv_data.hh`
//! (tree shapes, declared `extern` there with no literal values in the
//! read-only pack) and `scorer.hh`/`macroblock.cc` (the neighbor census
//! used to pick motion-vector prediction context).

use alfalfa_core::MvComponentProbs;

use crate::bool_decoder::{BoolDecoder, TreeNode};

/// 16x16 luma / chroma whole-macroblock intra modes, plus B_PRED which
/// defers to the 4x4 Y-block modes below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YMode {
    Dc,
    Vertical,
    Horizontal,
    TrueMotion,
    BPred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvMode {
    Dc,
    Vertical,
    Horizontal,
    TrueMotion,
}

/// 4x4 luma intra-prediction submodes, used when `YMode::BPred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BMode {
    BDc,
    BTm,
    BVe,
    BHe,
    BLd,
    BRd,
    BVr,
    BVl,
    BHd,
    BHu,
}

pub const B_MODE_TREE: [TreeNode; 18] = [
    -(BMode::BDc as i8),
    2,
    -(BMode::BTm as i8),
    4,
    -(BMode::BVe as i8),
    6,
    8,
    12,
    -(BMode::BHe as i8),
    10,
    -(BMode::BRd as i8),
    -(BMode::BVr as i8),
    -(BMode::BLd as i8),
    14,
    -(BMode::BVl as i8),
    16,
    -(BMode::BHd as i8),
    -(BMode::BHu as i8),
];

/// Keyframe y-mode tree: B_PRED splits off first, then DC/V/H/TM.
/// `[-BPred, 2, 4, 6, -Dc, -Vertical, -Horizontal, -TrueMotion]`.
pub const KF_Y_MODE_TREE: [TreeNode; 8] = [
    -(YMode::BPred as i8),
    2,
    4,
    6,
    -(YMode::Dc as i8),
    -(YMode::Vertical as i8),
    -(YMode::Horizontal as i8),
    -(YMode::TrueMotion as i8),
];

/// Interframe y-mode tree: DC splits off first, B_PRED is the deepest leaf.
/// `[-Dc, 2, 4, 6, -Vertical, -Horizontal, -TrueMotion, -BPred]`.
pub const Y_MODE_TREE: [TreeNode; 8] = [
    -(YMode::Dc as i8),
    2,
    4,
    6,
    -(YMode::Vertical as i8),
    -(YMode::Horizontal as i8),
    -(YMode::TrueMotion as i8),
    -(YMode::BPred as i8),
];

/// UV-mode tree, shared by keyframes and interframes (only the
/// probabilities differ). `[-Dc, 2, -Vertical, 4, -Horizontal, -TrueMotion]`.
pub const UV_MODE_TREE: [TreeNode; 6] = [
    -(UvMode::Dc as i8),
    2,
    -(UvMode::Vertical as i8),
    4,
    -(UvMode::Horizontal as i8),
    -(UvMode::TrueMotion as i8),
];

/// Which reference frame a macroblock's inter prediction reads from.
pub use alfalfa_core::ReferenceFrame;

/// Inter (interframe) macroblock motion-vector partitioning. `SplitMv`
/// carries one MV per sub-partition, the rest carry a single whole-
/// macroblock MV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MvMode {
    Nearest,
    Near,
    Zero,
    New,
    Split,
}

/// `mv_ref_tree`: zero splits off first, split (most expensive) is the
/// deepest leaf. `[-Zero, 2, -Nearest, 4, -Near, 6, -New, -Split]`.
pub const MV_REF_TREE: [TreeNode; 8] = [
    -(MvMode::Zero as i8),
    2,
    -(MvMode::Nearest as i8),
    4,
    -(MvMode::Near as i8),
    6,
    -(MvMode::New as i8),
    -(MvMode::Split as i8),
];

/// Per-census-count probability rows for `MV_REF_TREE`, indexed by the
/// neighbor vote total 0..=5 (`vp8_mode_contexts`). Declared `extern` in
/// the reference headers with no literal table in the read-only pack;
/// reconstructed here from the standard VP8 constants.
pub const MV_COUNTS_TO_PROBS: [[u8; 4]; 6] = [
    [7, 1, 1, 143],
    [14, 18, 14, 107],
    [135, 64, 57, 68],
    [60, 56, 128, 65],
    [234, 163, 129, 2],
    [246, 252, 253, 1],
];

/// Sub-macroblock motion-vector partitioning scheme for SPLITMV, one of
/// four fixed layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPartition {
    Sixteen8,
    Eight16,
    Eight8,
    Four4,
}

/// `split_mv_tree`: 4x4 (finest) splits off first. `[-Four4, 2, -Eight8,
/// 4, -Sixteen8, -Eight16]`.
pub const SPLIT_MV_TREE: [TreeNode; 6] = [
    -(SplitPartition::Four4 as i8),
    2,
    -(SplitPartition::Eight8 as i8),
    4,
    -(SplitPartition::Sixteen8 as i8),
    -(SplitPartition::Eight16 as i8),
];

pub const SPLIT_MV_PROBS: [u8; 3] = [110, 111, 150];

/// Maps each of the 16 4x4 luma sub-blocks (row-major) to the partition
/// index it belongs to, one row per [`SplitPartition`].
pub const MV_PARTITIONS: [[u8; 16]; 4] = [
    // 16x8: top half / bottom half
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1],
    // 8x16: left half / right half
    [0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1],
    // 8x8: four quadrants
    [0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 3, 3, 2, 2, 3, 3],
    // 4x4: every sub-block its own partition
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
];

pub const MV_PARTITION_COUNTS: [usize; 4] = [2, 2, 4, 16];

/// Per-4x4-subblock motion-vector mode used inside SPLITMV, distinct from
/// the whole-macroblock `BMode` intra submodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMvMode {
    Left4x4,
    Above4x4,
    Zero4x4,
    New4x4,
}

/// `submv_ref_tree`: `[-Left4x4, 2, -Above4x4, 4, -Zero4x4, -New4x4]`.
pub const SUBMV_REF_TREE: [TreeNode; 6] = [
    -(SubMvMode::Left4x4 as i8),
    2,
    -(SubMvMode::Above4x4 as i8),
    4,
    -(SubMvMode::Zero4x4 as i8),
    -(SubMvMode::New4x4 as i8),
];

/// Context-selected probability rows for `SUBMV_REF_TREE`, selected by
/// how the left/above sub-block MVs compare (`submv_ref_probs2`).
pub const SUBMV_REF_PROBS2: [[u8; 3]; 5] = [
    [147, 136, 18],
    [106, 145, 1],
    [179, 121, 1],
    [223, 1, 34],
    [208, 1, 1],
];

/// 8-ary small-motion-vector tree, values 0..=7.
pub const SMALL_MV_TREE: [TreeNode; 14] = [2, 8, 4, 6, -0, -1, -2, -3, 10, 12, -4, -5, -6, -7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionVector {
    pub row: i16,
    pub col: i16,
}

impl MotionVector {
    pub fn zero() -> Self {
        Self { row: 0, col: 0 }
    }

    pub fn is_zero(&self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// Read one row/column motion-vector pair (spec: row decoded before
    /// column). Grounded on `MotionVector::MotionVector(BoolDecoder &,
    /// Prob(&)[2][MVPcount])` in `macroblock.cc`.
    pub fn read(d: &mut BoolDecoder, probs: &[MvComponentProbs; 2]) -> Self {
        Self {
            row: Self::read_component(d, &probs[0]),
            col: Self::read_component(d, &probs[1]),
        }
    }

    fn read_component(d: &mut BoolDecoder, probs: &MvComponentProbs) -> i16 {
        let mut x: i32 = 0;
        if d.get(probs.is_short) {
            for i in 0..3 {
                x += (d.get(probs.bits[i]) as i32) << i;
            }
            for i in (4..10).rev() {
                x += (d.get(probs.bits[i]) as i32) << i;
            }
            if (x & 0xFFF0) == 0 || d.get(probs.bits[3]) {
                x += 8;
            }
        } else {
            x = d.tree(&SMALL_MV_TREE, &probs.short) as i32;
        }
        if x != 0 && d.get(probs.sign) {
            x = -x;
        }
        (x * 2) as i16
    }

    /// Clamp a predicted or decoded motion vector to stay within the
    /// frame bounds plus a one-macroblock margin, in eighth-pel units.
    /// Grounded on `Scorer::clamp` in `scorer.hh`.
    pub fn clamp(&self, mb_col: usize, mb_row: usize, mb_cols: usize, mb_rows: usize) -> Self {
        let to_left = (-((mb_col as i32) * 16) << 3) - 128;
        let to_right = (((mb_cols - mb_col - 1) as i32) * 16 << 3) + 128;
        let to_top = (-((mb_row as i32) * 16) << 3) - 128;
        let to_bottom = (((mb_rows - mb_row - 1) as i32) * 16 << 3) + 128;
        Self {
            row: (self.row as i32).clamp(to_top, to_bottom) as i16,
            col: (self.col as i32).clamp(to_left, to_right) as i16,
        }
    }

    /// Derive a chroma motion vector from the four luma sub-block MVs
    /// that cover the corresponding 8x8 luma area, per `MotionVector::
    /// luma_to_chroma` in `macroblock.cc`: sum then round-to-even-eighth,
    /// not a simple halving of one luma MV.
    pub fn luma_to_chroma(mvs: [MotionVector; 4]) -> Self {
        let round = |sum: i32| if sum >= 0 { (sum + 4) >> 3 } else { -((-sum + 4) >> 3) };
        let row_sum: i32 = mvs.iter().map(|m| m.row as i32).sum();
        let col_sum: i32 = mvs.iter().map(|m| m.col as i32).sum();
        Self {
            row: round(row_sum) as i16,
            col: round(col_sum) as i16,
        }
    }
}

fn tree_walk<const N: usize>(d: &mut BoolDecoder, nodes: &[TreeNode; N], probs: &[u8]) -> usize {
    d.tree(nodes, probs)
}

pub fn read_b_mode(d: &mut BoolDecoder, probs: &[u8; 9]) -> BMode {
    const MODES: [BMode; 10] = [
        BMode::BDc,
        BMode::BTm,
        BMode::BVe,
        BMode::BHe,
        BMode::BLd,
        BMode::BRd,
        BMode::BVr,
        BMode::BVl,
        BMode::BHd,
        BMode::BHu,
    ];
    MODES[tree_walk(d, &B_MODE_TREE, probs)]
}

pub fn read_y_mode(d: &mut BoolDecoder, probs: &[u8; 4]) -> YMode {
    const MODES: [YMode; 5] = [YMode::Dc, YMode::Vertical, YMode::Horizontal, YMode::TrueMotion, YMode::BPred];
    MODES[tree_walk(d, &Y_MODE_TREE, probs)]
}

pub fn read_uv_mode(d: &mut BoolDecoder, probs: &[u8; 3]) -> UvMode {
    const MODES: [UvMode; 4] = [UvMode::Dc, UvMode::Vertical, UvMode::Horizontal, UvMode::TrueMotion];
    MODES[tree_walk(d, &UV_MODE_TREE, probs)]
}

pub fn read_kf_y_mode(d: &mut BoolDecoder, probs: &[u8; 4]) -> YMode {
    const MODES: [YMode; 5] = [YMode::Dc, YMode::Vertical, YMode::Horizontal, YMode::TrueMotion, YMode::BPred];
    MODES[tree_walk(d, &KF_Y_MODE_TREE, probs)]
}

pub fn read_mv_mode(d: &mut BoolDecoder, probs: &[u8; 4]) -> MvMode {
    const MODES: [MvMode; 5] = [MvMode::Nearest, MvMode::Near, MvMode::Zero, MvMode::New, MvMode::Split];
    MODES[tree_walk(d, &MV_REF_TREE, probs)]
}

pub fn read_split_partition(d: &mut BoolDecoder) -> SplitPartition {
    const PARTITIONS: [SplitPartition; 4] = [
        SplitPartition::Sixteen8,
        SplitPartition::Eight16,
        SplitPartition::Eight8,
        SplitPartition::Four4,
    ];
    PARTITIONS[tree_walk(d, &SPLIT_MV_TREE, &SPLIT_MV_PROBS)]
}

pub fn read_sub_mv_mode(d: &mut BoolDecoder, probs: &[u8; 3]) -> SubMvMode {
    const MODES: [SubMvMode; 4] = [SubMvMode::Left4x4, SubMvMode::Above4x4, SubMvMode::Zero4x4, SubMvMode::New4x4];
    MODES[tree_walk(d, &SUBMV_REF_TREE, probs)]
}

/// Neighbor census used to pick a motion-vector prediction (NEAREST/NEAR)
/// and the `mv_ref_tree` probability row, grounded on `Scorer` in
/// `scorer.hh`. Each neighbor contributes its whole-macroblock MV (for
/// SPLITMV, its first sub-block MV, as the real decoder does) weighted
/// by position: above and left each score 2, above-left scores 1.
#[derive(Debug, Default)]
pub struct Scorer {
    scores: [u32; 4],
    motion_vectors: [MotionVector; 4],
    splitmv_score: u32,
    index: usize,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_mv(&mut self, score: u32, mv: MotionVector) {
        if mv.is_zero() {
            self.scores[0] += score;
            return;
        }
        if self.index > 0 && mv == self.motion_vectors[self.index] {
            self.scores[self.index] += score;
        } else {
            self.index += 1;
            self.motion_vectors[self.index] = mv;
            self.scores[self.index] += score;
        }
    }

    /// Fold in one neighbor. `flip` is true when the neighbor's reference
    /// frame has a sign bias differing from the current macroblock's.
    pub fn add(&mut self, score: u32, mb: Option<(bool, MotionVector, bool)>) {
        let Some((is_inter, mv, split)) = mb else { return };
        if !is_inter {
            return;
        }
        self.add_mv(score, mv);
        if split {
            self.splitmv_score += score;
        }
    }

    /// Finalize nearest/near/best after all neighbors have been added.
    /// If a fourth distinct vector ever shows up it folds into the
    /// nearest slot's score, near and nearest are swapped if near
    /// outscored it, and best is set to nearest's vector whenever nearest
    /// outscored the zero bucket (best otherwise stays the zero vector
    /// it was initialized with).
    pub fn calculate(&mut self) {
        if self.index == 3 {
            self.scores[1] += self.scores[3];
        }
        if self.scores[2] > self.scores[1] {
            self.scores.swap(1, 2);
            self.motion_vectors.swap(1, 2);
        }
        if self.scores[1] >= self.scores[0] {
            self.motion_vectors[0] = self.motion_vectors[1];
        }
    }

    pub fn mode_contexts(&self) -> [u32; 4] {
        [self.scores[0], self.scores[1], self.scores[2], self.splitmv_score]
    }

    pub fn nearest(&self) -> MotionVector {
        self.motion_vectors[1]
    }

    pub fn near(&self) -> MotionVector {
        self.motion_vectors[2]
    }

    pub fn best(&self) -> MotionVector {
        self.motion_vectors[0]
    }
}

/// Look up the `mv_ref_tree` probability row for a census total, clamping
/// to the last row for totals beyond the table (shouldn't happen with
/// real neighbor weights, but keeps this a total function).
pub fn mv_ref_probs(counts: [u32; 4]) -> [u8; 4] {
    let mut probs = [0u8; 4];
    for (i, &count) in counts.iter().enumerate() {
        let row = (count as usize).min(MV_COUNTS_TO_PROBS.len() - 1);
        probs[i] = MV_COUNTS_TO_PROBS[row][i];
    }
    probs
}
