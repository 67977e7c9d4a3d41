//! Per-macroblock header and residue decoding, and reconstruction (spec
//! §4.1 "Macroblock reconstruction").
//!
//! Grounded on `examples/original_source/src/decoder/macroblock.cc`.

use alfalfa_core::{DecoderState, EntropyTables, Plane, Raster, ReferenceFrame, SafeRaster};

use crate::bool_decoder::BoolDecoder;
use crate::modes::{
    mv_ref_probs, read_b_mode, read_kf_y_mode, read_mv_mode, read_split_partition, read_sub_mv_mode, read_uv_mode,
    read_y_mode, BMode, MotionVector, MvMode, Scorer, SubMvMode, UvMode, YMode, MV_PARTITIONS, MV_PARTITION_COUNTS,
    SUBMV_REF_PROBS2,
};
use crate::prediction::{predict_b_mode, predict_block, sixtap_predict, PredMode, COL_129, ROW_127};
use crate::quantization::DequantFactors;
use crate::tokens::{read_coefficient, PlaneType, COEFF_BANDS, ZIGZAG};
use crate::transform::{add_residual, idct4x4, iwht4x4, Block4x4};

/// Decoded per-macroblock mode/motion header, independent of residue.
#[derive(Debug, Clone)]
pub struct MacroblockHeader {
    pub segment_id: u8,
    pub skip_coeff: bool,
    pub is_inter: bool,
    pub y_mode: YMode,
    pub uv_mode: UvMode,
    pub b_modes: [BMode; 16],
    pub reference: ReferenceFrame,
    pub mv_mode: MvMode,
    pub mvs: [MotionVector; 16],
    pub has_nonzero_residue: bool,
}

impl MacroblockHeader {
    fn intra_default() -> Self {
        Self {
            segment_id: 0,
            skip_coeff: false,
            is_inter: false,
            y_mode: YMode::Dc,
            uv_mode: UvMode::Dc,
            b_modes: [BMode::BDc; 16],
            reference: ReferenceFrame::Last,
            mv_mode: MvMode::Zero,
            mvs: [MotionVector::zero(); 16],
            has_nonzero_residue: false,
        }
    }
}

const KF_Y_MODE_TREE_PROBS: [u8; 4] = [145, 156, 163, 128];
const KF_UV_MODE_PROBS: [u8; 3] = [142, 114, 183];
/// `invariant_b_mode_probs`: the context-independent B_PRED submode
/// probabilities used outside keyframes (the real per-neighbor
/// `kf_b_mode_probs` table is keyframe-only).
const B_MODE_PROBS: [u8; 9] = [120, 90, 79, 133, 87, 85, 80, 111, 151];

fn read_segment_id(d: &mut BoolDecoder, probs: &[u8; 3]) -> u8 {
    if !d.get(probs[0]) {
        d.get(probs[1]) as u8
    } else {
        2 + d.get(probs[2]) as u8
    }
}

/// Read a keyframe macroblock's prediction-mode header. `segment_id` is
/// the persistent per-macroblock segment id; it's overwritten only when
/// `segment_tree_probs` is `Some` (this frame updates the segment map).
pub fn read_keyframe_header(
    d: &mut BoolDecoder,
    segment_id: &mut u8,
    segment_tree_probs: Option<&[u8; 3]>,
    prob_skip_false: Option<u8>,
) -> MacroblockHeader {
    let mut header = MacroblockHeader::intra_default();

    if let Some(probs) = segment_tree_probs {
        *segment_id = read_segment_id(d, probs);
    }
    header.segment_id = *segment_id;

    header.skip_coeff = match prob_skip_false {
        Some(p) => d.get(p),
        None => false,
    };

    header.y_mode = read_kf_y_mode(d, &KF_Y_MODE_TREE_PROBS);
    if header.y_mode == YMode::BPred {
        for b in header.b_modes.iter_mut() {
            *b = read_b_mode(d, &B_MODE_PROBS);
        }
    }

    header.uv_mode = read_uv_mode(d, &KF_UV_MODE_PROBS);

    header
}

/// The three already-decoded neighbor headers a macroblock's interframe
/// mode decode needs: above, left, and above-left (spec: motion-vector
/// prediction context + SPLITMV sub-block context).
#[derive(Debug, Clone, Copy, Default)]
pub struct InterNeighbors<'a> {
    pub above: Option<&'a MacroblockHeader>,
    pub left: Option<&'a MacroblockHeader>,
    pub above_left: Option<&'a MacroblockHeader>,
}

fn reference_sign_bias(reference: ReferenceFrame, golden_sign_bias: bool, alt_sign_bias: bool) -> bool {
    match reference {
        ReferenceFrame::Golden => golden_sign_bias,
        ReferenceFrame::AltRef => alt_sign_bias,
        ReferenceFrame::Last => false,
    }
}

fn census_entry(
    neighbor: Option<&MacroblockHeader>,
    current_flip: bool,
    golden_sign_bias: bool,
    alt_sign_bias: bool,
) -> Option<(bool, MotionVector, bool)> {
    let mb = neighbor?;
    if !mb.is_inter {
        return None;
    }
    let neighbor_flip = reference_sign_bias(mb.reference, golden_sign_bias, alt_sign_bias);
    let mut mv = mb.mvs[0];
    if neighbor_flip != current_flip {
        mv = MotionVector {
            row: -mv.row,
            col: -mv.col,
        };
    }
    Some((true, mv, mb.mv_mode == MvMode::Split))
}

/// Read an interframe macroblock's prediction-mode and motion-vector
/// header: inter/intra flag, reference-frame selection, then either the
/// intra mode tree (same shapes as keyframes, non-context-dependent
/// B_PRED probabilities) or the motion-vector reference tree plus
/// NEAREST/NEAR/ZERO/NEW/SPLIT motion-vector decoding. Grounded on
/// `decode_prediction_modes` / `InterFrameMacroblockHeader` in
/// `macroblock.cc`.
#[allow(clippy::too_many_arguments)]
pub fn read_interframe_header(
    d: &mut BoolDecoder,
    segment_id: &mut u8,
    segment_tree_probs: Option<&[u8; 3]>,
    prob_skip_false: Option<u8>,
    prob_inter: u8,
    prob_references_last: u8,
    prob_references_golden: u8,
    golden_sign_bias: bool,
    alt_sign_bias: bool,
    entropy: &EntropyTables,
    intra_16x16_prob: Option<&[u8; 4]>,
    intra_chroma_prob: Option<&[u8; 3]>,
    neighbors: InterNeighbors,
    mb_col: usize,
    mb_row: usize,
    mb_cols: usize,
    mb_rows: usize,
) -> MacroblockHeader {
    let mut header = MacroblockHeader::intra_default();

    if let Some(probs) = segment_tree_probs {
        *segment_id = read_segment_id(d, probs);
    }
    header.segment_id = *segment_id;

    header.skip_coeff = match prob_skip_false {
        Some(p) => d.get(p),
        None => false,
    };

    header.is_inter = d.get(prob_inter);

    if !header.is_inter {
        let y_probs = intra_16x16_prob.copied().unwrap_or(entropy.y_mode_probs);
        header.y_mode = read_y_mode(d, &y_probs);
        if header.y_mode == YMode::BPred {
            for b in header.b_modes.iter_mut() {
                *b = read_b_mode(d, &B_MODE_PROBS);
            }
        }
        let uv_probs = intra_chroma_prob.copied().unwrap_or(entropy.uv_mode_probs);
        header.uv_mode = read_uv_mode(d, &uv_probs);
        return header;
    }

    let sel1 = d.get(prob_references_last);
    let sel2 = sel1 && d.get(prob_references_golden);
    header.reference = if !sel1 {
        ReferenceFrame::Last
    } else if !sel2 {
        ReferenceFrame::Golden
    } else {
        ReferenceFrame::AltRef
    };
    let current_flip = reference_sign_bias(header.reference, golden_sign_bias, alt_sign_bias);

    let mut census = Scorer::new();
    census.add(2, census_entry(neighbors.above, current_flip, golden_sign_bias, alt_sign_bias));
    census.add(2, census_entry(neighbors.left, current_flip, golden_sign_bias, alt_sign_bias));
    census.add(1, census_entry(neighbors.above_left, current_flip, golden_sign_bias, alt_sign_bias));
    census.calculate();

    let probs = mv_ref_probs(census.mode_contexts());
    header.mv_mode = read_mv_mode(d, &probs);

    let clamp = |mv: MotionVector| mv.clamp(mb_col, mb_row, mb_cols, mb_rows);

    match header.mv_mode {
        MvMode::Zero => {
            header.mvs = [MotionVector::zero(); 16];
        }
        MvMode::Nearest => {
            header.mvs = [clamp(census.nearest()); 16];
        }
        MvMode::Near => {
            header.mvs = [clamp(census.near()); 16];
        }
        MvMode::New => {
            let delta = MotionVector::read(d, &entropy.mv_probs);
            let best = clamp(census.best());
            let mv = MotionVector {
                row: best.row + delta.row,
                col: best.col + delta.col,
            };
            header.mvs = [mv; 16];
        }
        MvMode::Split => {
            header.mvs = read_split_mvs(d, &entropy, &census, neighbors, mb_col, mb_row, mb_cols, mb_rows);
        }
    }

    header
}

#[allow(clippy::too_many_arguments)]
fn read_split_mvs(
    d: &mut BoolDecoder,
    entropy: &EntropyTables,
    census: &Scorer,
    neighbors: InterNeighbors,
    mb_col: usize,
    mb_row: usize,
    mb_cols: usize,
    mb_rows: usize,
) -> [MotionVector; 16] {
    let partition = read_split_partition(d);
    let scheme = partition as usize;
    let assignment = &MV_PARTITIONS[scheme];
    let count = MV_PARTITION_COUNTS[scheme];

    let edge_mv = |neighbor: Option<&MacroblockHeader>, idx: usize| -> MotionVector {
        match neighbor {
            Some(mb) if mb.is_inter => mb.mvs[idx],
            _ => MotionVector::zero(),
        }
    };

    let mut mvs = [MotionVector::zero(); 16];
    for part_id in 0..count {
        let first_idx = assignment.iter().position(|&p| p as usize == part_id).expect("every partition has a block");
        let row = first_idx / 4;
        let col = first_idx % 4;

        let left_mv = if col == 0 {
            edge_mv(neighbors.left, row * 4 + 3)
        } else {
            mvs[row * 4 + col - 1]
        };
        let above_mv = if row == 0 {
            edge_mv(neighbors.above, 12 + col)
        } else {
            mvs[(row - 1) * 4 + col]
        };

        let left_is_zero = left_mv.is_zero();
        let above_is_zero = above_mv.is_zero();
        let left_eq_above = left_mv == above_mv;
        let ctx_idx = if left_eq_above && left_is_zero {
            4
        } else if left_eq_above {
            3
        } else if above_is_zero {
            2
        } else if left_is_zero {
            1
        } else {
            0
        };

        let sub_mode = read_sub_mv_mode(d, &SUBMV_REF_PROBS2[ctx_idx]);
        let mv = match sub_mode {
            SubMvMode::Left4x4 => left_mv,
            SubMvMode::Above4x4 => above_mv,
            SubMvMode::Zero4x4 => MotionVector::zero(),
            SubMvMode::New4x4 => {
                let delta = MotionVector::read(d, &entropy.mv_probs);
                let best = census.best().clamp(mb_col, mb_row, mb_cols, mb_rows);
                MotionVector {
                    row: best.row + delta.row,
                    col: best.col + delta.col,
                }
            }
        };

        for (idx, &p) in assignment.iter().enumerate() {
            if p as usize == part_id {
                mvs[idx] = mv;
            }
        }
    }
    mvs
}

/// One macroblock's sixteen 4x4 luma residue blocks, the 2x2 chroma
/// blocks, and the optional Y2 second-order block, all dequantized and
/// inverse-transformed but not yet added to the prediction.
pub struct MacroblockResidue {
    pub y: [Block4x4; 16],
    pub u: [Block4x4; 4],
    pub v: [Block4x4; 4],
    pub has_y2: bool,
    pub nonzero: [bool; 25], // 16 Y + 4 U + 4 V + 1 Y2, in that order
}

/// Parse and dequantize one macroblock's residue from a DCT token
/// partition, given left/above nonzero-coefficient context per 4x4 block
/// (spec §4.1 "context" selection for token probabilities).
pub fn read_residue(
    d: &mut BoolDecoder,
    coeff_probs: &alfalfa_core::CoeffProbs,
    dequant: &DequantFactors,
    has_y2: bool,
    left_nonzero: &mut [bool; 9],
    above_nonzero: &mut [bool; 9],
) -> MacroblockResidue {
    let mut residue = MacroblockResidue {
        y: [[0; 16]; 16],
        u: [[0; 16]; 4],
        v: [[0; 16]; 4],
        has_y2,
        nonzero: [false; 25],
    };

    if has_y2 {
        let nz = read_block(
            d,
            coeff_probs,
            PlaneType::Y2,
            dequant.y2_dc,
            dequant.y2_ac,
            0,
            left_nonzero[8],
            above_nonzero[8],
            &mut residue.y[0], // scratch; Y2 coefficients land in a dedicated buffer below
        );
        let mut y2_block = [0i32; 16];
        // re-read into a dedicated block: read_block above already wrote
        // into residue.y[0] as scratch, copy out before Y blocks overwrite it.
        y2_block.copy_from_slice(&residue.y[0]);
        iwht4x4(&mut y2_block);
        residue.nonzero[24] = nz;
        left_nonzero[8] = nz;
        above_nonzero[8] = nz;

        let plane_type = PlaneType::YAfterY2;
        for i in 0..16 {
            let row = i / 4;
            let col = i % 4;
            let nz = read_block(
                d,
                coeff_probs,
                plane_type,
                dequant.y1_dc,
                dequant.y1_ac,
                1,
                left_nonzero[row],
                above_nonzero[col],
                &mut residue.y[i],
            );
            residue.y[i][0] = y2_block[row * 4 + col];
            residue.nonzero[i] = nz;
            left_nonzero[row] = nz;
            above_nonzero[col] = nz;
            idct4x4(&mut residue.y[i]);
        }
    } else {
        for i in 0..16 {
            let row = i / 4;
            let col = i % 4;
            let nz = read_block(
                d,
                coeff_probs,
                PlaneType::YNoY2,
                dequant.y1_dc,
                dequant.y1_ac,
                0,
                left_nonzero[row],
                above_nonzero[col],
                &mut residue.y[i],
            );
            residue.nonzero[i] = nz;
            left_nonzero[row] = nz;
            above_nonzero[col] = nz;
            idct4x4(&mut residue.y[i]);
        }
    }

    for (plane_idx, blocks) in [(0usize, &mut residue.u), (1usize, &mut residue.v)] {
        for i in 0..4 {
            let row = i / 2;
            let col = i % 2;
            let ctx_row = 4 + plane_idx * 2 + row;
            let nz = read_block(
                d,
                coeff_probs,
                PlaneType::Uv,
                dequant.uv_dc,
                dequant.uv_ac,
                0,
                left_nonzero[ctx_row],
                above_nonzero[ctx_row],
                &mut blocks[i],
            );
            residue.nonzero[16 + plane_idx * 4 + i] = nz;
            left_nonzero[ctx_row] = nz;
            above_nonzero[ctx_row] = nz;
            idct4x4(&mut blocks[i]);
        }
    }

    residue
}

#[allow(clippy::too_many_arguments)]
fn read_block(
    d: &mut BoolDecoder,
    coeff_probs: &alfalfa_core::CoeffProbs,
    plane_type: PlaneType,
    dc_quant: i16,
    ac_quant: i16,
    first_coeff: usize,
    left_nz: bool,
    above_nz: bool,
    out: &mut Block4x4,
) -> bool {
    *out = [0; 16];
    let mut context = left_nz as usize + above_nz as usize;
    let mut any_nonzero = false;

    for zz_pos in first_coeff..16 {
        let band = COEFF_BANDS[zz_pos];
        let probs = &coeff_probs[plane_type as usize][band][context];
        match read_coefficient(d, probs) {
            None => break,
            Some(value) => {
                context = match value {
                    0 => 0,
                    1 | -1 => 1,
                    _ => 2,
                };
                if value != 0 {
                    any_nonzero = true;
                    let quant = if zz_pos == 0 { dc_quant } else { ac_quant };
                    out[ZIGZAG[zz_pos]] = value * quant as i32;
                }
            }
        }
    }

    any_nonzero
}

/// Reconstruct a macroblock's luma and chroma planes in place, running
/// intra or inter prediction followed by residue addition (spec §4.1
/// "Copy-out and reference updates" feeds from this).
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_macroblock(
    header: &MacroblockHeader,
    residue: &MacroblockResidue,
    raster: &mut Raster,
    safe_refs: Option<&SafeRaster>,
    mb_col: usize,
    mb_row: usize,
    state: &DecoderState,
) {
    let _ = state;
    let y_ox = mb_col * 16;
    let y_oy = mb_row * 16;
    let uv_ox = mb_col * 8;
    let uv_oy = mb_row * 8;

    if header.is_inter {
        if let Some(safe) = safe_refs {
            reconstruct_inter_luma(raster.y_mut(), safe, y_ox, y_oy, &header.mvs);
            reconstruct_inter_chroma(raster.u_mut(), safe, 1, uv_ox, uv_oy, &header.mvs);
            reconstruct_inter_chroma(raster.v_mut(), safe, 2, uv_ox, uv_oy, &header.mvs);
        }
    } else if header.y_mode == YMode::BPred {
        reconstruct_bpred_luma(raster.y_mut(), y_ox, y_oy, &header.b_modes);
    } else {
        reconstruct_whole_block_intra(raster.y_mut(), y_ox, y_oy, 16, header.y_mode.into());
    }

    if !header.is_inter {
        reconstruct_whole_block_intra(raster.u_mut(), uv_ox, uv_oy, 8, header.uv_mode.into());
        reconstruct_whole_block_intra(raster.v_mut(), uv_ox, uv_oy, 8, header.uv_mode.into());
    }

    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        add_residual_to_plane(raster.y_mut(), y_ox + col * 4, y_oy + row * 4, &residue.y[i]);
    }
    for i in 0..4 {
        let row = i / 2;
        let col = i % 2;
        add_residual_to_plane(raster.u_mut(), uv_ox + col * 4, uv_oy + row * 4, &residue.u[i]);
        add_residual_to_plane(raster.v_mut(), uv_ox + col * 4, uv_oy + row * 4, &residue.v[i]);
    }
}

/// `add_residual` wants a flat `&mut [u8]` with its own stride; copy the
/// 4x4 window out, add in place, then write the result back. `Plane` does
/// not expose a raw mutable sub-slice accessor spanning multiple rows of a
/// larger stride.
fn add_residual_to_plane(plane: &mut Plane, ox: usize, oy: usize, residual: &Block4x4) {
    let mut buf = [0u8; 16];
    for y in 0..4 {
        for x in 0..4 {
            buf[y * 4 + x] = plane.get(ox + x, oy + y);
        }
    }
    add_residual(&mut buf, 4, residual);
    for y in 0..4 {
        for x in 0..4 {
            plane.set(ox + x, oy + y, buf[y * 4 + x]);
        }
    }
}

fn reconstruct_whole_block_intra(plane: &mut Plane, ox: usize, oy: usize, size: usize, mode: PredMode) {
    let above: Vec<u8> = if oy == 0 {
        vec![ROW_127; size]
    } else {
        (0..size).map(|x| plane.get(ox + x, oy - 1)).collect()
    };
    let left: Vec<u8> = if ox == 0 {
        vec![COL_129; size]
    } else {
        (0..size).map(|y| plane.get(ox - 1, oy + y)).collect()
    };
    let corner = if oy == 0 {
        ROW_127
    } else if ox == 0 {
        COL_129
    } else {
        plane.get(ox - 1, oy - 1)
    };
    predict_block(plane, ox, oy, size, mode, &above, &left, corner);
}

fn reconstruct_bpred_luma(plane: &mut Plane, ox: usize, oy: usize, modes: &[BMode; 16]) {
    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        let bx = ox + col * 4;
        let by = oy + row * 4;

        let mut above = [ROW_127; 8];
        if by > 0 {
            for x in 0..8 {
                above[x] = plane.get((bx + x).min(plane.width() - 1), by - 1);
            }
        }
        let mut left = [COL_129; 4];
        if bx > 0 {
            for y in 0..4 {
                left[y] = plane.get(bx - 1, by + y);
            }
        }
        let corner = if by == 0 {
            ROW_127
        } else if bx == 0 {
            COL_129
        } else {
            plane.get(bx - 1, by - 1)
        };

        predict_b_mode(plane, bx, by, modes[i], &above, &left, corner);
    }
}

/// Predict one macroblock's luma plane from a reference raster. Non-split
/// motion carries the same vector in every `mvs` slot, so a single 16x16
/// sixtap call covers it; SPLITMV predicts each 4x4 sub-block separately.
fn reconstruct_inter_luma(plane: &mut Plane, safe: &SafeRaster, ox: usize, oy: usize, mvs: &[MotionVector; 16]) {
    if mvs.iter().all(|&mv| mv == mvs[0]) {
        predict_inter_block(plane, safe, 0, ox, oy, 16, 16, mvs[0]);
        return;
    }
    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        predict_inter_block(plane, safe, 0, ox + col * 4, oy + row * 4, 4, 4, mvs[i]);
    }
}

/// Predict one macroblock's chroma plane. Chroma motion vectors are
/// derived from the four covering luma sub-block vectors via
/// `MotionVector::luma_to_chroma`, not from simply halving a single luma
/// vector (this also yields the right answer in the uniform, non-split
/// case, since all four inputs are then equal).
fn reconstruct_inter_chroma(plane: &mut Plane, safe: &SafeRaster, plane_index: usize, ox: usize, oy: usize, mvs: &[MotionVector; 16]) {
    for cb in 0..4 {
        let cb_row = cb / 2;
        let cb_col = cb % 2;
        let base = cb_row * 2 * 4 + cb_col * 2;
        let luma_mvs = [mvs[base], mvs[base + 1], mvs[base + 4], mvs[base + 5]];
        let chroma_mv = MotionVector::luma_to_chroma(luma_mvs);
        predict_inter_block(plane, safe, plane_index, ox + cb_col * 4, oy + cb_row * 4, 4, 4, chroma_mv);
    }
}

#[allow(clippy::too_many_arguments)]
fn predict_inter_block(plane: &mut Plane, safe: &SafeRaster, plane_index: usize, ox: usize, oy: usize, w: usize, h: usize, mv: MotionVector) {
    let src_x = ox as i32 + (mv.col as i32 >> 3);
    let src_y = oy as i32 + (mv.row as i32 >> 3);
    let phase_x = (mv.col as i32 & 7) as usize;
    let phase_y = (mv.row as i32 & 7) as usize;
    let mut dst = vec![0u8; w * h];
    sixtap_predict(safe, plane_index, src_x, src_y, phase_x, phase_y, &mut dst, w, h);
    for y in 0..h {
        for x in 0..w {
            plane.set(ox + x, oy + y, dst[y * w + x]);
        }
    }
}
