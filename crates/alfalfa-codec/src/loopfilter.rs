//! In-loop deblocking filter (spec §4.1 "Loop filter").
//!
//! Grounded on `examples/original_source/src/decoder/loopfilter.cc`: VP8's
//! normal filter runs four passes per macroblock (left MB edge, internal
//! vertical subblock edges, top MB edge, internal horizontal subblock
//! edges), each either a 6-tap "MB edge" filter or a narrower 4-tap
//! "subblock edge" filter depending on position, gated by a per-macroblock
//! filter level and limit derived from segmentation and mode/reference
//! deltas.

use alfalfa_core::{Plane, ReferenceFrame};

use crate::uncompressed_chunk::LoopFilterType;

/// Per-macroblock filter parameters, already resolved from the frame's
/// base level plus segmentation and mode/reference deltas.
#[derive(Debug, Clone, Copy)]
pub struct FilterParams {
    pub level: u8,
    pub sharpness: u8,
    pub filter_type: LoopFilterType,
}

/// Resolve a macroblock's effective filter level from the frame base
/// level, optional per-segment override, and optional per-reference/
/// per-mode deltas (spec §4.1).
pub fn resolve_filter_level(
    base_level: i32,
    segment_delta: Option<i32>,
    segment_absolute: bool,
    ref_delta: Option<i32>,
    mode_delta: Option<i32>,
) -> u8 {
    let mut level = match segment_delta {
        Some(d) if segment_absolute => d,
        Some(d) => base_level + d,
        None => base_level,
    };
    level += ref_delta.unwrap_or(0);
    level += mode_delta.unwrap_or(0);
    level.clamp(0, 63) as u8
}

fn clamp_s8(v: i32) -> i32 {
    v.clamp(-128, 127)
}

fn common_adjust(use_outer_taps: bool, p: &mut [i32; 4]) -> i32 {
    // p indices: [p1, p0, q0, q1]
    let mut a = clamp_s8(if use_outer_taps { clamp_s8(p[0] - p[3]) } else { 0 } + 3 * (p[2] - p[1]));
    let f1 = clamp_s8(a + 4) >> 3;
    let f2 = clamp_s8(a + 3) >> 3;
    p[2] = clamp_s8(p[2] - f1);
    p[1] = clamp_s8(p[1] + f2);
    a = f1;
    a
}

/// The normal 4-tap subblock-edge filter over one line of 8 pixels
/// straddling the edge at `edge`. `get`/`set` address along the filter
/// direction (horizontal for a vertical edge, vertical for a horizontal
/// edge).
pub fn filter_subblock_edge(
    line: &mut [i32; 8],
    limit: i32,
    interior_limit: i32,
    hev_threshold: i32,
) {
    let p1 = line[2];
    let p0 = line[3];
    let q0 = line[4];
    let q1 = line[5];

    if !filter_mask(line, limit, interior_limit) {
        return;
    }
    let hev = (p1 - p0).abs() > hev_threshold || (q1 - q0).abs() > hev_threshold;

    let mut quad = [p1, p0, q0, q1];
    common_adjust(hev, &mut quad);
    line[3] = quad[1].clamp(0, 255);
    line[4] = quad[2].clamp(0, 255);

    if !hev {
        let f = (common_adjust(false, &mut [p1, quad[1], quad[2], q1]) + 1) >> 1;
        line[2] = (p1 - f).clamp(0, 255);
        line[5] = (q1 + f).clamp(0, 255);
    }
}

/// The normal 6-tap macroblock-edge filter, wider than the subblock
/// variant and only applied on MB boundaries when not high-edge-variance.
pub fn filter_mb_edge(line: &mut [i32; 8], limit: i32, interior_limit: i32, hev_threshold: i32) {
    let p2 = line[1];
    let p1 = line[2];
    let p0 = line[3];
    let q0 = line[4];
    let q1 = line[5];
    let q2 = line[6];

    if !filter_mask(line, limit, interior_limit) {
        return;
    }
    let hev = (p1 - p0).abs() > hev_threshold || (q1 - q0).abs() > hev_threshold;

    if hev {
        let mut quad = [p1, p0, q0, q1];
        common_adjust(true, &mut quad);
        line[3] = quad[1].clamp(0, 255);
        line[4] = quad[2].clamp(0, 255);
        return;
    }

    let w = clamp_s8(clamp_s8(p1 - q1) + 3 * (q0 - p0));
    let a = (27 * w + 63) >> 7;
    line[4] = (q0 - a).clamp(0, 255);
    line[3] = (p0 + a).clamp(0, 255);

    let a = (18 * w + 63) >> 7;
    line[5] = (q1 - a).clamp(0, 255);
    line[2] = (p1 + a).clamp(0, 255);

    let a = (9 * w + 63) >> 7;
    line[6] = (q2 - a).clamp(0, 255);
    line[1] = (p2 + a).clamp(0, 255);
}

fn filter_mask(line: &[i32; 8], limit: i32, interior_limit: i32) -> bool {
    let [p3, p2, p1, p0, q0, q1, q2, q3] = *line;
    (p3 - p2).abs() <= interior_limit
        && (p2 - p1).abs() <= interior_limit
        && (p1 - p0).abs() <= interior_limit
        && (q1 - q0).abs() <= interior_limit
        && (q2 - q1).abs() <= interior_limit
        && (q3 - q2).abs() <= interior_limit
        && (p0 - q0).abs() * 2 + (p1 - q1).abs() / 2 <= limit
}

/// Apply the normal filter to every macroblock/subblock edge of one plane,
/// given a per-macroblock grid of resolved filter params and a mask of
/// which macroblocks have no residue to skip subblock edges for (spec
/// §4.1: "Skip subblock edges when a Y2-present MB has no nonzero
/// residue").
pub fn filter_plane(
    plane: &mut Plane,
    mb_size: usize,
    mb_cols: usize,
    mb_rows: usize,
    params: &[FilterParams],
    skip_subblock_edges: &[bool],
) {
    for mb_row in 0..mb_rows {
        for mb_col in 0..mb_cols {
            let idx = mb_row * mb_cols + mb_col;
            let p = params[idx];
            if p.level == 0 || p.filter_type == LoopFilterType::NoFilter {
                continue;
            }
            let interior_limit = interior_limit_for(p.level, p.sharpness);
            let mb_limit = (p.level as i32) * 2 + interior_limit;
            let sub_limit = (p.level as i32) + interior_limit;
            let hev_threshold = hev_threshold_for(p.level);
            let ox = mb_col * mb_size;
            let oy = mb_row * mb_size;

            if mb_col > 0 {
                filter_vertical_edge(plane, ox, oy, mb_size, mb_limit, interior_limit, hev_threshold, true);
            }
            if !skip_subblock_edges[idx] {
                for step in (4..mb_size).step_by(4) {
                    filter_vertical_edge(
                        plane,
                        ox + step,
                        oy,
                        mb_size,
                        sub_limit,
                        interior_limit,
                        hev_threshold,
                        false,
                    );
                }
            }
            if mb_row > 0 {
                filter_horizontal_edge(plane, ox, oy, mb_size, mb_limit, interior_limit, hev_threshold, true);
            }
            if !skip_subblock_edges[idx] {
                for step in (4..mb_size).step_by(4) {
                    filter_horizontal_edge(
                        plane,
                        ox,
                        oy + step,
                        mb_size,
                        sub_limit,
                        interior_limit,
                        hev_threshold,
                        false,
                    );
                }
            }
        }
    }
}

fn interior_limit_for(level: u8, sharpness: u8) -> i32 {
    let mut limit = level as i32;
    if sharpness > 0 {
        limit >>= if sharpness > 4 { 2 } else { 1 };
        let cap = 9 - sharpness as i32;
        if limit > cap {
            limit = cap;
        }
    }
    limit.max(1)
}

fn hev_threshold_for(level: u8) -> i32 {
    match level {
        0..=15 => 0,
        16..=40 => 1,
        _ => 2,
    }
}

#[allow(clippy::too_many_arguments)]
fn filter_vertical_edge(
    plane: &mut Plane,
    ox: usize,
    oy: usize,
    len: usize,
    limit: i32,
    interior_limit: i32,
    hev_threshold: i32,
    is_mb_edge: bool,
) {
    for row in 0..len {
        let y = oy + row;
        let mut line = [0i32; 8];
        for i in 0..8 {
            let x = ox as i64 - 4 + i as i64;
            line[i] = if x < 0 || x as usize >= plane.width() {
                plane.get(ox.min(plane.width() - 1), y) as i32
            } else {
                plane.get(x as usize, y) as i32
            };
        }
        if is_mb_edge {
            filter_mb_edge(&mut line, limit, interior_limit, hev_threshold);
        } else {
            filter_subblock_edge(&mut line, limit, interior_limit, hev_threshold);
        }
        for i in 1..7 {
            let x = ox as i64 - 4 + i as i64;
            if x >= 0 && (x as usize) < plane.width() {
                plane.set(x as usize, y, line[i] as u8);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn filter_horizontal_edge(
    plane: &mut Plane,
    ox: usize,
    oy: usize,
    len: usize,
    limit: i32,
    interior_limit: i32,
    hev_threshold: i32,
    is_mb_edge: bool,
) {
    for col in 0..len {
        let x = ox + col;
        let mut line = [0i32; 8];
        for i in 0..8 {
            let y = oy as i64 - 4 + i as i64;
            line[i] = if y < 0 || y as usize >= plane.height() {
                plane.get(x, oy.min(plane.height() - 1)) as i32
            } else {
                plane.get(x, y as usize) as i32
            };
        }
        if is_mb_edge {
            filter_mb_edge(&mut line, limit, interior_limit, hev_threshold);
        } else {
            filter_subblock_edge(&mut line, limit, interior_limit, hev_threshold);
        }
        for i in 1..7 {
            let y = oy as i64 - 4 + i as i64;
            if y >= 0 && (y as usize) < plane.height() {
                plane.set(x, y as usize, line[i] as u8);
            }
        }
    }
}

/// Which reference frame informs a mode-delta lookup; kept alongside the
/// filter module since both are resolved from the same per-macroblock
/// mode/reference state (spec §4.1).
pub fn reference_delta_index(reference: ReferenceFrame) -> usize {
    match reference {
        ReferenceFrame::Last => 1,
        ReferenceFrame::Golden => 2,
        ReferenceFrame::AltRef => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_level_disables_filtering() {
        assert_eq!(resolve_filter_level(0, None, false, None, None), 0);
    }

    #[test]
    fn absolute_segment_delta_overrides_base() {
        assert_eq!(resolve_filter_level(40, Some(10), true, None, None), 10);
    }

    #[test]
    fn relative_segment_delta_adds_to_base() {
        assert_eq!(resolve_filter_level(40, Some(-5), false, None, None), 35);
    }

    #[test]
    fn flat_region_is_untouched_by_filter_mask() {
        let line = [128i32; 8];
        assert!(filter_mask(&line, 10, 10));
    }

    #[test]
    fn sharp_edge_exceeding_limit_is_masked_out() {
        let line = [0, 0, 0, 0, 255, 255, 255, 255];
        assert!(!filter_mask(&line, 4, 4));
    }
}
