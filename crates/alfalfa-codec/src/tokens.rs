//! DCT coefficient token tree and zigzag scan order (spec §4.1
//! "Multi-partition DCT token streams").
//!
//! Grounded on `examples/original_source/src/decoder/tokens.cc` and
//! `tree.cc`.

use crate::bool_decoder::{BoolDecoder, TreeNode};

/// The eleven DCT coefficient tokens. `Eob` terminates a block; `Cat1`..
/// `Cat6` carry extra magnitude bits on top of a base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DctToken {
    Eob,
    Zero,
    One,
    Two,
    Three,
    Four,
    Cat1,
    Cat2,
    Cat3,
    Cat4,
    Cat5,
    Cat6,
}

const TOKEN_ORDER: [DctToken; 12] = [
    DctToken::Eob,
    DctToken::Zero,
    DctToken::One,
    DctToken::Two,
    DctToken::Three,
    DctToken::Four,
    DctToken::Cat1,
    DctToken::Cat2,
    DctToken::Cat3,
    DctToken::Cat4,
    DctToken::Cat5,
    DctToken::Cat6,
];

pub const DCT_TOKEN_TREE: [TreeNode; 22] = [
    -(0), // Eob
    2,
    -(1), // Zero
    4,
    -(2), // One
    6,
    8,
    12,
    -(3), // Two
    10,
    -(4), // Three
    -(5), // Four
    14,
    16,
    -(6), // Cat1
    -(7), // Cat2
    18,
    20,
    -(8), // Cat3
    -(9), // Cat4
    -(10), // Cat5
    -(11), // Cat6
];

/// Extra-bit magnitude tables for `Cat1`..`Cat6`: each category adds a base
/// value plus `n` extra bits, each with its own probability (spec §4.1).
pub const CAT_BASE: [i32; 6] = [5, 7, 11, 19, 35, 67];
pub const CAT_PROBS: [&[u8]; 6] = [
    &[159],
    &[165, 145],
    &[173, 148, 140],
    &[176, 155, 140, 135],
    &[180, 157, 141, 134, 130],
    &[254, 254, 243, 230, 196, 177, 153, 140, 133, 130, 129],
];

/// Zigzag scan order mapping coefficient-stream position to row-major
/// 4x4 block index.
pub const ZIGZAG: [usize; 16] = [0, 1, 4, 8, 5, 2, 3, 6, 9, 12, 13, 10, 7, 11, 14, 15];

/// Coefficient band lookup by zigzag position, used to select the token
/// probability context (spec §4.1).
pub const COEFF_BANDS: [usize; 16] = [0, 1, 2, 3, 6, 4, 5, 6, 6, 6, 6, 6, 6, 6, 6, 7];

/// Decode one token given a context-selected probability table and return
/// its signed coefficient magnitude, or `None` at end-of-block.
pub fn read_coefficient(d: &mut BoolDecoder, probs: &[u8; 11]) -> Option<i32> {
    let index = d.tree(&DCT_TOKEN_TREE, probs);
    let token = TOKEN_ORDER[index];
    let magnitude = match token {
        DctToken::Eob => return None,
        DctToken::Zero => 0,
        DctToken::One => 1,
        DctToken::Two => 2,
        DctToken::Three => 3,
        DctToken::Four => 4,
        DctToken::Cat1 | DctToken::Cat2 | DctToken::Cat3 | DctToken::Cat4 | DctToken::Cat5 | DctToken::Cat6 => {
            let cat = match token {
                DctToken::Cat1 => 0,
                DctToken::Cat2 => 1,
                DctToken::Cat3 => 2,
                DctToken::Cat4 => 3,
                DctToken::Cat5 => 4,
                _ => 5,
            };
            let mut extra = 0i32;
            for &p in CAT_PROBS[cat] {
                extra = (extra << 1) | d.get(p) as i32;
            }
            CAT_BASE[cat] + extra
        }
    };
    if magnitude == 0 {
        return Some(0);
    }
    if d.get(128) {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// Which of the four token-probability planes a block belongs to (spec
/// §4.1): Y-with-Y2 blocks skip the DC coefficient and use a distinct
/// context from Y2, plain Y-without-Y2, and chroma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneType {
    YAfterY2 = 0,
    Y2 = 1,
    Uv = 2,
    YNoY2 = 3,
}
