//! Bit manipulation utilities.
//!
//! This module provides comprehensive bit-level operations including:
//! - Basic bit operations (popcount, bit rotation, reversal)
//! - Bit masks and bit fields
//! - Gray code conversions
//! - Endianness conversions
//! - Bit buffers for storage
//! - Bit casting and advanced utilities
//!
//! # Examples
//!
//! ```rust
//! use abseil::{popcount, count_trailing_zeros, next_power_of_two};
//!
//! let n: u32 = 0b1010_0100;
//! assert_eq!(popcount(n), 3);
//! assert_eq!(count_trailing_zeros(n), 2);
//! assert_eq!(next_power_of_two(100u32), 128);
//! ```

// Core bit operations module (existing)
mod bits;

// New organized submodules
mod bitmask;
mod bit_ops;
mod bit_buffer;
mod endianness;
mod gray_code;
mod bit_cast;

// Re-export core operations
pub use bits::{
    bit_width, count_leading_zeros, count_trailing_zeros, highest_bit, is_power_of_two,
    lowest_bit, next_power_of_two, popcount, prev_power_of_two, reverse_bits, reverse_bytes,
    rotate_left, rotate_right,
};

// Re-export bitmask types
pub use bitmask::{BitField, BitMask, BitPosition};

// Re-export operation traits
pub use bit_ops::{BitOps, ByteOps, WordOps};

// Re-export buffer type
pub use bit_buffer::BitBuffer;

// Re-export endianness utilities
pub use endianness::{from_be, from_le, swap_u16, swap_u32, swap_u64, to_be, to_le, Endianness};

// Re-export gray code utilities
pub use gray_code::{
    binary_to_gray, binary_to_gray16, binary_to_gray32, clear_lowest_set_bit,
    deinterleave_bits, find_first_set, find_last_set, gray_to_binary,
    gray_to_binary16, gray_to_binary32, hamming_distance, hamming_distance16,
    hamming_distance32, hamming_distance64, highest_set_bit_value, interleave_bits,
    lowest_set_bit_value, parity_bit, parity_bit16, parity_bit32, round_up_power_of_two,
    set_lowest_clear_bit,
};

// Re-export bit casting utilities
pub use bit_cast::{bit_cast, BitHacks, BitMatrix, BitPermutation};

// Module alias for convenience
pub use self::bits as bit_ops_internal;
