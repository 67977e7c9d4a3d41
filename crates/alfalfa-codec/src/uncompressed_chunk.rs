//! Uncompressed-chunk split: the first bytes of every compressed VP8 frame
//! (spec §4.1 "Uncompressed-chunk split").
//!
//! Grounded on `examples/original_source/src/decoder/uncompressed_chunk.hh`.

use crate::error::{Error, Result};

/// The normative VP8 loop-filter type. `Simple` is recognized but rejected
/// as unsupported (spec §4.1 "Loop filter").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopFilterType {
    Normal,
    Simple,
    NoFilter,
}

/// How badly a frame's bytes have been damaged, escalating from clean to
/// unusable (spec §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptionLevel {
    None,
    CorruptedResidues,
    CorruptedFirstPartition,
    CorruptedFrame,
}

/// The header-split view of one compressed frame: the first partition
/// (header + macroblock mode data) and the DCT token partitions.
pub struct UncompressedChunk<'a> {
    pub key_frame: bool,
    pub version: u8,
    pub show_frame: bool,
    pub loop_filter_type: LoopFilterType,
    pub experimental: bool,
    pub width: u16,
    pub height: u16,
    first_partition: &'a [u8],
    rest: &'a [u8],
    pub corruption_level: CorruptionLevel,
}

/// VP8 keyframe start code, spec §4.1.
const START_CODE: [u8; 3] = [0x9D, 0x01, 0x2A];

impl<'a> UncompressedChunk<'a> {
    pub fn parse(
        frame: &'a [u8],
        expected_width: u16,
        expected_height: u16,
        accept_partial: bool,
    ) -> Result<Self> {
        if frame.len() < 3 {
            return Self::truncated_or_err(frame.len(), 3, accept_partial);
        }

        let tag = (frame[0] as u32) | ((frame[1] as u32) << 8) | ((frame[2] as u32) << 16);
        let key_frame = (tag & 1) == 0;
        let version = ((tag >> 1) & 0x7) as u8;
        let show_frame = ((tag >> 4) & 1) == 1;
        let first_partition_length = (tag >> 5) as usize;

        let loop_filter_type = match version {
            0 => LoopFilterType::Normal,
            4 | 6 => LoopFilterType::Simple,
            other => {
                return Err(Error::Unsupported(format!(
                    "VP8 version {other} is not recognized"
                )))
            }
        };
        // Version 0 uses the normal 6/4-tap filter and the regular
        // reconstruction path; versions 4 and 6 select the simple filter
        // and reduced-precision motion compensation respectively, per the
        // VP8 bitstream spec's version table. Only the normal filter is
        // implemented end-to-end here (spec §4.1); Simple is recognized so
        // the error is a clear `Unsupported`, not a parse failure.
        if loop_filter_type == LoopFilterType::Simple {
            return Err(Error::Unsupported(
                "VP8 simple loop filter is not supported".to_string(),
            ));
        }

        let mut offset = 3usize;
        let (width, height) = if key_frame {
            if frame.len() < offset + 7 {
                return Self::truncated_or_err(frame.len(), offset + 7, accept_partial);
            }
            if frame[offset..offset + 3] != START_CODE {
                return Err(Error::Invalid {
                    offset,
                    message: "bad VP8 keyframe start code".to_string(),
                });
            }
            offset += 3;
            let w_field = (frame[offset] as u16) | ((frame[offset + 1] as u16) << 8);
            let h_field = (frame[offset + 2] as u16) | ((frame[offset + 3] as u16) << 8);
            offset += 4;
            let width = w_field & 0x3FFF;
            let height = h_field & 0x3FFF;
            if expected_width != 0 && (width != expected_width || height != expected_height) {
                return Err(Error::Invalid {
                    offset,
                    message: "keyframe dimensions do not match declared width/height".to_string(),
                });
            }
            (width, height)
        } else {
            (expected_width, expected_height)
        };

        if frame.len() < offset + first_partition_length {
            return Self::truncated_or_err(
                frame.len(),
                offset + first_partition_length,
                accept_partial,
            );
        }

        let first_partition = &frame[offset..offset + first_partition_length];
        let rest = &frame[offset + first_partition_length..];

        Ok(Self {
            key_frame,
            version,
            show_frame,
            loop_filter_type,
            experimental: false,
            width,
            height,
            first_partition,
            rest,
            corruption_level: CorruptionLevel::None,
        })
    }

    fn truncated_or_err(available: usize, needed: usize, accept_partial: bool) -> Result<Self> {
        if accept_partial {
            Ok(Self {
                key_frame: false,
                version: 0,
                show_frame: true,
                loop_filter_type: LoopFilterType::NoFilter,
                experimental: false,
                width: 0,
                height: 0,
                first_partition: &[],
                rest: &[],
                corruption_level: CorruptionLevel::CorruptedFrame,
            })
        } else {
            Err(Error::Truncated { needed, available })
        }
    }

    pub fn first_partition(&self) -> &'a [u8] {
        self.first_partition
    }

    /// Split the remainder into `num` DCT token partitions, each prefixed
    /// by a 3-byte little-endian length except the last, which runs to the
    /// end of the chunk.
    pub fn dct_partitions(&self, num: u8) -> Result<Vec<&'a [u8]>> {
        let mut out = Vec::with_capacity(num as usize);
        let mut rest = self.rest;
        for i in 0..num {
            if i + 1 == num {
                out.push(rest);
                break;
            }
            if rest.len() < 3 {
                return Err(Error::Truncated {
                    needed: 3,
                    available: rest.len(),
                });
            }
            let len = (rest[0] as usize) | ((rest[1] as usize) << 8) | ((rest[2] as usize) << 16);
            rest = &rest[3..];
            if rest.len() < len {
                return Err(Error::Truncated {
                    needed: len,
                    available: rest.len(),
                });
            }
            out.push(&rest[..len]);
            rest = &rest[len..];
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyframe_bytes(first_partition_len: usize, w: u16, h: u16) -> Vec<u8> {
        let tag: u32 = (0) | (0 << 1) | (1 << 4) | ((first_partition_len as u32) << 5);
        let mut v = tag.to_le_bytes()[0..3].to_vec();
        v.extend_from_slice(&START_CODE);
        v.extend_from_slice(&w.to_le_bytes());
        v.extend_from_slice(&h.to_le_bytes());
        v.extend(std::iter::repeat(0u8).take(first_partition_len));
        v
    }

    #[test]
    fn parses_keyframe_header_fields() {
        let bytes = keyframe_bytes(10, 16, 16);
        let chunk = UncompressedChunk::parse(&bytes, 16, 16, false).unwrap();
        assert!(chunk.key_frame);
        assert_eq!(chunk.width, 16);
        assert_eq!(chunk.height, 16);
        assert_eq!(chunk.first_partition().len(), 10);
    }

    #[test]
    fn rejects_bad_start_code() {
        let mut bytes = keyframe_bytes(4, 16, 16);
        bytes[3] = 0xFF;
        assert!(UncompressedChunk::parse(&bytes, 16, 16, false).is_err());
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let bytes = keyframe_bytes(4, 16, 16);
        assert!(UncompressedChunk::parse(&bytes, 32, 32, false).is_err());
    }

    #[test]
    fn rejects_unrecognized_version() {
        let mut bytes = keyframe_bytes(4, 16, 16);
        bytes[0] = (bytes[0] & !0x0E) | (7 << 1);
        assert!(matches!(
            UncompressedChunk::parse(&bytes, 16, 16, false),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn truncated_frame_errors_when_not_accepting_partial() {
        let bytes = vec![0u8; 2];
        assert!(matches!(
            UncompressedChunk::parse(&bytes, 16, 16, false),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn dct_partitions_split_on_length_prefixes() {
        let bytes = keyframe_bytes(4, 16, 16);
        let chunk = UncompressedChunk::parse(&bytes, 16, 16, false).unwrap();
        let partitions = chunk.dct_partitions(1).unwrap();
        assert_eq!(partitions.len(), 1);
    }
}
