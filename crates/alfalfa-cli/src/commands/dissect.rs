//! `xc-dissect` — print per-frame diagnostics for an IVF file: header
//! fields, partition layout, macroblock mode histograms, and nonzero
//! coefficient counts (spec §6).
//!
//! Walks each frame's first partition directly rather than going
//! through the full reconstruction pipeline, since diagnostics don't
//! need reconstructed pixels.

use std::path::PathBuf;

use anyhow::{Context, Result};

use alfalfa_codec::{
    bool_decoder::BoolDecoder,
    frame_header::FrameHeader,
    macroblock::{read_keyframe_header, read_residue},
    quantization::DequantFactors,
    uncompressed_chunk::UncompressedChunk,
};
use alfalfa_core::state::EntropyTables;
use alfalfa_formats::IvfReader;

pub fn run(input: PathBuf, frame_limit: Option<usize>, show_modes: bool, show_partitions: bool, show_coeffs: bool) -> Result<()> {
    let input_bytes = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let mut reader = IvfReader::new(input_bytes.as_slice()).with_context(|| format!("parsing {}", input.display()))?;
    let header = reader.header;
    println!("{}: {}x{}, {} frames declared", input.display(), header.width, header.height, header.frame_count);

    let entropy = EntropyTables::defaults();
    let mb_cols = (header.width as usize).div_ceil(16);
    let mb_rows = (header.height as usize).div_ceil(16);

    let limit = frame_limit.unwrap_or(usize::MAX);
    let mut index = 0usize;
    while index < limit {
        let Some((pts, data)) = reader.read_frame()? else {
            break;
        };

        let chunk = UncompressedChunk::parse(&data, header.width, header.height, false)?;
        let mut first_partition_decoder = BoolDecoder::new(chunk.first_partition());
        let frame_header = FrameHeader::parse(&mut first_partition_decoder, chunk.key_frame)?;

        println!(
            "frame {index} (pts {pts}): key={} show={} partitions={} filter_level={}",
            chunk.key_frame,
            chunk.show_frame,
            frame_header.partition_count(),
            frame_header.filter_level(),
        );

        if show_partitions {
            let partitions = chunk.dct_partitions(frame_header.partition_count())?;
            for (i, partition) in partitions.iter().enumerate() {
                println!("  partition {i}: {} bytes", partition.len());
            }
        }

        if show_modes || show_coeffs {
            let quant = frame_header.quant();
            let dequant = DequantFactors::new(quant.y_ac_qi, quant.y_dc_delta, quant.y2_dc_delta, quant.y2_ac_delta, quant.uv_dc_delta, quant.uv_ac_delta);
            let partitions = chunk.dct_partitions(frame_header.partition_count())?;

            let mut y_mode_histogram = std::collections::HashMap::new();
            let mut uv_mode_histogram = std::collections::HashMap::new();
            let mut nonzero_blocks = 0u64;
            let mut total_blocks = 0u64;

            for mb_row in 0..mb_rows {
                let partition = &partitions[mb_row % partitions.len()];
                let mut mb_decoder = BoolDecoder::new(partition);
                let mut left_nz = [false; 9];
                let mut above_nz = [false; 9];

                for _mb_col in 0..mb_cols {
                    let mut segment_id = 0u8;
                    let segment_tree_probs = frame_header.segmentation().and_then(|s| s.tree_probs.as_ref());
                    let mb_header = read_keyframe_header(&mut first_partition_decoder, &mut segment_id, segment_tree_probs, frame_header.prob_skip_false());
                    *y_mode_histogram.entry(format!("{:?}", mb_header.y_mode)).or_insert(0u64) += 1;
                    *uv_mode_histogram.entry(format!("{:?}", mb_header.uv_mode)).or_insert(0u64) += 1;

                    if show_coeffs && !mb_header.skip_coeff {
                        let has_y2 = mb_header.y_mode != alfalfa_codec::modes::YMode::BPred;
                        let residue = read_residue(&mut mb_decoder, &entropy.coeff_probs, &dequant, has_y2, &mut left_nz, &mut above_nz);
                        for nz in residue.nonzero {
                            total_blocks += 1;
                            if nz {
                                nonzero_blocks += 1;
                            }
                        }
                    }
                }
            }

            if show_modes {
                println!("  y modes: {y_mode_histogram:?}");
                println!("  uv modes: {uv_mode_histogram:?}");
            }
            if show_coeffs {
                println!("  nonzero blocks: {nonzero_blocks}/{total_blocks}");
            }
        }

        index += 1;
    }

    Ok(())
}
