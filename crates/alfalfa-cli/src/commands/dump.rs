//! `xc-dump` — decode a prefix of an IVF file and write out the
//! resulting decoder state (spec §6).
//!
//! `-S` resumes from a previously dumped state; since this tool has no
//! raster/reference store behind it (that's the catalog's job, C4), a
//! resumed decoder starts with blank references, so `-S` is only exact
//! for streams whose prefix doesn't depend on prior reference pixels
//! (e.g. dumping right after a keyframe).

use std::path::PathBuf;

use anyhow::{Context, Result};

use alfalfa_core::{DecoderState, References};
use alfalfa_codec::Decoder;
use alfalfa_formats::IvfReader;

pub fn run(input: PathBuf, frame_limit: Option<usize>, input_state: Option<PathBuf>, output_state: PathBuf) -> Result<()> {
    let input_bytes = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let mut reader = IvfReader::new(input_bytes.as_slice()).with_context(|| format!("parsing {}", input.display()))?;
    let header = reader.header;

    let mut decoder = match input_state {
        Some(path) => {
            let json = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            let state: DecoderState = serde_json::from_slice(&json)?;
            let refs = References::blank(header.width as u32, header.height as u32);
            Decoder::restore(state, refs)
        }
        None => Decoder::new(header.width as u32, header.height as u32),
    };

    let limit = frame_limit.unwrap_or(usize::MAX);
    let mut decoded = 0usize;
    while decoded < limit {
        let Some((_, data)) = reader.read_frame()? else {
            break;
        };
        decoder.decompress(&data, false)?;
        decoded += 1;
    }

    let json = serde_json::to_vec_pretty(decoder.state())?;
    std::fs::write(&output_state, json).with_context(|| format!("writing {}", output_state.display()))?;

    println!("decoded {decoded} frames from {}, wrote state to {}", input.display(), output_state.display());
    Ok(())
}
