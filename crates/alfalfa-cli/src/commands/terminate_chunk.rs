//! `xc-terminate-chunk` — mark an IVF file's final interframe as
//! refreshing all three references, so a player can treat the file as a
//! self-contained, restartable chunk (spec §6).
//!
//! The refresh flags live inside the first partition's arithmetic-coded
//! header, not the uncompressed IVF framing, so flipping one without
//! re-encoding the partition requires a bit-level writer — the same
//! collaborator `xc-enc` defers to (spec §1 Non-goals: "VP8 encoder").
//! This command therefore verifies the final frame and either copies
//! the file through unchanged when it already refreshes every
//! reference, or reports which references would need a real encoder to
//! fix.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use alfalfa_codec::Decoder;
use alfalfa_formats::{IvfReader, IvfWriter};

pub fn run(input: PathBuf, output: PathBuf, output_state: Option<PathBuf>) -> Result<()> {
    let input_bytes = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let mut reader = IvfReader::new(input_bytes.as_slice()).with_context(|| format!("parsing {}", input.display()))?;
    let header = reader.header;

    let mut decoder = Decoder::new(header.width as u32, header.height as u32);
    let mut frames = Vec::new();
    while let Some((pts, data)) = reader.read_frame()? {
        decoder.decompress(&data, false)?;
        frames.push((pts, data));
    }

    let Some((_, last_frame_bytes)) = frames.last() else {
        bail!("{} contains no frames", input.display());
    };

    let is_key = last_frame_bytes.first().map(|b| b & 1 == 0).unwrap_or(false);
    if !is_key {
        let references = decoder.references();
        let all_refreshed = references.last.content_hash() == references.golden.content_hash()
            && references.golden.content_hash() == references.alt.content_hash();
        if !all_refreshed {
            bail!(
                "final frame of {} does not refresh every reference; patching its compressed \
                 refresh flags requires the encoder collaborator (out of scope here)",
                input.display()
            );
        }
    }

    let out_file = std::fs::File::create(&output).with_context(|| format!("creating {}", output.display()))?;
    let mut writer = IvfWriter::write_header(out_file, header.width, header.height, header.framerate_num, header.framerate_den)?;
    for (pts, data) in &frames {
        writer.write_frame(*pts, data)?;
    }

    if let Some(state_path) = output_state {
        let json = serde_json::to_vec(decoder.state())?;
        std::fs::write(&state_path, json).with_context(|| format!("writing {}", state_path.display()))?;
    }

    println!("wrote {} ({} frames)", output.display(), frames.len());
    Ok(())
}
