//! `xc-diff` — compare two saved decoder states; exits nonzero if they
//! differ (spec §6).

use std::path::PathBuf;

use anyhow::{Context, Result};

use alfalfa_core::DecoderState;

pub fn run(state1: PathBuf, state2: PathBuf) -> Result<()> {
    let a: DecoderState = serde_json::from_slice(&std::fs::read(&state1).with_context(|| format!("reading {}", state1.display()))?)?;
    let b: DecoderState = serde_json::from_slice(&std::fs::read(&state2).with_context(|| format!("reading {}", state2.display()))?)?;

    if a == b {
        println!("{} and {} are identical", state1.display(), state2.display());
        Ok(())
    } else {
        println!("{} and {} differ", state1.display(), state2.display());
        if a.width != b.width || a.height != b.height {
            println!("  dimensions: {}x{} vs {}x{}", a.width, a.height, b.width, b.height);
        }
        if a.content_hash() != b.content_hash() {
            println!("  content hash: {:#x} vs {:#x}", a.content_hash(), b.content_hash());
        }
        anyhow::bail!("states differ")
    }
}
