//! `xc-enc` — out of scope. Rate control, motion search, and quantizer
//! selection belong to the encoder collaborator this workspace does not
//! implement (spec §1 Non-goals). This stub exists so `--help` documents
//! the full tool surface the rest of the CLI assumes.

use std::path::PathBuf;

use anyhow::Result;

pub struct EncArgs {
    pub output: Option<PathBuf>,
    pub input_format: String,
    pub y_ac_qi: Option<u32>,
    pub ssim: Option<f64>,
    pub frame_sizes: Option<PathBuf>,
    pub reencode: bool,
    pub input_state: Option<PathBuf>,
    pub output_state: Option<PathBuf>,
}

pub fn run(_args: EncArgs) -> Result<()> {
    anyhow::bail!(
        "xc-enc is not implemented by this tool: encoding (rate control, motion search, \
         quantizer selection) is handled by a separate encoder collaborator"
    )
}
