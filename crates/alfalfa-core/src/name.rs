//! Frame name: lossless `source#target` naming of explicit-state frames
//! (spec §3 "Frame name", §4.3).
//!
//! String form: `s_l_g_a#state_output_shown_updL_updG_updA_lg_la_gA_aG`,
//! where `x` encodes an absent optional component.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hash::DecoderHash;

/// `source = (state?, last?, golden?, alt?)`. Absence means "I do not
/// depend on this".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceName {
    pub state: Option<u64>,
    pub last: Option<u64>,
    pub golden: Option<u64>,
    pub alt: Option<u64>,
}

/// `target = (state, output, shown, update_last, update_golden,
/// update_alt, last→golden, last→alt, golden→alt, alt→golden)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetName {
    pub state: u64,
    pub output: u64,
    pub shown: bool,
    pub update_last: bool,
    pub update_golden: bool,
    pub update_alt: bool,
    pub copy_last_to_golden: bool,
    pub copy_last_to_alt: bool,
    pub copy_golden_to_alt: bool,
    pub copy_alt_to_golden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameName {
    pub source: SourceName,
    pub target: TargetName,
}

fn fmt_opt(v: Option<u64>) -> String {
    match v {
        Some(h) => format!("{:x}", h),
        None => "x".to_string(),
    }
}

fn parse_opt(s: &str) -> Result<Option<u64>> {
    if s == "x" {
        Ok(None)
    } else {
        u64::from_str_radix(s, 16)
            .map(Some)
            .map_err(|_| Error::BadFrameName(s.to_string()))
    }
}

fn fmt_bool(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

fn parse_bool(s: &str, whole: &str) -> Result<bool> {
    match s {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(Error::BadFrameName(whole.to_string())),
    }
}

impl FrameName {
    pub fn parse(name: &str) -> Result<Self> {
        let (src, tgt) = name
            .split_once('#')
            .ok_or_else(|| Error::BadFrameName(name.to_string()))?;

        let src_parts: Vec<&str> = src.split('_').collect();
        if src_parts.len() != 4 {
            return Err(Error::BadFrameName(name.to_string()));
        }
        let source = SourceName {
            state: parse_opt(src_parts[0])?,
            last: parse_opt(src_parts[1])?,
            golden: parse_opt(src_parts[2])?,
            alt: parse_opt(src_parts[3])?,
        };

        let tgt_parts: Vec<&str> = tgt.split('_').collect();
        if tgt_parts.len() != 10 {
            return Err(Error::BadFrameName(name.to_string()));
        }
        let state = u64::from_str_radix(tgt_parts[0], 16)
            .map_err(|_| Error::BadFrameName(name.to_string()))?;
        let output = u64::from_str_radix(tgt_parts[1], 16)
            .map_err(|_| Error::BadFrameName(name.to_string()))?;
        let target = TargetName {
            state,
            output,
            shown: parse_bool(tgt_parts[2], name)?,
            update_last: parse_bool(tgt_parts[3], name)?,
            update_golden: parse_bool(tgt_parts[4], name)?,
            update_alt: parse_bool(tgt_parts[5], name)?,
            copy_last_to_golden: parse_bool(tgt_parts[6], name)?,
            copy_last_to_alt: parse_bool(tgt_parts[7], name)?,
            copy_golden_to_alt: parse_bool(tgt_parts[8], name)?,
            copy_alt_to_golden: parse_bool(tgt_parts[9], name)?,
        };

        Ok(Self { source, target })
    }

    pub fn format(&self) -> String {
        format!(
            "{}_{}_{}_{}#{:x}_{:x}_{}_{}_{}_{}_{}_{}_{}_{}",
            fmt_opt(self.source.state),
            fmt_opt(self.source.last),
            fmt_opt(self.source.golden),
            fmt_opt(self.source.alt),
            self.target.state,
            self.target.output,
            fmt_bool(self.target.shown),
            fmt_bool(self.target.update_last),
            fmt_bool(self.target.update_golden),
            fmt_bool(self.target.update_alt),
            fmt_bool(self.target.copy_last_to_golden),
            fmt_bool(self.target.copy_last_to_alt),
            fmt_bool(self.target.copy_golden_to_alt),
            fmt_bool(self.target.copy_alt_to_golden),
        )
    }
}

impl std::fmt::Display for FrameName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Apply a target's update to a decoder's current hashes, predicting the
/// new hashes without actually decoding. First the copy transitions run (in
/// the order `last→golden, last→alt, golden→alt, alt→golden`), then the
/// `update_*` flags replace the named slot with the output hash.
pub fn apply_update(current: DecoderHash, target: &TargetName) -> DecoderHash {
    let mut last = current.last;
    let mut golden = current.golden;
    let mut alt = current.alt;

    if target.copy_last_to_golden {
        golden = last;
    }
    if target.copy_last_to_alt {
        alt = last;
    }
    if target.copy_golden_to_alt {
        alt = golden;
    }
    if target.copy_alt_to_golden {
        golden = alt;
    }

    if target.update_last {
        last = target.output;
    }
    if target.update_golden {
        golden = target.output;
    }
    if target.update_alt {
        alt = target.output;
    }

    DecoderHash::new(target.state, last, golden, alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrameName {
        FrameName {
            source: SourceName {
                state: Some(0x1),
                last: Some(0x2),
                golden: None,
                alt: None,
            },
            target: TargetName {
                state: 0x10,
                output: 0x20,
                shown: true,
                update_last: true,
                update_golden: false,
                update_alt: false,
                copy_last_to_golden: false,
                copy_last_to_alt: false,
                copy_golden_to_alt: false,
                copy_alt_to_golden: false,
            },
        }
    }

    #[test]
    fn roundtrips_through_string_form() {
        let name = sample();
        let text = name.format();
        let parsed = FrameName::parse(&text).unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn absent_components_encode_as_x() {
        let name = sample();
        let text = name.format();
        assert!(text.starts_with("1_2_x_x#"));
    }

    #[test]
    fn update_replaces_refreshed_slot_after_copies() {
        let current = DecoderHash::new(1, 10, 20, 30);
        let target = TargetName {
            state: 2,
            output: 99,
            shown: true,
            update_last: false,
            update_golden: false,
            update_alt: true,
            copy_last_to_golden: true,
            copy_last_to_alt: false,
            copy_golden_to_alt: false,
            copy_alt_to_golden: false,
        };
        let new_hash = apply_update(current, &target);
        assert_eq!(new_hash.golden, 10); // copied from last
        assert_eq!(new_hash.alt, 99); // refreshed to output
        assert_eq!(new_hash.last, 10); // unchanged
        assert_eq!(new_hash.state, 2);
    }

    #[test]
    fn rejects_malformed_name() {
        assert!(FrameName::parse("not-a-name").is_err());
    }
}
