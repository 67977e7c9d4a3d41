//! On-disk persistence for catalog tables: one file per table, an ASCII
//! magic header, then length-prefixed `serde_json` records (spec §4.4).
//!
//! Grounded on `examples/hawk90-bitvue/crates/bitvue-core/src/byte_cache.rs`'s
//! file-backed-store style, adapted to a simple append/rewrite log rather
//! than an mmap'd LRU cache since catalog tables are small relative to
//! raster bytes.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

const MAGIC_LEN: usize = 8;

fn magic_for(table_name: &str) -> [u8; MAGIC_LEN] {
    let mut magic = [b' '; MAGIC_LEN];
    let bytes = format!("ALF{table_name}").into_bytes();
    let n = bytes.len().min(MAGIC_LEN);
    magic[..n].copy_from_slice(&bytes[..n]);
    magic
}

/// Load every record from a table file, or an empty vec if the file does
/// not exist yet.
pub fn load<T: DeserializeOwned>(path: &Path, table_name: &str) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; MAGIC_LEN];
    reader.read_exact(&mut magic)?;
    if magic != magic_for(table_name) {
        return Err(Error::BadMagic {
            path: path.display().to_string(),
        });
    }

    let mut records = Vec::new();
    loop {
        let mut len_buf = [0u8; 4];
        match reader.read_exact(&mut len_buf) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
        let len = u32::from_le_bytes(len_buf) as usize;
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf)?;
        records.push(serde_json::from_slice(&buf)?);
    }
    Ok(records)
}

/// Rewrite a table file from scratch with the full record set. The
/// catalog's update semantics are "read, modify in memory, write a new
/// file" rather than in-place patching, matching how the original
/// implementation treats these tables as small enough to fully
/// materialize (spec §4.4).
pub fn save<T: Serialize>(path: &Path, table_name: &str, records: &[T]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&magic_for(table_name))?;
    for record in records {
        let bytes = serde_json::to_vec(record)?;
        writer.write_all(&(bytes.len() as u32).to_le_bytes())?;
        writer.write_all(&bytes)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: u32,
        name: String,
    }

    #[test]
    fn round_trips_records_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.tbl");
        let records = vec![
            Sample { id: 1, name: "a".into() },
            Sample { id: 2, name: "b".into() },
        ];
        save(&path, "SAMPLE", &records).unwrap();
        let loaded: Vec<Sample> = load(&path, "SAMPLE").unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.tbl");
        let loaded: Vec<Sample> = load(&path, "SAMPLE").unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.tbl");
        save(&path, "SAMPLE", &[Sample { id: 1, name: "a".into() }]).unwrap();
        let err = load::<Sample>(&path, "OTHER").unwrap_err();
        assert!(matches!(err, Error::BadMagic { .. }));
    }
}
