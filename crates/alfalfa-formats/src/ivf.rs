//! IVF container reading and writing, used to hand frames to/from the
//! VP8 decoder core independent of the catalog's own persistence format
//! (spec §6 "External interfaces").
//!
//! Grounded on
//! `examples/hawk90-bitvue/crates/bitvue-formats/src/ivf_writer.rs`:
//! 32-byte `DKIF` header, then one `size:u32 | pts:u64 | data` record per
//! frame. Generalized here to the `VP80` fourcc and extended with a
//! reader, which the teacher's file only writes.

use std::io::{self, Read, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not an IVF file (bad magic)")]
    BadMagic,
    #[error("unsupported IVF version {0}")]
    UnsupportedVersion(u16),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

const MAGIC: &[u8; 4] = b"DKIF";
const HEADER_LEN: u16 = 32;
const FOURCC_VP8: [u8; 4] = *b"VP80";

#[derive(Debug, Clone, Copy)]
pub struct IvfHeader {
    pub width: u16,
    pub height: u16,
    pub framerate_num: u32,
    pub framerate_den: u32,
    pub frame_count: u32,
}

pub struct IvfWriter<W: Write> {
    inner: W,
    frame_count: u32,
}

impl<W: Write> IvfWriter<W> {
    pub fn write_header(mut inner: W, width: u16, height: u16, framerate_num: u32, framerate_den: u32) -> Result<Self> {
        inner.write_all(MAGIC)?;
        inner.write_all(&0u16.to_le_bytes())?;
        inner.write_all(&HEADER_LEN.to_le_bytes())?;
        inner.write_all(&FOURCC_VP8)?;
        inner.write_all(&width.to_le_bytes())?;
        inner.write_all(&height.to_le_bytes())?;
        inner.write_all(&framerate_den.to_le_bytes())?;
        inner.write_all(&framerate_num.to_le_bytes())?;
        inner.write_all(&0u32.to_le_bytes())?; // frame count placeholder
        inner.write_all(&[0u8; 4])?; // unused
        Ok(Self { inner, frame_count: 0 })
    }

    pub fn write_frame(&mut self, pts: u64, data: &[u8]) -> Result<()> {
        self.inner.write_all(&(data.len() as u32).to_le_bytes())?;
        self.inner.write_all(&pts.to_le_bytes())?;
        self.inner.write_all(data)?;
        self.frame_count += 1;
        Ok(())
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

pub struct IvfReader<R: Read> {
    inner: R,
    pub header: IvfHeader,
}

impl<R: Read> IvfReader<R> {
    pub fn new(mut inner: R) -> Result<Self> {
        let mut magic = [0u8; 4];
        inner.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(Error::BadMagic);
        }
        let mut buf2 = [0u8; 2];
        inner.read_exact(&mut buf2)?;
        let version = u16::from_le_bytes(buf2);
        if version != 0 {
            return Err(Error::UnsupportedVersion(version));
        }
        inner.read_exact(&mut buf2)?; // header length, unused beyond the fixed 32
        let mut fourcc = [0u8; 4];
        inner.read_exact(&mut fourcc)?;
        inner.read_exact(&mut buf2)?;
        let width = u16::from_le_bytes(buf2);
        inner.read_exact(&mut buf2)?;
        let height = u16::from_le_bytes(buf2);
        let mut buf4 = [0u8; 4];
        inner.read_exact(&mut buf4)?;
        let framerate_den = u32::from_le_bytes(buf4);
        inner.read_exact(&mut buf4)?;
        let framerate_num = u32::from_le_bytes(buf4);
        inner.read_exact(&mut buf4)?;
        let frame_count = u32::from_le_bytes(buf4);
        inner.read_exact(&mut buf4)?; // unused

        Ok(Self {
            inner,
            header: IvfHeader {
                width,
                height,
                framerate_num,
                framerate_den,
                frame_count,
            },
        })
    }

    /// Read the next frame as `(pts, data)`, or `None` at end of stream.
    pub fn read_frame(&mut self) -> Result<Option<(u64, Vec<u8>)>> {
        let mut len_buf = [0u8; 4];
        match self.inner.read_exact(&mut len_buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }
        let len = u32::from_le_bytes(len_buf) as usize;
        let mut pts_buf = [0u8; 8];
        self.inner.read_exact(&mut pts_buf)?;
        let pts = u64::from_le_bytes(pts_buf);
        let mut data = vec![0u8; len];
        self.inner.read_exact(&mut data)?;
        Ok(Some((pts, data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_header_and_two_frames() {
        let mut buf = Vec::new();
        {
            let mut writer = IvfWriter::write_header(&mut buf, 16, 16, 30, 1).unwrap();
            writer.write_frame(0, &[1, 2, 3]).unwrap();
            writer.write_frame(1, &[4, 5]).unwrap();
        }

        let mut reader = IvfReader::new(buf.as_slice()).unwrap();
        assert_eq!(reader.header.width, 16);
        assert_eq!(reader.header.height, 16);

        let (pts0, data0) = reader.read_frame().unwrap().unwrap();
        assert_eq!(pts0, 0);
        assert_eq!(data0, vec![1, 2, 3]);

        let (pts1, data1) = reader.read_frame().unwrap().unwrap();
        assert_eq!(pts1, 1);
        assert_eq!(data1, vec![4, 5]);

        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn rejects_bad_magic() {
        let buf = vec![0u8; 32];
        assert!(matches!(IvfReader::new(buf.as_slice()), Err(Error::BadMagic)));
    }
}
