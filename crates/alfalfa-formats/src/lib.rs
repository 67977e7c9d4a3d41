//! alfalfa-formats: container detection and IVF I/O, the external
//! interchange format alongside the catalog's own persistence (spec §6).

pub mod container;
pub mod ivf;

pub use container::{detect_from_extension, detect_from_magic_bytes, ContainerFormat};
pub use ivf::{Error, IvfHeader, IvfReader, IvfWriter, Result};
