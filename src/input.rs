//! Sources of ELF bytes.
//!
//! The decoder itself only ever sees a complete in-memory buffer; these
//! types are the thin acquisition layer that produces one. File-backed
//! input lives behind the `fs` feature so the core stays `no_std`.

use crate::view::ElfView;
use alloc::string::{String, ToString};

/// An ELF file already held in memory.
#[derive(Debug)]
pub struct ElfBinary<'bytes> {
    /// The name assigned to this ELF object, used for reporting only.
    name: String,
    /// The raw ELF data.
    bytes: &'bytes [u8],
}

impl<'bytes> ElfBinary<'bytes> {
    /// Wraps a byte slice containing the complete ELF data.
    ///
    /// # Arguments
    /// * `name` - An identifier for the object, typically the original
    ///   file path.
    /// * `bytes` - The complete file contents.
    pub fn new(name: &str, bytes: &'bytes [u8]) -> Self {
        Self {
            name: name.to_string(),
            bytes,
        }
    }

    /// Returns the name of the ELF object.
    pub fn file_name(&self) -> &str {
        &self.name
    }

    /// The complete file contents.
    pub fn bytes(&self) -> &'bytes [u8] {
        self.bytes
    }

    /// A bounds-checked view over the object's bytes.
    pub fn view(&self) -> ElfView<'bytes> {
        ElfView::new(self.bytes)
    }
}

/// An ELF file read from the filesystem.
///
/// The whole file is read up front; the decoder never goes back to the
/// file handle.
#[cfg(feature = "fs")]
#[derive(Debug)]
pub struct ElfFile {
    name: String,
    bytes: alloc::vec::Vec<u8>,
}

#[cfg(feature = "fs")]
impl ElfFile {
    /// Reads the complete file at `path` into memory.
    pub fn from_path(path: impl AsRef<str>) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(crate::error::io_error)?;
        Ok(Self {
            name: path.to_string(),
            bytes,
        })
    }

    /// Returns the name of the ELF object.
    pub fn file_name(&self) -> &str {
        &self.name
    }

    /// The complete file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A bounds-checked view over the file's bytes.
    pub fn view(&self) -> ElfView<'_> {
        ElfView::new(&self.bytes)
    }
}
