//! String table sections.
//!
//! A string table is a byte range inside the file holding NUL-terminated
//! names; headers and symbols reference a name by its offset from the
//! start of the range. The range is validated against the file when the
//! table is built, and every lookup is bounded by the range's end, so a
//! crafted name offset can never walk past the section.

use crate::{Result, error::Error, view::ElfView};

/// A validated string-table byte range.
#[derive(Debug, Clone, Copy)]
pub struct ElfStringTable<'data> {
    view: ElfView<'data>,
}

impl<'data> ElfStringTable<'data> {
    /// Wraps a string-table byte range. The view must already be
    /// narrowed to the table's `[sh_offset, sh_offset + sh_size)` span.
    pub fn new(view: ElfView<'data>) -> Self {
        Self { view }
    }

    /// Resolves the NUL-terminated name starting at `offset`.
    ///
    /// Fails with `OutOfBounds` if `offset` is past the end of the
    /// table, `UnterminatedString` if no NUL byte follows before the
    /// end, and `InvalidEncoding` if the name is not UTF-8. The
    /// terminator is not part of the returned string.
    pub fn get(&self, offset: usize) -> Result<&'data str> {
        let tail = self.view.bytes(offset, self.view.len().saturating_sub(offset))?;
        let name = match tail.iter().position(|&byte| byte == 0) {
            Some(end) => &tail[..end],
            None => return Err(Error::UnterminatedString { offset }),
        };
        core::str::from_utf8(name).map_err(|_| Error::InvalidEncoding { offset })
    }
}
