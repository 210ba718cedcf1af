//! Fixed-layout header tables.
//!
//! Both the program header table and the section header table are a
//! contiguous run of `count` slots of `entsize` bytes starting at a
//! file offset the ELF header declares. [`ElfTable`] validates the
//! whole run against the buffer once, so that projecting entry `i` at
//! `offset + i * entsize` can never leave the file.

use crate::{Result, error::out_of_bounds, view::ElfView};

/// A validated `(offset, entry size, count)` triple over the file view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ElfTable<'data> {
    view: ElfView<'data>,
    offset: usize,
    entsize: usize,
    count: usize,
}

impl<'data> ElfTable<'data> {
    /// Validates the table bounds.
    ///
    /// Fails with `OutOfBounds` when `entsize` cannot hold the fixed
    /// fields of the table kind (`min_entsize`) or when
    /// `offset + entsize * count` escapes the buffer, using checked
    /// arithmetic so crafted sizes cannot wrap.
    pub(crate) fn new(
        view: ElfView<'data>,
        offset: usize,
        entsize: usize,
        count: usize,
        min_entsize: usize,
    ) -> Result<Self> {
        if count > 0 && entsize < min_entsize {
            return Err(out_of_bounds(offset, entsize, min_entsize));
        }
        let total = entsize
            .checked_mul(count)
            .and_then(|total| offset.checked_add(total))
            .ok_or_else(|| out_of_bounds(offset, entsize.saturating_mul(count), view.len()))?;
        if total > view.len() {
            return Err(out_of_bounds(offset, total - offset, view.len()));
        }
        Ok(Self {
            view,
            offset,
            entsize,
            count,
        })
    }

    /// Number of slots in the table.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// The raw bytes of slot `i`, including any opaque tail past the
    /// fixed fields.
    pub(crate) fn entry(&self, i: usize) -> Result<ElfView<'data>> {
        debug_assert!(i < self.count);
        self.view.subview(self.offset + i * self.entsize, self.entsize)
    }

    /// Iterates the slots in table order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = Result<ElfView<'data>>> + '_ {
        (0..self.count).map(|i| self.entry(i))
    }
}
