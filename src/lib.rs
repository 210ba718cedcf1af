//! # elf_dump
//! A read-only decoder for the 64-bit ELF container.
//!
//! Given the complete bytes of a candidate file, [`Elf::parse`] decodes
//! the fixed header, the program header table and the section header
//! table with bounds checks on every field access, and exposes string
//! tables and symbol tables resolved through the cross-references the
//! headers declare. The [`fmt`] module turns the numeric fields into
//! display labels.
//!
//! ## Example
//! ```no_run
//! use elf_dump::{Elf, fmt};
//!
//! # fn main() -> elf_dump::Result<()> {
//! # let bytes: &[u8] = &[];
//! let elf = Elf::parse(bytes)?;
//! for phdr in elf.program_headers() {
//!     println!("{} {}", fmt::segment_type(phdr.p_type), phdr.flags());
//! }
//! for symbol in elf.symbols()? {
//!     println!("{}", symbol.name.unwrap_or("<corrupt>"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Decoding never mutates or copies the input buffer; the only
//! allocations are the decoded record vectors. Everything borrows from
//! the caller's buffer, which must outlive the [`Elf`] session and any
//! name resolved from it.
#![no_std]
extern crate alloc;
#[cfg(any(feature = "fs", test))]
extern crate std;

mod ehdr;
mod error;
pub mod fmt;
mod input;
mod phdrs;
mod shdrs;
mod strtab;
mod symtab;
mod table;
mod view;

use alloc::vec::Vec;
use elf::abi::SHN_UNDEF;

pub use elf::abi;

pub use ehdr::{EHDR_SIZE, ElfHeader, ElfIdent};
pub use error::Error;
pub use input::ElfBinary;
#[cfg(feature = "fs")]
pub use input::ElfFile;
pub use phdrs::{ElfPhdr, PHDR_SIZE, SegmentFlags};
pub use shdrs::{ElfShdr, SHDR_SIZE, SectionFlags};
pub use strtab::ElfStringTable;
pub use symtab::{ElfSymbol, NamedSymbol, SYM_SIZE};
pub use view::{ElfView, Encoding};

/// A decoded ELF file.
///
/// One immutable decode session over one buffer: the header and both
/// header tables are decoded eagerly by [`Elf::parse`] (a failure there
/// rejects the whole file), while names and symbols resolve on demand.
/// The session holds no mutable state, so it can be shared across
/// threads as long as the buffer outlives it.
pub struct Elf<'data> {
    view: ElfView<'data>,
    ehdr: ElfHeader,
    phdrs: Vec<ElfPhdr>,
    shdrs: Vec<ElfShdr>,
}

impl core::fmt::Debug for Elf<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Elf")
            .field("type", &fmt::file_type(self.ehdr.e_type))
            .field("machine", &fmt::machine(self.ehdr.e_machine))
            .field("phdrs", &self.phdrs.len())
            .field("shdrs", &self.shdrs.len())
            .finish()
    }
}

impl<'data> Elf<'data> {
    /// Decodes the header, program header table and section header
    /// table from the complete contents of an ELF file.
    pub fn parse(bytes: &'data [u8]) -> Result<Self> {
        let view = ElfView::new(bytes);
        let ehdr = ElfHeader::parse(&view)?;
        let phdrs = phdrs::parse_phdrs(view, &ehdr)?;
        let shdrs = shdrs::parse_shdrs(view, &ehdr)?;
        #[cfg(feature = "log")]
        log::trace!(
            "[Parse] type: {}, machine: {}, phdrs: {}, shdrs: {}",
            fmt::file_type(ehdr.e_type),
            fmt::machine(ehdr.e_machine),
            phdrs.len(),
            shdrs.len()
        );
        Ok(Self {
            view,
            ehdr,
            phdrs,
            shdrs,
        })
    }

    /// The decoded ELF header.
    #[inline]
    pub fn header(&self) -> &ElfHeader {
        &self.ehdr
    }

    /// The decoded program header table, in table order.
    #[inline]
    pub fn program_headers(&self) -> &[ElfPhdr] {
        &self.phdrs
    }

    /// The decoded section header table, in table order.
    #[inline]
    pub fn section_headers(&self) -> &[ElfShdr] {
        &self.shdrs
    }

    /// The string table stored in the section at `index`.
    ///
    /// Fails with `OutOfBounds` when `index` does not name a section or
    /// the section's byte range escapes the file.
    pub fn string_table(&self, index: usize) -> Result<ElfStringTable<'data>> {
        let shdr = self
            .shdrs
            .get(index)
            .ok_or_else(|| error::out_of_bounds(index, 1, self.shdrs.len()))?;
        let (offset, len) = shdr.file_range();
        Ok(ElfStringTable::new(self.view.subview(offset, len)?))
    }

    /// Resolves a section's name through the section-header string
    /// table the ELF header declares (`e_shstrndx`).
    ///
    /// Returns `None` when the file carries no section names
    /// (`e_shstrndx == SHN_UNDEF`) or when this one name cannot be
    /// resolved; a corrupt name does not fail the section table.
    pub fn section_name(&self, shdr: &ElfShdr) -> Option<&'data str> {
        if self.ehdr.e_shstrndx == SHN_UNDEF {
            return None;
        }
        let strtab = self.string_table(self.ehdr.e_shstrndx as usize).ok()?;
        strtab.get(shdr.sh_name as usize).ok()
    }

    /// Decodes every symbol table in the file, names resolved through
    /// each table's linked string-table section.
    ///
    /// Sections typed `SHT_SYMTAB` and `SHT_DYNSYM` are decoded and
    /// concatenated in section-table order.
    pub fn symbols(&self) -> Result<Vec<NamedSymbol<'data>>> {
        symtab::parse_symbols(self.view, self.ehdr.encoding(), &self.shdrs)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
