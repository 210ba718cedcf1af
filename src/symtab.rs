//! Symbol table sections.
//!
//! Symbols live in sections typed `SHT_SYMTAB` or `SHT_DYNSYM`; each
//! such section links (via `sh_link`) to the string table holding its
//! names. That indirection is distinct from the section-name string
//! table the ELF header points at, and the two must not be conflated.

use crate::{
    Result,
    error::{misaligned_table, out_of_bounds},
    shdrs::ElfShdr,
    strtab::ElfStringTable,
    table::ElfTable,
    view::{ElfView, Encoding},
};
use alloc::vec::Vec;
use elf::abi::SHN_UNDEF;

/// Size of an ELF64 symbol entry, 24 bytes.
pub const SYM_SIZE: usize = 24;

/// A decoded ELF64 symbol entry.
#[derive(Debug, Clone)]
pub struct ElfSymbol {
    pub st_name: u32,
    pub st_info: u8,
    pub st_other: u8,
    pub st_shndx: u16,
    pub st_value: u64,
    pub st_size: u64,
}

impl ElfSymbol {
    fn parse(entry: &ElfView<'_>, encoding: Encoding) -> Result<Self> {
        Ok(ElfSymbol {
            st_name: entry.read_u32(0, encoding)?,
            st_info: entry.read_u8(4)?,
            st_other: entry.read_u8(5)?,
            st_shndx: entry.read_u16(6, encoding)?,
            st_value: entry.read_u64(8, encoding)?,
            st_size: entry.read_u64(16, encoding)?,
        })
    }

    /// Symbol binding, the high four bits of `st_info`.
    #[inline]
    pub fn st_bind(&self) -> u8 {
        self.st_info >> 4
    }

    /// Symbol type, the low four bits of `st_info`.
    #[inline]
    pub fn st_type(&self) -> u8 {
        self.st_info & 0xf
    }

    /// Symbol visibility, the low two bits of `st_other`.
    #[inline]
    pub fn st_visibility(&self) -> u8 {
        self.st_other & 0x3
    }

    /// Whether the symbol is defined in no section.
    #[inline]
    pub fn is_undef(&self) -> bool {
        self.st_shndx == SHN_UNDEF
    }
}

/// A symbol entry together with its resolved name.
///
/// `name` is `None` when the entry's name offset could not be resolved
/// from the linked string table; the structural decode of the table
/// itself still succeeded, so one corrupt name does not discard the
/// rest of the symbols.
#[derive(Debug, Clone)]
pub struct NamedSymbol<'data> {
    pub sym: ElfSymbol,
    pub name: Option<&'data str>,
}

/// Decodes every symbol-table section, concatenated in section-table
/// order.
///
/// Per section: fails with `MisalignedTable` when `sh_size` is not a
/// multiple of the 24-byte entry size, and with `OutOfBounds` when the
/// table's byte range escapes the file or `sh_link` does not name a
/// section. Name lookups that fail inside a valid string table
/// downgrade to `None` instead.
pub(crate) fn parse_symbols<'data>(
    view: ElfView<'data>,
    encoding: Encoding,
    shdrs: &[ElfShdr],
) -> Result<Vec<NamedSymbol<'data>>> {
    let mut symbols = Vec::new();
    for (index, shdr) in shdrs.iter().enumerate() {
        if !shdr.is_symtab() {
            continue;
        }
        if shdr.sh_size % SYM_SIZE as u64 != 0 {
            return Err(misaligned_table(index, shdr.sh_size));
        }
        let count = (shdr.sh_size / SYM_SIZE as u64) as usize;
        let (offset, _) = shdr.file_range();
        let table = ElfTable::new(view, offset, SYM_SIZE, count, SYM_SIZE)?;

        let strtab_shdr = shdrs
            .get(shdr.sh_link as usize)
            .ok_or_else(|| out_of_bounds(shdr.sh_link as usize, 1, shdrs.len()))?;
        let (str_offset, str_len) = strtab_shdr.file_range();
        let strtab = ElfStringTable::new(view.subview(str_offset, str_len)?);

        #[cfg(feature = "log")]
        log::trace!(
            "[Symtab] section: {}, symbols: {}, strtab section: {}",
            index,
            count,
            shdr.sh_link
        );

        for entry in table.iter() {
            let sym = ElfSymbol::parse(&entry?, encoding)?;
            let name = strtab.get(sym.st_name as usize).ok();
            symbols.push(NamedSymbol { sym, name });
        }
    }
    Ok(symbols)
}
