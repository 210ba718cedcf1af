//! The section header table.

use crate::{
    Result,
    ehdr::ElfHeader,
    table::ElfTable,
    view::{ElfView, Encoding},
};
use alloc::vec::Vec;
use bitflags::bitflags;
use elf::abi::{
    SHF_ALLOC, SHF_EXECINSTR, SHF_GROUP, SHF_INFO_LINK, SHF_LINK_ORDER, SHF_MERGE, SHF_STRINGS,
    SHF_TLS, SHF_WRITE, SHT_DYNSYM, SHT_SYMTAB,
};

/// Fixed portion of an ELF64 section header entry, 64 bytes.
pub const SHDR_SIZE: usize = 64;

bitflags! {
    /// Section attribute bits from `sh_flags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SectionFlags: u64 {
        const WRITE = SHF_WRITE as u64;
        const ALLOC = SHF_ALLOC as u64;
        const EXECINSTR = SHF_EXECINSTR as u64;
        const MERGE = SHF_MERGE as u64;
        const STRINGS = SHF_STRINGS as u64;
        const INFO_LINK = SHF_INFO_LINK as u64;
        const LINK_ORDER = SHF_LINK_ORDER as u64;
        const GROUP = SHF_GROUP as u64;
        const TLS = SHF_TLS as u64;
        // OS- and processor-specific bits are data, not violations.
        const _ = !0;
    }
}

impl core::fmt::Display for SectionFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        let mut first = true;
        let mut named = 0u64;
        for (name, flag) in self.iter_names() {
            if !first {
                f.write_str(" + ")?;
            }
            f.write_str(name)?;
            named |= flag.bits();
            first = false;
        }
        let rest = self.bits() & !named;
        if rest != 0 {
            if !first {
                f.write_str(" + ")?;
            }
            write!(f, "{rest:#x}")?;
        }
        Ok(())
    }
}

/// A decoded ELF64 section header entry.
///
/// `sh_name` stays a raw offset into the section-header string table;
/// resolving it to text is the owning [`Elf`](crate::Elf) session's
/// job, since only the session knows which section holds the names.
#[derive(Debug, Clone)]
pub struct ElfShdr {
    pub sh_name: u32,
    pub sh_type: u32,
    pub sh_flags: u64,
    pub sh_addr: u64,
    pub sh_offset: u64,
    pub sh_size: u64,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u64,
    pub sh_entsize: u64,
}

impl ElfShdr {
    fn parse(entry: &ElfView<'_>, encoding: Encoding) -> Result<Self> {
        Ok(ElfShdr {
            sh_name: entry.read_u32(0, encoding)?,
            sh_type: entry.read_u32(4, encoding)?,
            sh_flags: entry.read_u64(8, encoding)?,
            sh_addr: entry.read_u64(16, encoding)?,
            sh_offset: entry.read_u64(24, encoding)?,
            sh_size: entry.read_u64(32, encoding)?,
            sh_link: entry.read_u32(40, encoding)?,
            sh_info: entry.read_u32(44, encoding)?,
            sh_addralign: entry.read_u64(48, encoding)?,
            sh_entsize: entry.read_u64(56, encoding)?,
        })
    }

    /// The section attribute bits as a typed flag set.
    #[inline]
    pub fn flags(&self) -> SectionFlags {
        SectionFlags::from_bits_retain(self.sh_flags)
    }

    /// Whether this section holds symbol entries. Covers both the full
    /// symbol table and the dynamic one, which a binary may carry
    /// side by side.
    #[inline]
    pub fn is_symtab(&self) -> bool {
        self.sh_type == SHT_SYMTAB || self.sh_type == SHT_DYNSYM
    }

    /// The `[sh_offset, sh_offset + sh_size)` byte range as usizes.
    #[inline]
    pub(crate) fn file_range(&self) -> (usize, usize) {
        (self.sh_offset as usize, self.sh_size as usize)
    }
}

/// Decodes the whole section header table the ELF header points at.
pub(crate) fn parse_shdrs<'data>(
    view: ElfView<'data>,
    ehdr: &ElfHeader,
) -> Result<Vec<ElfShdr>> {
    let table = ElfTable::new(
        view,
        ehdr.e_shoff(),
        ehdr.e_shentsize(),
        ehdr.e_shnum(),
        SHDR_SIZE,
    )?;
    let mut shdrs = Vec::with_capacity(table.count());
    for entry in table.iter() {
        shdrs.push(ElfShdr::parse(&entry?, ehdr.encoding())?);
    }
    Ok(shdrs)
}
