//! The program header table.

use crate::{
    Result,
    ehdr::ElfHeader,
    table::ElfTable,
    view::{ElfView, Encoding},
};
use alloc::vec::Vec;
use bitflags::bitflags;
use elf::abi::{PF_R, PF_W, PF_X};

/// Fixed portion of an ELF64 program header entry, 56 bytes.
pub const PHDR_SIZE: usize = 56;

bitflags! {
    /// Segment permission bits from `p_flags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SegmentFlags: u32 {
        const X = PF_X;
        const W = PF_W;
        const R = PF_R;
        // OS- and processor-specific bits are data, not violations.
        const _ = !0;
    }
}

impl core::fmt::Display for SegmentFlags {
    /// Renders the permission bits readelf-style (`RWE`), followed by
    /// any OS/processor-specific bits in hex.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{}{}",
            if self.contains(SegmentFlags::R) { 'R' } else { ' ' },
            if self.contains(SegmentFlags::W) { 'W' } else { ' ' },
            if self.contains(SegmentFlags::X) { 'E' } else { ' ' },
        )?;
        let rest = self.bits() & !(PF_R | PF_W | PF_X);
        if rest != 0 {
            write!(f, " {rest:#x}")?;
        }
        Ok(())
    }
}

/// A decoded ELF64 program header entry.
#[derive(Debug, Clone)]
pub struct ElfPhdr {
    pub p_type: u32,
    pub p_flags: u32,
    pub p_offset: u64,
    pub p_vaddr: u64,
    pub p_paddr: u64,
    pub p_filesz: u64,
    pub p_memsz: u64,
    pub p_align: u64,
}

impl ElfPhdr {
    /// Decodes the fixed fields of one table slot. Bytes past
    /// [`PHDR_SIZE`] (vendor padding) are left opaque.
    fn parse(entry: &ElfView<'_>, encoding: Encoding) -> Result<Self> {
        Ok(ElfPhdr {
            p_type: entry.read_u32(0, encoding)?,
            p_flags: entry.read_u32(4, encoding)?,
            p_offset: entry.read_u64(8, encoding)?,
            p_vaddr: entry.read_u64(16, encoding)?,
            p_paddr: entry.read_u64(24, encoding)?,
            p_filesz: entry.read_u64(32, encoding)?,
            p_memsz: entry.read_u64(40, encoding)?,
            p_align: entry.read_u64(48, encoding)?,
        })
    }

    /// The segment permission bits as a typed flag set.
    #[inline]
    pub fn flags(&self) -> SegmentFlags {
        SegmentFlags::from_bits_retain(self.p_flags)
    }
}

/// Decodes the whole program header table the ELF header points at.
pub(crate) fn parse_phdrs<'data>(
    view: ElfView<'data>,
    ehdr: &ElfHeader,
) -> Result<Vec<ElfPhdr>> {
    let table = ElfTable::new(
        view,
        ehdr.e_phoff(),
        ehdr.e_phentsize(),
        ehdr.e_phnum(),
        PHDR_SIZE,
    )?;
    let mut phdrs = Vec::with_capacity(table.count());
    for entry in table.iter() {
        phdrs.push(ElfPhdr::parse(&entry?, ehdr.encoding())?);
    }
    Ok(phdrs)
}
