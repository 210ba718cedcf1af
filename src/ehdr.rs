//! The fixed 64-byte ELF header.

use crate::{
    Result,
    error::{Error, too_small},
    view::{ElfView, Encoding},
};
use elf::abi::{
    EI_ABIVERSION, EI_CLASS, EI_DATA, EI_NIDENT, EI_OSABI, EI_VERSION, ELFCLASS64, ELFMAGIC,
};

/// Size of the full ELF64 header, identification block included.
pub const EHDR_SIZE: usize = 64;

/// The decoded identification block (bytes 0..16 of the file).
#[derive(Debug, Clone, Copy)]
pub struct ElfIdent {
    /// Raw `EI_CLASS` byte. Always `ELFCLASS64` after a successful parse.
    pub class: u8,
    /// Byte order of every multi-byte field that follows the block.
    pub encoding: Encoding,
    /// Raw `EI_VERSION` byte.
    pub version: u8,
    /// Raw `EI_OSABI` byte.
    pub osabi: u8,
    /// Raw `EI_ABIVERSION` byte.
    pub abi_version: u8,
}

/// The decoded ELF64 header.
///
/// Field names keep the standard `e_` prefixes so they can be read
/// against the ELF specification directly. All multi-byte fields have
/// already been converted from the file's declared byte order.
#[derive(Debug, Clone)]
pub struct ElfHeader {
    pub ident: ElfIdent,
    pub e_type: u16,
    pub e_machine: u16,
    pub e_version: u32,
    pub e_entry: u64,
    pub e_phoff: u64,
    pub e_shoff: u64,
    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
}

impl ElfHeader {
    /// Decodes and validates the header at the start of `view`.
    ///
    /// Validation order: buffer length for the identification block,
    /// magic bytes, class, data encoding, then buffer length for the
    /// full 64-byte header. The remaining fields are read with the
    /// endianness the identification block declared.
    pub fn parse(view: &ElfView<'_>) -> Result<Self> {
        if view.len() < EI_NIDENT {
            return Err(too_small(view.len(), EI_NIDENT));
        }
        let ident = view.bytes(0, EI_NIDENT)?;
        if ident[0..4] != ELFMAGIC {
            return Err(Error::BadMagic {
                found: [ident[0], ident[1], ident[2], ident[3]],
            });
        }
        if ident[EI_CLASS] != ELFCLASS64 {
            return Err(Error::UnsupportedClass {
                class: ident[EI_CLASS],
            });
        }
        let encoding = Encoding::from_ei_data(ident[EI_DATA]).ok_or(
            Error::UnsupportedEndianness {
                encoding: ident[EI_DATA],
            },
        )?;
        if view.len() < EHDR_SIZE {
            return Err(too_small(view.len(), EHDR_SIZE));
        }
        Ok(ElfHeader {
            ident: ElfIdent {
                class: ident[EI_CLASS],
                encoding,
                version: ident[EI_VERSION],
                osabi: ident[EI_OSABI],
                abi_version: ident[EI_ABIVERSION],
            },
            e_type: view.read_u16(16, encoding)?,
            e_machine: view.read_u16(18, encoding)?,
            e_version: view.read_u32(20, encoding)?,
            e_entry: view.read_u64(24, encoding)?,
            e_phoff: view.read_u64(32, encoding)?,
            e_shoff: view.read_u64(40, encoding)?,
            e_flags: view.read_u32(48, encoding)?,
            e_ehsize: view.read_u16(52, encoding)?,
            e_phentsize: view.read_u16(54, encoding)?,
            e_phnum: view.read_u16(56, encoding)?,
            e_shentsize: view.read_u16(58, encoding)?,
            e_shnum: view.read_u16(60, encoding)?,
            e_shstrndx: view.read_u16(62, encoding)?,
        })
    }

    /// Byte order of the file this header came from.
    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.ident.encoding
    }

    #[inline]
    pub(crate) fn e_phnum(&self) -> usize {
        self.e_phnum as usize
    }

    #[inline]
    pub(crate) fn e_phentsize(&self) -> usize {
        self.e_phentsize as usize
    }

    #[inline]
    pub(crate) fn e_phoff(&self) -> usize {
        self.e_phoff as usize
    }

    #[inline]
    pub(crate) fn e_shoff(&self) -> usize {
        self.e_shoff as usize
    }

    #[inline]
    pub(crate) fn e_shentsize(&self) -> usize {
        self.e_shentsize as usize
    }

    #[inline]
    pub(crate) fn e_shnum(&self) -> usize {
        self.e_shnum as usize
    }
}
