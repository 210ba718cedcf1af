//! Bounds-checked access to the raw file bytes.
//!
//! Every decoded field in this crate is read through [`ElfView`], which
//! rejects any access that would leave the buffer instead of performing
//! a partial read. The view never copies or mutates the underlying
//! bytes; it is a `Copy` handle that all decoding stages share.

use crate::{Result, error::out_of_bounds};
use elf::abi::{ELFDATA2LSB, ELFDATA2MSB};

/// Byte order of the multi-byte fields in an ELF file, declared by the
/// `EI_DATA` byte of the identification block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `ELFDATA2LSB`
    Little,
    /// `ELFDATA2MSB`
    Big,
}

impl Encoding {
    /// Maps the raw `EI_DATA` byte to an encoding, if it names one.
    pub fn from_ei_data(data: u8) -> Option<Self> {
        match data {
            ELFDATA2LSB => Some(Encoding::Little),
            ELFDATA2MSB => Some(Encoding::Big),
            _ => None,
        }
    }

    /// The raw `EI_DATA` byte this encoding corresponds to.
    pub fn ei_data(&self) -> u8 {
        match self {
            Encoding::Little => ELFDATA2LSB,
            Encoding::Big => ELFDATA2MSB,
        }
    }
}

/// An immutable, bounds-checked view over a byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct ElfView<'data> {
    bytes: &'data [u8],
}

impl<'data> ElfView<'data> {
    /// Wraps the complete contents of a candidate ELF file.
    #[inline]
    pub const fn new(bytes: &'data [u8]) -> Self {
        Self { bytes }
    }

    /// Length of the viewed buffer in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes in `[offset, offset + len)`.
    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'data [u8]> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| out_of_bounds(offset, len, self.bytes.len()))?;
        self.bytes
            .get(offset..end)
            .ok_or_else(|| out_of_bounds(offset, len, self.bytes.len()))
    }

    /// Narrows the view to `[offset, offset + len)`.
    pub fn subview(&self, offset: usize, len: usize) -> Result<ElfView<'data>> {
        Ok(ElfView::new(self.bytes(offset, len)?))
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.bytes(offset, 1)?[0])
    }

    pub fn read_u16(&self, offset: usize, encoding: Encoding) -> Result<u16> {
        let raw: [u8; 2] = self.bytes(offset, 2)?.try_into().unwrap();
        Ok(match encoding {
            Encoding::Little => u16::from_le_bytes(raw),
            Encoding::Big => u16::from_be_bytes(raw),
        })
    }

    pub fn read_u32(&self, offset: usize, encoding: Encoding) -> Result<u32> {
        let raw: [u8; 4] = self.bytes(offset, 4)?.try_into().unwrap();
        Ok(match encoding {
            Encoding::Little => u32::from_le_bytes(raw),
            Encoding::Big => u32::from_be_bytes(raw),
        })
    }

    pub fn read_u64(&self, offset: usize, encoding: Encoding) -> Result<u64> {
        let raw: [u8; 8] = self.bytes(offset, 8)?.try_into().unwrap();
        Ok(match encoding {
            Encoding::Little => u64::from_le_bytes(raw),
            Encoding::Big => u64::from_be_bytes(raw),
        })
    }
}
