use core::fmt::{Debug, Display};

/// Error types used throughout the `elf_dump` library.
/// Every variant carries the offending offset or field value so that a
/// driver can report where in the file the decode went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An error occurred while reading the input file.
    #[cfg(feature = "fs")]
    Io {
        /// A descriptive message about the I/O error.
        msg: alloc::string::String,
    },

    /// The buffer is shorter than the fixed-size region being decoded.
    TooSmall {
        /// The buffer length.
        len: usize,
        /// The minimum length the decode needed.
        required: usize,
    },

    /// The first four bytes are not the ELF magic sequence.
    BadMagic {
        /// The bytes found at the start of the buffer.
        found: [u8; 4],
    },

    /// The class byte marks neither a 32-bit nor a supported 64-bit file.
    ///
    /// This crate decodes the 64-bit container only, so `ELFCLASS32`
    /// is also rejected with this variant.
    UnsupportedClass {
        /// The raw class byte.
        class: u8,
    },

    /// The data-encoding byte marks neither little- nor big-endian data.
    UnsupportedEndianness {
        /// The raw data-encoding byte.
        encoding: u8,
    },

    /// A read of `[offset, offset + len)` falls outside the buffer or
    /// range being decoded.
    OutOfBounds {
        /// The starting offset of the rejected read.
        offset: usize,
        /// The length of the rejected read.
        len: usize,
        /// The size of the buffer or range the read escaped.
        size: usize,
    },

    /// A symbol-table section's size is not a multiple of the fixed
    /// symbol entry size.
    MisalignedTable {
        /// Index of the offending section header.
        section: usize,
        /// The section's declared size in bytes.
        size: u64,
    },

    /// No terminating NUL byte was found before the end of the string
    /// table.
    UnterminatedString {
        /// The name offset the lookup started from.
        offset: usize,
    },

    /// A string-table entry is not valid UTF-8.
    InvalidEncoding {
        /// The name offset the lookup started from.
        offset: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "fs")]
            Error::Io { msg } => write!(f, "I/O error: {msg}"),
            Error::TooSmall { len, required } => {
                write!(f, "buffer too small: {len} bytes, need {required}")
            }
            Error::BadMagic { found } => write!(f, "invalid ELF magic: {found:02x?}"),
            Error::UnsupportedClass { class } => {
                write!(f, "unsupported ELF class: {class:#04x}")
            }
            Error::UnsupportedEndianness { encoding } => {
                write!(f, "unsupported ELF data encoding: {encoding:#04x}")
            }
            Error::OutOfBounds { offset, len, size } => write!(
                f,
                "read of {len} bytes at offset {offset:#x} escapes {size}-byte range"
            ),
            Error::MisalignedTable { section, size } => write!(
                f,
                "symbol table in section {section} has misaligned size {size:#x}"
            ),
            Error::UnterminatedString { offset } => {
                write!(f, "unterminated string at table offset {offset:#x}")
            }
            Error::InvalidEncoding { offset } => {
                write!(f, "invalid string encoding at table offset {offset:#x}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Creates an I/O error with the specified message.
#[cfg(feature = "fs")]
#[cold]
#[inline(never)]
pub(crate) fn io_error(msg: impl alloc::string::ToString) -> Error {
    Error::Io {
        msg: msg.to_string(),
    }
}

/// Creates a `TooSmall` error for a buffer of `len` bytes that needed
/// at least `required`.
#[cold]
#[inline(never)]
pub(crate) fn too_small(len: usize, required: usize) -> Error {
    Error::TooSmall { len, required }
}

/// Creates an `OutOfBounds` error for a rejected read.
#[cold]
#[inline(never)]
pub(crate) fn out_of_bounds(offset: usize, len: usize, size: usize) -> Error {
    Error::OutOfBounds { offset, len, size }
}

/// Creates a `MisalignedTable` error for the section at `section`.
#[cold]
#[inline(never)]
pub(crate) fn misaligned_table(section: usize, size: u64) -> Error {
    Error::MisalignedTable { section, size }
}
