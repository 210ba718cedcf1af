//! Byte-level ELF64 fixtures.
//!
//! The decoder is tested against buffers built field by field, so every
//! byte of the fixture is controlled by the test that uses it.
#![allow(dead_code)]

use elf_dump::Encoding;
use elf_dump::abi::{EM_X86_64, ET_EXEC, PF_R, PF_X, PT_LOAD};

pub const EHDR_SIZE: usize = 64;
pub const PHDR_SIZE: usize = 56;
pub const SHDR_SIZE: usize = 64;
pub const SYM_SIZE: usize = 24;

/// A synthetic ELF64 file under construction.
pub struct Fixture {
    encoding: Encoding,
    bytes: Vec<u8>,
}

impl Fixture {
    /// Starts from a valid 64-byte ELF64 executable header with empty
    /// program and section header tables.
    pub fn new(encoding: Encoding) -> Self {
        let mut fixture = Fixture {
            encoding,
            bytes: vec![0u8; EHDR_SIZE],
        };
        fixture.bytes[0..4].copy_from_slice(&[0x7f, b'E', b'L', b'F']);
        fixture.bytes[4] = 2; // ELFCLASS64
        fixture.bytes[5] = match encoding {
            Encoding::Little => 1,
            Encoding::Big => 2,
        };
        fixture.bytes[6] = 1; // EV_CURRENT
        fixture.put_u16(16, ET_EXEC);
        fixture.put_u16(18, EM_X86_64);
        fixture.put_u32(20, 1);
        fixture.put_u16(52, EHDR_SIZE as u16);
        fixture
    }

    pub fn put_u16(&mut self, at: usize, value: u16) {
        let raw = match self.encoding {
            Encoding::Little => value.to_le_bytes(),
            Encoding::Big => value.to_be_bytes(),
        };
        self.bytes[at..at + 2].copy_from_slice(&raw);
    }

    pub fn put_u32(&mut self, at: usize, value: u32) {
        let raw = match self.encoding {
            Encoding::Little => value.to_le_bytes(),
            Encoding::Big => value.to_be_bytes(),
        };
        self.bytes[at..at + 4].copy_from_slice(&raw);
    }

    pub fn put_u64(&mut self, at: usize, value: u64) {
        let raw = match self.encoding {
            Encoding::Little => value.to_le_bytes(),
            Encoding::Big => value.to_be_bytes(),
        };
        self.bytes[at..at + 8].copy_from_slice(&raw);
    }

    fn push_u16(&mut self, value: u16) {
        let at = self.bytes.len();
        self.bytes.resize(at + 2, 0);
        self.put_u16(at, value);
    }

    fn push_u32(&mut self, value: u32) {
        let at = self.bytes.len();
        self.bytes.resize(at + 4, 0);
        self.put_u32(at, value);
    }

    fn push_u64(&mut self, value: u64) {
        let at = self.bytes.len();
        self.bytes.resize(at + 8, 0);
        self.put_u64(at, value);
    }

    /// Appends raw bytes, returning their file offset.
    pub fn append(&mut self, data: &[u8]) -> u64 {
        let offset = self.bytes.len() as u64;
        self.bytes.extend_from_slice(data);
        offset
    }

    /// Appends a program header table and points the ELF header at it.
    pub fn add_phdrs(&mut self, phdrs: &[RawPhdr]) {
        let offset = self.bytes.len() as u64;
        for phdr in phdrs {
            self.push_u32(phdr.p_type);
            self.push_u32(phdr.p_flags);
            self.push_u64(phdr.p_offset);
            self.push_u64(phdr.p_vaddr);
            self.push_u64(phdr.p_paddr);
            self.push_u64(phdr.p_filesz);
            self.push_u64(phdr.p_memsz);
            self.push_u64(phdr.p_align);
        }
        self.put_u64(32, offset);
        self.put_u16(54, PHDR_SIZE as u16);
        self.put_u16(56, phdrs.len() as u16);
    }

    /// Appends a section header table and points the ELF header at it.
    pub fn add_shdrs(&mut self, shdrs: &[RawShdr]) {
        let offset = self.bytes.len() as u64;
        for shdr in shdrs {
            self.push_u32(shdr.sh_name);
            self.push_u32(shdr.sh_type);
            self.push_u64(shdr.sh_flags);
            self.push_u64(shdr.sh_addr);
            self.push_u64(shdr.sh_offset);
            self.push_u64(shdr.sh_size);
            self.push_u32(shdr.sh_link);
            self.push_u32(shdr.sh_info);
            self.push_u64(shdr.sh_addralign);
            self.push_u64(shdr.sh_entsize);
        }
        self.put_u64(40, offset);
        self.put_u16(58, SHDR_SIZE as u16);
        self.put_u16(60, shdrs.len() as u16);
    }

    /// Appends symbol entries, returning the table's file offset.
    pub fn append_syms(&mut self, syms: &[RawSym]) -> u64 {
        let offset = self.bytes.len() as u64;
        for sym in syms {
            self.push_u32(sym.st_name);
            self.bytes.push(sym.st_info);
            self.bytes.push(sym.st_other);
            self.push_u16(sym.st_shndx);
            self.push_u64(sym.st_value);
            self.push_u64(sym.st_size);
        }
        offset
    }

    pub fn set_type(&mut self, e_type: u16) {
        self.put_u16(16, e_type);
    }

    pub fn set_shstrndx(&mut self, index: u16) {
        self.put_u16(62, index);
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[derive(Default, Clone)]
pub struct RawPhdr {
    pub p_type: u32,
    pub p_flags: u32,
    pub p_offset: u64,
    pub p_vaddr: u64,
    pub p_paddr: u64,
    pub p_filesz: u64,
    pub p_memsz: u64,
    pub p_align: u64,
}

#[derive(Default, Clone)]
pub struct RawShdr {
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

#[derive(Default, Clone)]
pub struct RawSym {
    pub st_name: u32,
    pub st_info: u8,
    pub st_other: u8,
    pub st_shndx: u16,
    pub st_value: u64,
    pub st_size: u64,
}

/// A minimal statically-linked style executable: one `PT_LOAD` segment
/// covering the whole file, no sections.
pub fn minimal_exec(encoding: Encoding) -> Vec<u8> {
    let mut fixture = Fixture::new(encoding);
    fixture.put_u64(24, 0x40_0078); // e_entry
    fixture.add_phdrs(&[RawPhdr {
        p_type: PT_LOAD,
        p_flags: PF_R | PF_X,
        p_offset: 0,
        p_vaddr: 0x40_0000,
        p_paddr: 0x40_0000,
        p_filesz: (EHDR_SIZE + PHDR_SIZE) as u64,
        p_memsz: (EHDR_SIZE + PHDR_SIZE) as u64,
        p_align: 0x1000,
    }]);
    fixture.into_bytes()
}
