//! Display labels for numeric ELF fields.
//!
//! One total function per field family: every input value maps to a
//! label, and values outside the enumerated set map to an explicit
//! `Unknown(..)` label carrying the raw number. Unrecognized values are
//! data in the file being inspected, never a decode failure.

use alloc::borrow::Cow;
use alloc::format;
use elf::abi::{
    ELFCLASS32, ELFCLASS64, ELFCLASSNONE, ELFDATA2LSB, ELFDATA2MSB, ELFDATANONE, ELFOSABI_AIX,
    ELFOSABI_FREEBSD, ELFOSABI_GNU, ELFOSABI_HPUX, ELFOSABI_IRIX, ELFOSABI_MODESTO,
    ELFOSABI_NETBSD, ELFOSABI_OPENBSD, ELFOSABI_SOLARIS, ELFOSABI_SYSV, ELFOSABI_TRU64, EM_386,
    EM_68K, EM_860, EM_88K, EM_AARCH64, EM_ARM, EM_IA_64, EM_M32, EM_MIPS, EM_NONE, EM_PARISC,
    EM_PPC, EM_PPC64, EM_RISCV, EM_S390, EM_SH, EM_SPARC, EM_SPARCV9, EM_X86_64, ET_CORE, ET_DYN,
    ET_EXEC, ET_NONE, ET_REL, PT_DYNAMIC, PT_GNU_EH_FRAME, PT_GNU_RELRO, PT_GNU_STACK, PT_HIOS,
    PT_HIPROC, PT_INTERP, PT_LOAD, PT_LOOS, PT_LOPROC, PT_NOTE, PT_NULL, PT_PHDR, PT_SHLIB,
    PT_TLS, SHT_DYNAMIC, SHT_DYNSYM, SHT_FINI_ARRAY, SHT_GNU_ATTRIBUTES, SHT_GNU_HASH,
    SHT_GNU_VERDEF, SHT_GNU_VERNEED, SHT_GNU_VERSYM, SHT_GROUP, SHT_HASH, SHT_HIOS, SHT_HIPROC,
    SHT_HIUSER, SHT_INIT_ARRAY, SHT_LOOS, SHT_LOPROC, SHT_LOUSER, SHT_NOBITS, SHT_NOTE, SHT_NULL,
    SHT_PREINIT_ARRAY, SHT_PROGBITS, SHT_REL, SHT_RELA, SHT_SHLIB, SHT_STRTAB, SHT_SYMTAB,
    SHT_SYMTAB_SHNDX, STB_GLOBAL, STB_GNU_UNIQUE, STB_LOCAL, STB_WEAK, STT_COMMON, STT_FILE,
    STT_FUNC, STT_GNU_IFUNC, STT_NOTYPE, STT_OBJECT, STT_SECTION, STT_TLS, STV_DEFAULT,
    STV_HIDDEN, STV_INTERNAL, STV_PROTECTED,
};

/// Label for the `EI_CLASS` byte.
pub fn class(class: u8) -> Cow<'static, str> {
    match class {
        ELFCLASSNONE => Cow::Borrowed("Invalid class"),
        ELFCLASS32 => Cow::Borrowed("32-bit ELF"),
        ELFCLASS64 => Cow::Borrowed("64-bit ELF"),
        value => Cow::Owned(format!("Unknown({value:#x})")),
    }
}

/// Label for the `EI_DATA` byte.
pub fn data_encoding(data: u8) -> Cow<'static, str> {
    match data {
        ELFDATANONE => Cow::Borrowed("Invalid data encoding"),
        ELFDATA2LSB => Cow::Borrowed("Little endian, 2's complement"),
        ELFDATA2MSB => Cow::Borrowed("Big endian, 2's complement"),
        value => Cow::Owned(format!("Unknown({value:#x})")),
    }
}

/// Label for the `EI_OSABI` byte.
pub fn os_abi(osabi: u8) -> Cow<'static, str> {
    match osabi {
        ELFOSABI_SYSV => Cow::Borrowed("UNIX - System V"),
        ELFOSABI_HPUX => Cow::Borrowed("HP-UX"),
        ELFOSABI_NETBSD => Cow::Borrowed("NetBSD"),
        ELFOSABI_GNU => Cow::Borrowed("UNIX - GNU"),
        ELFOSABI_SOLARIS => Cow::Borrowed("Solaris"),
        ELFOSABI_AIX => Cow::Borrowed("AIX"),
        ELFOSABI_IRIX => Cow::Borrowed("IRIX"),
        ELFOSABI_FREEBSD => Cow::Borrowed("FreeBSD"),
        ELFOSABI_TRU64 => Cow::Borrowed("TRU64"),
        ELFOSABI_MODESTO => Cow::Borrowed("Novell Modesto"),
        ELFOSABI_OPENBSD => Cow::Borrowed("OpenBSD"),
        value => Cow::Owned(format!("Unknown({value:#x})")),
    }
}

/// Label for `e_type`.
pub fn file_type(e_type: u16) -> Cow<'static, str> {
    match e_type {
        ET_NONE => Cow::Borrowed("None"),
        ET_REL => Cow::Borrowed("Relocatable file"),
        ET_EXEC => Cow::Borrowed("Executable file"),
        ET_DYN => Cow::Borrowed("Shared object file"),
        ET_CORE => Cow::Borrowed("Core file"),
        value => Cow::Owned(format!("Unknown({value:#x})")),
    }
}

/// Label for `e_machine`.
pub fn machine(machine: u16) -> Cow<'static, str> {
    match machine {
        EM_NONE => Cow::Borrowed("No machine"),
        EM_M32 => Cow::Borrowed("AT&T WE 32100"),
        EM_SPARC => Cow::Borrowed("Sun SPARC"),
        EM_386 => Cow::Borrowed("Intel 80386"),
        EM_68K => Cow::Borrowed("Motorola 68000"),
        EM_88K => Cow::Borrowed("Motorola 88000"),
        EM_860 => Cow::Borrowed("Intel 80860"),
        EM_MIPS => Cow::Borrowed("MIPS R3000"),
        EM_PARISC => Cow::Borrowed("HP PA-RISC"),
        EM_PPC => Cow::Borrowed("PowerPC"),
        EM_PPC64 => Cow::Borrowed("PowerPC 64-bit"),
        EM_S390 => Cow::Borrowed("IBM S/390"),
        EM_ARM => Cow::Borrowed("ARM"),
        EM_SH => Cow::Borrowed("Renesas SuperH"),
        EM_SPARCV9 => Cow::Borrowed("SPARC V9 64-bit"),
        EM_IA_64 => Cow::Borrowed("Intel Itanium"),
        EM_X86_64 => Cow::Borrowed("AMD x86-64"),
        EM_AARCH64 => Cow::Borrowed("AArch64"),
        EM_RISCV => Cow::Borrowed("RISC-V"),
        value => Cow::Owned(format!("Unknown({value:#x})")),
    }
}

/// Label for a program header's `p_type`.
pub fn segment_type(p_type: u32) -> Cow<'static, str> {
    match p_type {
        PT_NULL => Cow::Borrowed("PT_NULL"),
        PT_LOAD => Cow::Borrowed("PT_LOAD"),
        PT_DYNAMIC => Cow::Borrowed("PT_DYNAMIC"),
        PT_INTERP => Cow::Borrowed("PT_INTERP"),
        PT_NOTE => Cow::Borrowed("PT_NOTE"),
        PT_SHLIB => Cow::Borrowed("PT_SHLIB"),
        PT_PHDR => Cow::Borrowed("PT_PHDR"),
        PT_TLS => Cow::Borrowed("PT_TLS"),
        PT_GNU_EH_FRAME => Cow::Borrowed("PT_GNU_EH_FRAME"),
        PT_GNU_STACK => Cow::Borrowed("PT_GNU_STACK"),
        PT_GNU_RELRO => Cow::Borrowed("PT_GNU_RELRO"),
        value if (PT_LOOS..=PT_HIOS).contains(&value) => {
            Cow::Owned(format!("OS-specific({value:#x})"))
        }
        value if (PT_LOPROC..=PT_HIPROC).contains(&value) => {
            Cow::Owned(format!("Processor-specific({value:#x})"))
        }
        value => Cow::Owned(format!("Unknown({value:#x})")),
    }
}

/// Label for a section header's `sh_type`.
pub fn section_type(sh_type: u32) -> Cow<'static, str> {
    match sh_type {
        SHT_NULL => Cow::Borrowed("SHT_NULL"),
        SHT_PROGBITS => Cow::Borrowed("SHT_PROGBITS"),
        SHT_SYMTAB => Cow::Borrowed("SHT_SYMTAB"),
        SHT_STRTAB => Cow::Borrowed("SHT_STRTAB"),
        SHT_RELA => Cow::Borrowed("SHT_RELA"),
        SHT_HASH => Cow::Borrowed("SHT_HASH"),
        SHT_DYNAMIC => Cow::Borrowed("SHT_DYNAMIC"),
        SHT_NOTE => Cow::Borrowed("SHT_NOTE"),
        SHT_NOBITS => Cow::Borrowed("SHT_NOBITS"),
        SHT_REL => Cow::Borrowed("SHT_REL"),
        SHT_SHLIB => Cow::Borrowed("SHT_SHLIB"),
        SHT_DYNSYM => Cow::Borrowed("SHT_DYNSYM"),
        SHT_INIT_ARRAY => Cow::Borrowed("SHT_INIT_ARRAY"),
        SHT_FINI_ARRAY => Cow::Borrowed("SHT_FINI_ARRAY"),
        SHT_PREINIT_ARRAY => Cow::Borrowed("SHT_PREINIT_ARRAY"),
        SHT_GROUP => Cow::Borrowed("SHT_GROUP"),
        SHT_SYMTAB_SHNDX => Cow::Borrowed("SHT_SYMTAB_SHNDX"),
        SHT_GNU_ATTRIBUTES => Cow::Borrowed("SHT_GNU_ATTRIBUTES"),
        SHT_GNU_HASH => Cow::Borrowed("SHT_GNU_HASH"),
        SHT_GNU_VERDEF => Cow::Borrowed("SHT_GNU_verdef"),
        SHT_GNU_VERNEED => Cow::Borrowed("SHT_GNU_verneed"),
        SHT_GNU_VERSYM => Cow::Borrowed("SHT_GNU_versym"),
        value if (SHT_LOOS..=SHT_HIOS).contains(&value) => {
            Cow::Owned(format!("OS-specific({value:#x})"))
        }
        value if (SHT_LOPROC..=SHT_HIPROC).contains(&value) => {
            Cow::Owned(format!("Processor-specific({value:#x})"))
        }
        value if (SHT_LOUSER..=SHT_HIUSER).contains(&value) => {
            Cow::Owned(format!("Application-specific({value:#x})"))
        }
        value => Cow::Owned(format!("Unknown({value:#x})")),
    }
}

/// Label for a symbol's binding (high nibble of `st_info`).
pub fn symbol_bind(bind: u8) -> Cow<'static, str> {
    match bind {
        STB_LOCAL => Cow::Borrowed("STB_LOCAL"),
        STB_GLOBAL => Cow::Borrowed("STB_GLOBAL"),
        STB_WEAK => Cow::Borrowed("STB_WEAK"),
        STB_GNU_UNIQUE => Cow::Borrowed("STB_GNU_UNIQUE"),
        value => Cow::Owned(format!("Unknown({value})")),
    }
}

/// Label for a symbol's type (low nibble of `st_info`).
pub fn symbol_type(sym_type: u8) -> Cow<'static, str> {
    match sym_type {
        STT_NOTYPE => Cow::Borrowed("STT_NOTYPE"),
        STT_OBJECT => Cow::Borrowed("STT_OBJECT"),
        STT_FUNC => Cow::Borrowed("STT_FUNC"),
        STT_SECTION => Cow::Borrowed("STT_SECTION"),
        STT_FILE => Cow::Borrowed("STT_FILE"),
        STT_COMMON => Cow::Borrowed("STT_COMMON"),
        STT_TLS => Cow::Borrowed("STT_TLS"),
        STT_GNU_IFUNC => Cow::Borrowed("STT_GNU_IFUNC"),
        value => Cow::Owned(format!("Unknown({value})")),
    }
}

/// Label for a symbol's visibility (low 2 bits of `st_other`).
pub fn symbol_visibility(visibility: u8) -> Cow<'static, str> {
    match visibility {
        STV_DEFAULT => Cow::Borrowed("STV_DEFAULT"),
        STV_INTERNAL => Cow::Borrowed("STV_INTERNAL"),
        STV_HIDDEN => Cow::Borrowed("STV_HIDDEN"),
        STV_PROTECTED => Cow::Borrowed("STV_PROTECTED"),
        value => Cow::Owned(format!("Unknown({value})")),
    }
}
