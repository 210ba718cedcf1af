//! Dumps the ELF header and the program header table of a file.

use elf_dump::{Elf, ElfFile, fmt};
use std::process::exit;

fn main() {
    env_logger::init();
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: dump_program_header <ELF file>");
            exit(1);
        }
    };
    let file = ElfFile::from_path(&path).unwrap_or_else(|err| {
        eprintln!("{path}: {err}");
        exit(1);
    });
    let elf = Elf::parse(file.bytes()).unwrap_or_else(|err| {
        eprintln!("{path}: {err}");
        exit(1);
    });

    let ehdr = elf.header();
    println!("Class: {}", fmt::class(ehdr.ident.class));
    println!("Data: {}", fmt::data_encoding(ehdr.encoding().ei_data()));
    println!("OS/ABI: {}", fmt::os_abi(ehdr.ident.osabi));
    println!("Type: {}", fmt::file_type(ehdr.e_type));
    println!("Machine: {}", fmt::machine(ehdr.e_machine));
    println!("Entry point: {:#x}", ehdr.e_entry);
    println!(
        "Program headers: {} entries of {} bytes at {:#x}",
        ehdr.e_phnum, ehdr.e_phentsize, ehdr.e_phoff
    );
    println!(
        "Section headers: {} entries of {} bytes at {:#x}",
        ehdr.e_shnum, ehdr.e_shentsize, ehdr.e_shoff
    );
    println!();

    for phdr in elf.program_headers() {
        println!("Type: {}", fmt::segment_type(phdr.p_type));
        println!("Flags: {}", phdr.flags());
        println!("Offset: {:#x}", phdr.p_offset);
        println!("Virtual address: {:#x}", phdr.p_vaddr);
        println!("Physical address: {:#x}", phdr.p_paddr);
        println!("File size: {:#x}", phdr.p_filesz);
        println!("Memory size: {:#x}", phdr.p_memsz);
        println!("Alignment: {:#x}", phdr.p_align);
        println!();
    }
}
