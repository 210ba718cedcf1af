//! Dumps every symbol table of a file, one labeled record per symbol.

use elf_dump::{Elf, ElfFile, fmt};
use std::process::exit;

fn main() {
    env_logger::init();
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: dump_symbol_table <ELF file>");
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
    let symbols = elf.symbols().unwrap_or_else(|err| {
        eprintln!("{path}: {err}");
        exit(1);
    });

    for symbol in &symbols {
        println!("Name: {}", symbol.name.unwrap_or("<corrupt>"));
        println!("Value: {:#x}", symbol.sym.st_value);
        println!("Size: {:#x}", symbol.sym.st_size);
        println!("Type: {}", fmt::symbol_type(symbol.sym.st_type()));
        println!("Binding: {}", fmt::symbol_bind(symbol.sym.st_bind()));
        println!(
            "Visibility: {}",
            fmt::symbol_visibility(symbol.sym.st_visibility())
        );
        println!("Section index: {}", symbol.sym.st_shndx);
        println!();
    }
}
