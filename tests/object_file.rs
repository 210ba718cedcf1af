//! Decodes a real ELF relocatable object emitted by the `object` crate
//! and checks the records against what was written into it.

use elf_dump::abi::{ET_REL, SHT_SYMTAB, STB_GLOBAL, STT_FUNC};
use elf_dump::{Elf, fmt};
use object::write::{Object, Symbol, SymbolSection};
use object::{
    Architecture, BinaryFormat, Endianness, SectionKind, SymbolFlags, SymbolKind, SymbolScope,
};

fn build_object() -> Vec<u8> {
    let mut obj = Object::new(BinaryFormat::Elf, Architecture::X86_64, Endianness::Little);
    let text = obj.add_section(Vec::new(), b".text".to_vec(), SectionKind::Text);
    // ret
    obj.append_section_data(text, &[0xc3], 16);
    obj.add_symbol(Symbol {
        name: b"callee".to_vec(),
        value: 0,
        size: 1,
        kind: SymbolKind::Text,
        scope: SymbolScope::Linkage,
        weak: false,
        section: SymbolSection::Section(text),
        flags: SymbolFlags::None,
    });
    obj.write().expect("emit ELF object")
}

#[test]
fn real_relocatable_object_decodes() {
    let bytes = build_object();
    let elf = Elf::parse(&bytes).unwrap();

    assert_eq!(elf.header().e_type, ET_REL);
    assert_eq!(fmt::machine(elf.header().e_machine), "AMD x86-64");

    let names: Vec<_> = elf
        .section_headers()
        .iter()
        .filter_map(|shdr| elf.section_name(shdr))
        .collect();
    assert!(names.contains(&".text"), "section names: {names:?}");
    assert!(names.contains(&".symtab"), "section names: {names:?}");
    assert!(
        elf.section_headers()
            .iter()
            .any(|shdr| shdr.sh_type == SHT_SYMTAB)
    );

    let symbols = elf.symbols().unwrap();
    let callee = symbols
        .iter()
        .find(|symbol| symbol.name == Some("callee"))
        .expect("the written symbol");
    assert_eq!(callee.sym.st_bind(), STB_GLOBAL);
    assert_eq!(callee.sym.st_type(), STT_FUNC);
    assert_eq!(callee.sym.st_size, 1);
    assert!(!callee.sym.is_undef());
}
