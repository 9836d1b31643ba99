use color_print::cformat;
use std::collections::HashMap;

use crate::{
    ident::{Ident, SymbolTable},
    Assembly,
};

/// Source listing: `[PC] binary | line: code`
pub fn print_dump(path: &str, raw: &[&str], asm: &Assembly) {
    let words: HashMap<usize, (usize, &arch::inst::Inst)> = asm
        .code
        .iter()
        .enumerate()
        .map(|(pc, (line_idx, inst))| (*line_idx, (pc, inst)))
        .collect();

    println!(
        "{}+------[{}]{}",
        "-".repeat(23),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );
    for (idx, line) in raw.iter().enumerate() {
        let line_num = idx + 1;
        let body = match words.get(&idx) {
            Some((pc, inst)) => format!(
                "[{:04X}] {} | {:>4}:   {}",
                pc,
                inst.to_bin_str(),
                line_num,
                inst.cformat()
            ),
            None => {
                let text = line.trim();
                let text = if text.starts_with('(') {
                    cformat!("<g>{}</>", text)
                } else {
                    cformat!("<dim>{}</>", text)
                };
                format!("{:23}| {:>4}: {}", "", line_num, text)
            }
        };
        println!("{}", body);
    }
    println!("-----------------------+-----------------------------------------------------");
}

/// Labels and variables with their addresses
pub fn print_symbols(symbols: &SymbolTable) {
    println!("Symbols:");
    for (name, (line_idx, ident, val)) in symbols.iter() {
        let name = match ident {
            Ident::Predefined => continue,
            Ident::Label => cformat!("<g>({})</>", name),
            Ident::Variable => cformat!("<c>@{}</>", name),
        };
        let line = line_idx
            .map(|idx| format!("{}", idx + 1))
            .unwrap_or_default();
        println!("  0x{:04X} {:>6} | {:>4}: {}", val, val, line, name);
    }
    println!("  next free RAM: 0x{:04X}", symbols.next_variable());
}
