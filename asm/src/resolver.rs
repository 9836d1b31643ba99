use arch::symbol::ADDR_MAX;

use crate::{
    error::Error,
    ident::SymbolTable,
    msg::Msg,
    parser::{Stmt, Target},
    preprocess::Line,
};

/// Pass 1: bind every label to the PC of the instruction after it.
///
/// `idx` counts labels too, so the PC is `idx` minus the labels seen so far,
/// ignored re-declarations included.
/// A label that is already bound keeps its first address; the re-declaration
/// only produces a warning. A new label past the last ROM address is an error.
pub fn bind_labels(
    stmts: &[(Line, Stmt)],
    table: &mut SymbolTable,
) -> Result<Vec<(usize, Msg)>, (usize, Error)> {
    let mut msgs = vec![];
    let mut labels: usize = 0;
    for (idx, (line, stmt)) in stmts.iter().enumerate() {
        if let Stmt::Label(name) = stmt {
            let pc = idx - labels;
            if pc > ADDR_MAX as usize && !table.contains(name) {
                return Err((line.idx, Error::RomExhausted(name.clone())));
            }
            if let Some((prev, _, val)) = table.bind_label(name, line.idx, pc as u16) {
                msgs.push((line.idx, Msg::Warn(format!("Re-defined label: `{}`", name))));
                match prev {
                    Some(prev) => msgs.push((
                        prev,
                        Msg::Note(format!(
                            "Already bound here to 0x{:04X}. The later declaration is ignored.",
                            val
                        )),
                    )),
                    None => msgs.push((
                        line.idx,
                        Msg::Note(format!(
                            "`{}` is a predefined symbol (0x{:04X}). The label is ignored.",
                            name, val
                        )),
                    )),
                }
            }
            labels += 1;
        }
    }
    Ok(msgs)
}

/// Pass 2: give every unbound symbolic reference a RAM slot, in order of first use.
pub fn alloc_variables(
    stmts: &[(Line, Stmt)],
    table: &mut SymbolTable,
) -> Result<(), (usize, Error)> {
    for (line, stmt) in stmts {
        if let Stmt::Address(Target::Symbol(name)) = stmt {
            if table.contains(name) {
                continue;
            }
            table
                .alloc_variable(name, line.idx)
                .map_err(|err| (line.idx, err))?;
        }
    }
    Ok(())
}

/// Both passes, labels strictly first: a forward reference to a label must
/// never be taken for a variable.
pub fn resolve(
    stmts: &[(Line, Stmt)],
) -> Result<(SymbolTable, Vec<(usize, Msg)>), Vec<(usize, Error)>> {
    let mut table = SymbolTable::new();
    let msgs = bind_labels(stmts, &mut table).map_err(|err| vec![err])?;
    alloc_variables(stmts, &mut table).map_err(|err| vec![err])?;
    Ok((table, msgs))
}

#[test]
fn test() {
    let stmts = crate::parser::parse_lines(crate::preprocess::clean_source(
        "@n\n(LOOP)\n@LOOP\n@n\n@5\n(END)\n@m",
    ))
    .unwrap();

    let mut table = SymbolTable::new();
    assert!(bind_labels(&stmts, &mut table).unwrap().is_empty());
    assert_eq!(table.get_val("LOOP"), Some(1));
    assert_eq!(table.get_val("END"), Some(4));
    assert_eq!(table.get_val("n"), None);

    alloc_variables(&stmts, &mut table).unwrap();
    assert_eq!(table.get_val("n"), Some(16));
    assert_eq!(table.get_val("m"), Some(17));
    assert_eq!(table.get_val("5"), None);
    assert_eq!(table.next_variable(), 18);
}

#[test]
fn rom_exhausted() {
    let source = format!("{}(LAST)\n@0\n(END)\n@END", "@0\n".repeat(32767));
    let stmts =
        crate::parser::parse_lines(crate::preprocess::clean_source(&source)).unwrap();

    let mut table = SymbolTable::new();
    let err = bind_labels(&stmts, &mut table).unwrap_err();
    assert_eq!(table.get_val("LAST"), Some(ADDR_MAX));
    assert!(matches!(err, (32769, Error::RomExhausted(name)) if name == "END"));
}
