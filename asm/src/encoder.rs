use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump};

use crate::{
    error::Error,
    ident::SymbolTable,
    parser::{Stmt, Target},
    preprocess::Line,
};

/// Labels encode to nothing.
pub fn encode(stmt: &Stmt, table: &SymbolTable) -> Result<Option<Inst>, Error> {
    match stmt {
        Stmt::Label(_) => Ok(None),
        Stmt::Address(target) => resolve_target(target, table).map(|addr| Some(Inst::A(addr))),
        Stmt::Compute { dest, comp, jump } => {
            let comp = Comp::parse(comp).ok_or_else(|| Error::UnknownComp(comp.clone()))?;
            let dest = match dest {
                Some(d) => Dest::parse(d).ok_or_else(|| Error::UnknownDest(d.clone()))?,
                None => Dest::Null,
            };
            let jump = match jump {
                Some(j) => Jump::parse(j).ok_or_else(|| Error::UnknownJump(j.clone()))?,
                None => Jump::Null,
            };
            Ok(Some(Inst::C { comp, dest, jump }))
        }
    }
}

fn resolve_target(target: &Target, table: &SymbolTable) -> Result<u16, Error> {
    match target {
        Target::Literal(v) => Ok(*v),
        Target::Symbol(name) => table
            .get_val(name)
            .ok_or_else(|| Error::UndefinedSymbol(name.clone())),
    }
}

/// Encode the whole program. Returns `(source line, instruction)` per ROM word.
pub fn encode_all(
    stmts: &[(Line, Stmt)],
    table: &SymbolTable,
) -> Result<Vec<(usize, Inst)>, Vec<(usize, Error)>> {
    let mut code = vec![];
    let mut errors = vec![];
    for (line, stmt) in stmts {
        match encode(stmt, table) {
            Ok(Some(inst)) => code.push((line.idx, inst)),
            Ok(None) => {}
            Err(err) => errors.push((line.idx, err)),
        }
    }
    if errors.is_empty() {
        Ok(code)
    } else {
        Err(errors)
    }
}

#[test]
fn test() {
    let table = SymbolTable::new();
    let bin = |code: &str| {
        encode(&Stmt::parse(code).unwrap(), &table)
            .unwrap()
            .map(|inst| inst.to_bin_str())
    };

    assert_eq!(bin("@R3"), bin("@3"));
    assert_eq!(bin("@SCREEN").unwrap(), "0100000000000000");
    assert_eq!(bin("D=A").unwrap(), "1110110000010000");
    assert_eq!(bin("D;JGT").unwrap(), "1110001100000001");
    assert_eq!(bin("AMD=D+1").unwrap(), "1110011111111000");
    assert_eq!(bin("M=M+1").unwrap(), "1111110111001000");
    assert_eq!(bin("(LOOP)"), None);

    let err = |code: &str| encode(&Stmt::parse(code).unwrap(), &table).unwrap_err();
    assert!(matches!(err("D=Q"), Error::UnknownComp(c) if c == "Q"));
    assert!(matches!(err("X=D"), Error::UnknownDest(d) if d == "X"));
    assert!(matches!(err("D;JXX"), Error::UnknownJump(j) if j == "JXX"));
    assert!(matches!(err("@nowhere"), Error::UndefinedSymbol(s) if s == "nowhere"));

    assert_eq!(err("D=Q").to_string(), "Unknown comp: `Q`");
    assert_eq!(err("DM=1").to_string(), "Unknown dest: `DM`");
    assert_eq!(err("0;jmp").to_string(), "Unknown jump: `jmp`");
}
