//! Hack assembler: `.asm` source to `.hack` binary text.
//!
//! The pipeline is preprocess -> parse -> resolve (labels, then variables)
//! -> encode. Any error aborts the run; nothing partial is returned.
//!
//! ```
//! let asm = hackasm::assemble("@2\nD=A\n@3\nD=D+A\n@0\nM=D").unwrap();
//! assert_eq!(asm.to_hack().lines().count(), 6);
//! ```

pub mod encoder;
pub mod error;
pub mod ident;
pub mod msg;
pub mod parser;
pub mod preprocess;
pub mod resolver;
pub mod util;

use arch::inst::Inst;
use std::path::{Path, PathBuf};

use crate::{error::Error, ident::SymbolTable, msg::Msg, parser::Stmt, preprocess::Line};

pub const OUTPUT_EXTENSION: &str = "hack";

pub struct Assembly {
    pub stmts: Vec<(Line, Stmt)>,
    pub symbols: SymbolTable,
    /// One entry per ROM word: (source line, instruction)
    pub code: Vec<(usize, Inst)>,
    pub warnings: Vec<(usize, Msg)>,
}

impl Assembly {
    /// One 16 character line per word, no trailing newline.
    pub fn to_hack(&self) -> String {
        self.code
            .iter()
            .map(|(_, inst)| inst.to_bin_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Errors are `(0-based source line, error)`.
pub fn assemble(source: &str) -> Result<Assembly, Vec<(usize, Error)>> {
    let lines = preprocess::clean_source(source);
    let stmts = parser::parse_lines(lines)?;
    let (symbols, warnings) = resolver::resolve(&stmts)?;
    let code = encoder::encode_all(&stmts, &symbols)?;
    Ok(Assembly {
        stmts,
        symbols,
        code,
        warnings,
    })
}

pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}
