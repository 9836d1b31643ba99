use color_print::cprintln;
use thiserror::Error;

use crate::msg::Msg;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown dest: `{0}`")]
    UnknownDest(String),

    #[error("Unknown comp: `{0}`")]
    UnknownComp(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Missing address after `@`")]
    MissingReference,

    #[error("Empty label name")]
    EmptyLabel,

    #[error("Address out of range: `{0}` (max 32767)")]
    AddressOutOfRange(String),

    #[error("No free RAM left for variable `{0}`")]
    VariableSpaceExhausted(String),

    #[error("No ROM address left for label `{0}` (max 32767)")]
    RomExhausted(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    /// Print error with the source line it came from
    pub fn print_diag(&self, file: &str, raw: &[&str], line_idx: usize) {
        Msg::Error(self.to_string()).print(file, raw, line_idx);
    }

    /// Print error that has no source location
    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self);
        if let Some(source) = std::error::Error::source(self) {
            cprintln!("  <blue>caused by</>: {}", source);
        }
    }
}
