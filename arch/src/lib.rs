//! Hack machine definitions: predefined symbols, the compute / dest / jump
//! field tables and the 16-bit instruction word.

pub mod comp;
pub mod dest;
pub mod inst;
pub mod jump;
pub mod symbol;
