use arch::symbol::{ADDR_MAX, PREDEFINED, VAR_BASE};
use indexmap::IndexMap;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ident {
    Predefined,
    Label,
    Variable,
}

/// Where the name was first bound (0-based source line), what it is, its address.
pub type Entry = (Option<usize>, Ident, u16);

/// One namespace for predefined symbols, labels and variables.
/// A name keeps the first address it was bound to.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: IndexMap<String, Entry>,
    next_variable: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let symbols = PREDEFINED
            .iter()
            .map(|(name, val)| (name.clone(), (None, Ident::Predefined, *val)))
            .collect();
        SymbolTable {
            symbols,
            next_variable: VAR_BASE,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.symbols.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|(_, _, val)| *val)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Bind `name` to `pc` unless it is taken.
    /// Returns the existing entry when the name was already bound.
    pub fn bind_label(&mut self, name: &str, line_idx: usize, pc: u16) -> Option<Entry> {
        if let Some(prev) = self.symbols.get(name) {
            return Some(*prev);
        }
        self.symbols
            .insert(name.to_string(), (Some(line_idx), Ident::Label, pc));
        None
    }

    /// Give `name` the next free RAM slot. A name already bound keeps its address.
    pub fn alloc_variable(&mut self, name: &str, line_idx: usize) -> Result<u16, Error> {
        if let Some(val) = self.get_val(name) {
            return Ok(val);
        }
        if self.next_variable > ADDR_MAX {
            return Err(Error::VariableSpaceExhausted(name.to_string()));
        }
        let addr = self.next_variable;
        self.symbols
            .insert(name.to_string(), (Some(line_idx), Ident::Variable, addr));
        self.next_variable += 1;
        Ok(addr)
    }

    pub fn next_variable(&self) -> u16 {
        self.next_variable
    }

    /// Entries in binding order: predefined first, then labels, then variables.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.symbols.iter()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test() {
    let mut table = SymbolTable::new();
    assert_eq!(table.get_val("SP"), Some(0));
    assert_eq!(table.get_val("KBD"), Some(24576));
    assert_eq!(table.next_variable(), 16);

    // Bound to 0 is still bound
    assert_eq!(table.bind_label("R0", 3, 7), Some((None, Ident::Predefined, 0)));
    assert_eq!(table.get_val("R0"), Some(0));

    assert_eq!(table.bind_label("LOOP", 4, 0), None);
    assert_eq!(table.bind_label("LOOP", 9, 5), Some((Some(4), Ident::Label, 0)));
    assert_eq!(table.get_val("LOOP"), Some(0));

    assert_eq!(table.alloc_variable("i", 1).unwrap(), 16);
    assert_eq!(table.alloc_variable("sum", 2).unwrap(), 17);
    assert_eq!(table.alloc_variable("i", 5).unwrap(), 16);
    assert_eq!(table.alloc_variable("LOOP", 6).unwrap(), 0);
    assert_eq!(table.next_variable(), 18);
    assert_eq!(table.get("sum"), Some(&(Some(2), Ident::Variable, 17)));
}

#[test]
fn exhausted() {
    let mut table = SymbolTable::new();
    table.next_variable = ADDR_MAX;
    assert_eq!(table.alloc_variable("last", 0).unwrap(), ADDR_MAX);
    assert!(matches!(
        table.alloc_variable("overflow", 0),
        Err(Error::VariableSpaceExhausted(_))
    ));
}
