use once_cell::sync::Lazy;

/// First RAM address handed out to user variables.
pub const VAR_BASE: u16 = 16;

/// Screen memory map
pub const SCREEN: u16 = 0x4000;

/// Keyboard memory map
pub const KBD: u16 = 0x6000;

/// Largest value an A-instruction can carry (15 bit).
pub const ADDR_MAX: u16 = 0x7FFF;

// Declaration order is kept so listings print them as R0..R15, SP.., SCREEN, KBD.
pub static PREDEFINED: Lazy<Vec<(String, u16)>> = Lazy::new(|| {
    let mut symbols: Vec<(String, u16)> = (0..16).map(|i| (format!("R{}", i), i)).collect();
    symbols.push(("SP".to_string(), 0));
    symbols.push(("LCL".to_string(), 1));
    symbols.push(("ARG".to_string(), 2));
    symbols.push(("THIS".to_string(), 3));
    symbols.push(("THAT".to_string(), 4));
    symbols.push(("SCREEN".to_string(), SCREEN));
    symbols.push(("KBD".to_string(), KBD));
    symbols
});

pub fn predefined(name: &str) -> Option<u16> {
    PREDEFINED
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, val)| *val)
}

#[test]
fn test() {
    assert_eq!(PREDEFINED.len(), 23);
    assert_eq!(predefined("R0"), Some(0));
    assert_eq!(predefined("SP"), Some(0));
    assert_eq!(predefined("R15"), Some(15));
    assert_eq!(predefined("THAT"), Some(4));
    assert_eq!(predefined("SCREEN"), Some(16384));
    assert_eq!(predefined("KBD"), Some(24576));
    assert_eq!(predefined("R16"), None);
    assert_eq!(predefined("sp"), None);
}
