use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt::Display;

// ALU control bits `c1..c6` when the second operand is A (a = 0)
static COMP_A: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, u8> = BiMap::new();
    map.insert("0", 0b101010);
    map.insert("1", 0b111111);
    map.insert("-1", 0b111010);
    map.insert("D", 0b001100);
    map.insert("A", 0b110000);
    map.insert("!D", 0b001101);
    map.insert("!A", 0b110001);
    map.insert("-D", 0b001111);
    map.insert("-A", 0b110011);
    map.insert("D+1", 0b011111);
    map.insert("A+1", 0b110111);
    map.insert("D-1", 0b001110);
    map.insert("A-1", 0b110010);
    map.insert("D+A", 0b000010);
    map.insert("D-A", 0b010011);
    map.insert("A-D", 0b000111);
    map.insert("D&A", 0b000000);
    map.insert("D|A", 0b010101);
    map
});

// ALU control bits when the second operand is M (a = 1)
static COMP_M: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, u8> = BiMap::new();
    map.insert("M", 0b110000);
    map.insert("!M", 0b110001);
    map.insert("-M", 0b110011);
    map.insert("M+1", 0b110111);
    map.insert("M-1", 0b110010);
    map.insert("D+M", 0b000010);
    map.insert("D-M", 0b010011);
    map.insert("M-D", 0b000111);
    map.insert("D&M", 0b000000);
    map.insert("D|M", 0b010101);
    map
});

fn table(a: bool) -> &'static BiMap<&'static str, u8> {
    if a {
        Lazy::force(&COMP_M)
    } else {
        Lazy::force(&COMP_A)
    }
}

/// Compute field: the `a` bit and the six ALU control bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comp {
    pub a: bool,
    pub bits: u8,
}

impl Comp {
    /// The `a` bit is decided by the expression alone: any `M` selects memory.
    pub fn parse(s: &str) -> Option<Comp> {
        let a = s.contains('M');
        table(a).get_by_left(s).map(|bits| Comp { a, bits: *bits })
    }

    pub fn mnemonic(&self) -> Option<&'static str> {
        table(self.a).get_by_right(&self.bits).copied()
    }

    /// `a c1 c2 c3 c4 c5 c6` as a 7 bit value.
    pub fn to_bin(&self) -> u16 {
        (self.a as u16) << 6 | self.bits as u16
    }

    pub fn from_bin(bin: u16) -> Option<Comp> {
        let comp = Comp {
            a: bin & 0b100_0000 != 0,
            bits: (bin & 0b11_1111) as u8,
        };
        comp.mnemonic().map(|_| comp)
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mnemonic() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "?{:07b}", self.to_bin()),
        }
    }
}

#[test]
fn test() {
    assert_eq!(COMP_A.len(), 18);
    assert_eq!(COMP_M.len(), 10);

    assert_eq!(Comp::parse("0"), Some(Comp { a: false, bits: 0b101010 }));
    assert_eq!(Comp::parse("D+A").map(|c| c.to_bin()), Some(0b0000010));
    assert_eq!(Comp::parse("D+M").map(|c| c.to_bin()), Some(0b1000010));
    assert_eq!(Comp::parse("M").map(|c| c.to_bin()), Some(0b1110000));
    assert_eq!(Comp::parse("A").map(|c| c.to_bin()), Some(0b0110000));
    assert_eq!(Comp::parse("!M").map(|c| c.to_bin()), Some(0b1110001));

    // Operand order is part of the mnemonic
    assert!(Comp::parse("A+D").is_none());
    assert!(Comp::parse("M+D").is_none());
    assert!(Comp::parse("Q").is_none());

    assert_eq!(Comp::from_bin(0b1000111).map(|c| c.to_string()), Some("M-D".to_string()));
    assert_eq!(Comp::from_bin(0b0000111).map(|c| c.to_string()), Some("A-D".to_string()));
    assert_eq!(Comp::from_bin(0b1111111), None);
}
