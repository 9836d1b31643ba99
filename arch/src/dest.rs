use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

/// Destination field `d1 d2 d3`. The discriminant is the field value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[repr(u8)]
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null,
    M,
    D,
    MD,
    A,
    AM,
    AD,
    AMD,
}

impl Dest {
    /// Parse a mnemonic written before `=`. `null` is not writable in source.
    pub fn parse(s: &str) -> Option<Self> {
        match s.parse::<Self>() {
            Ok(Dest::Null) | Err(_) => None,
            Ok(dest) => Some(dest),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Dest::parse("M"), Some(Dest::M));
    assert_eq!(Dest::parse("AMD").map(Dest::bits), Some(0b111));
    assert_eq!(Dest::parse("MD").map(Dest::bits), Some(0b011));
    assert_eq!(Dest::parse("AD").map(Dest::bits), Some(0b110));
    assert!(Dest::parse("null").is_none());
    assert!(Dest::parse("DM").is_none());
    assert!(Dest::parse("").is_none());
    assert_eq!(Dest::from(0b101), Dest::AM);
    assert_eq!(Dest::Null.bits(), 0);
}
