use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

/// Jump field `j1 j2 j3`. The discriminant is the field value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        match s.parse::<Self>() {
            Ok(Jump::Null) | Err(_) => None,
            Ok(jump) => Some(jump),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse("JGT").map(Jump::bits), Some(0b001));
    assert_eq!(Jump::parse("JEQ").map(Jump::bits), Some(0b010));
    assert_eq!(Jump::parse("JLT").map(Jump::bits), Some(0b100));
    assert_eq!(Jump::parse("JMP").map(Jump::bits), Some(0b111));
    assert!(Jump::parse("jmp").is_none());
    assert!(Jump::parse("null").is_none());
    assert_eq!(Jump::from(0b110), Jump::JLE);
}
