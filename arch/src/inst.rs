use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;
use std::fmt::Display;

const C_PREFIX: u16 = 0b111 << 13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    A(u16),
    C { comp: Comp, dest: Dest, jump: Jump },
}

impl Inst {
    /// `0vvv vvvv vvvv vvvv` or `111a cccc ccdd djjj`
    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(addr) => *addr,
            Inst::C { comp, dest, jump } => {
                C_PREFIX | comp.to_bin() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::A(bin));
        }
        if bin & C_PREFIX != C_PREFIX {
            return None;
        }
        let comp = Comp::from_bin((bin >> 6) & 0x7F)?;
        let dest = Dest::from(((bin >> 3) & 0b111) as u8);
        let jump = Jump::from((bin & 0b111) as u8);
        Some(Inst::C { comp, dest, jump })
    }

    /// One line of the `.hack` text format.
    pub fn to_bin_str(&self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::A(addr) => cformat!("<y>@{}</>", addr),
            Inst::C { comp, dest, jump } => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => cformat!("<blue>{}</>=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => cformat!(";<green>{}</>", j),
                };
                cformat!("{}<red>{}</>{}", dest, comp, jump)
            }
        }
    }
}

impl Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::A(addr) => write!(f, "@{}", addr),
            Inst::C { comp, dest, jump } => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

#[test]
fn test() {
    let c = |dest: Option<&str>, comp: &str, jump: Option<&str>| Inst::C {
        comp: Comp::parse(comp).unwrap(),
        dest: dest.map(|d| Dest::parse(d).unwrap()).unwrap_or_default(),
        jump: jump.map(|j| Jump::parse(j).unwrap()).unwrap_or_default(),
    };

    assert_eq!(Inst::A(2).to_bin_str(), "0000000000000010");
    assert_eq!(Inst::A(0x7FFF).to_bin_str(), "0111111111111111");
    assert_eq!(c(Some("D"), "A", None).to_bin_str(), "1110110000010000");
    assert_eq!(c(Some("D"), "D+A", None).to_bin_str(), "1110000010010000");
    assert_eq!(c(Some("M"), "D", None).to_bin_str(), "1110001100001000");
    assert_eq!(c(None, "0", Some("JMP")).to_bin_str(), "1110101010000111");
    assert_eq!(c(None, "D", Some("JGT")).to_bin_str(), "1110001100000001");
    assert_eq!(c(Some("AMD"), "D+1", None).to_bin_str(), "1110011111111000");
    assert_eq!(c(Some("AM"), "M-1", None).to_bin_str(), "1111110010101000");

    let inst = c(Some("MD"), "D|M", Some("JNE"));
    assert_eq!(inst.to_string(), "MD=D|M;JNE");
    assert_eq!(Inst::from_bin(inst.to_bin()), Some(inst));
    assert_eq!(Inst::from_bin(0b0000000000010000), Some(Inst::A(16)));
    // 10x prefix is not an instruction
    assert_eq!(Inst::from_bin(0b1010110000010000), None);
}
