use arch::symbol::ADDR_MAX;

use crate::{error::Error, preprocess::Line};

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Address(Target),
    Compute {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
    },
    Label(String),
}

impl Stmt {
    pub fn parse(text: &str) -> Result<Stmt, Error> {
        // @value
        if let Some(reference) = text.strip_prefix('@') {
            return Target::parse(reference).map(Stmt::Address);
        }

        // (LABEL)
        if let Some(name) = text.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            if name.is_empty() {
                return Err(Error::EmptyLabel);
            }
            return Ok(Stmt::Label(name.to_string()));
        }

        // dest=comp;jump
        let (dest, rest) = match text.split_once('=') {
            Some((dest, rest)) => (Some(dest.to_string()), rest),
            None => (None, text),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump.to_string())),
            None => (rest, None),
        };
        Ok(Stmt::Compute {
            dest,
            comp: comp.to_string(),
            jump,
        })
    }

    /// Labels take no room in ROM.
    pub fn is_code(&self) -> bool {
        !matches!(self, Stmt::Label(_))
    }
}

// ----------------------------------------------------------------------------
// Address operand

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Literal(u16),
    Symbol(String),
}

impl Target {
    fn parse(s: &str) -> Result<Target, Error> {
        if s.is_empty() {
            return Err(Error::MissingReference);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return match s.parse::<u16>() {
                Ok(v) if v <= ADDR_MAX => Ok(Target::Literal(v)),
                _ => Err(Error::AddressOutOfRange(s.to_string())),
            };
        }
        Ok(Target::Symbol(s.to_string()))
    }
}

// ----------------------------------------------------------------------------

/// Classify every cleaned line. All malformed lines are reported together.
pub fn parse_lines(lines: Vec<Line>) -> Result<Vec<(Line, Stmt)>, Vec<(usize, Error)>> {
    let mut stmts = vec![];
    let mut errors = vec![];
    for line in lines {
        match Stmt::parse(&line.text) {
            Ok(stmt) => stmts.push((line, stmt)),
            Err(err) => errors.push((line.idx, err)),
        }
    }
    if errors.is_empty() {
        Ok(stmts)
    } else {
        Err(errors)
    }
}

#[test]
fn test() {
    let compute = |dest: Option<&str>, comp: &str, jump: Option<&str>| Stmt::Compute {
        dest: dest.map(str::to_string),
        comp: comp.to_string(),
        jump: jump.map(str::to_string),
    };

    assert_eq!(Stmt::parse("@21").unwrap(), Stmt::Address(Target::Literal(21)));
    assert_eq!(
        Stmt::parse("@i").unwrap(),
        Stmt::Address(Target::Symbol("i".to_string()))
    );
    assert_eq!(
        Stmt::parse("@-1").unwrap(),
        Stmt::Address(Target::Symbol("-1".to_string()))
    );
    assert_eq!(
        Stmt::parse("(LOOP)").unwrap(),
        Stmt::Label("LOOP".to_string())
    );
    assert_eq!(Stmt::parse("D=M").unwrap(), compute(Some("D"), "M", None));
    assert_eq!(Stmt::parse("D;JGT").unwrap(), compute(None, "D", Some("JGT")));
    assert_eq!(
        Stmt::parse("AMD=D+1;JMP").unwrap(),
        compute(Some("AMD"), "D+1", Some("JMP"))
    );
    assert_eq!(Stmt::parse("D=Q").unwrap(), compute(Some("D"), "Q", None));

    assert!(matches!(Stmt::parse("@"), Err(Error::MissingReference)));
    assert!(matches!(Stmt::parse("()"), Err(Error::EmptyLabel)));
    assert!(matches!(Stmt::parse("@32767"), Ok(_)));
    assert!(matches!(Stmt::parse("@32768"), Err(Error::AddressOutOfRange(_))));
    assert!(matches!(Stmt::parse("@99999"), Err(Error::AddressOutOfRange(_))));

    assert!(!Stmt::parse("(END)").unwrap().is_code());
    assert!(Stmt::parse("0;JMP").unwrap().is_code());
}
