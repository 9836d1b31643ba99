pub const COMMENT: &str = "//";

/// A source line reduced to its instruction text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 0-based line number in the source file
    pub idx: usize,
    pub text: String,
}

/// Drop the comment and every whitespace character. `None` for blank lines.
pub fn clean(raw: &str) -> Option<String> {
    let code = raw.split_once(COMMENT).map_or(raw, |(code, _)| code);
    let text: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn clean_source(source: &str) -> Vec<Line> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| clean(raw).map(|text| Line { idx, text }))
        .collect()
}

#[test]
fn test() {
    assert_eq!(clean("  @R0  // load R0"), Some("@R0".to_string()));
    assert_eq!(clean("\tD = D + A\t"), Some("D=D+A".to_string()));
    assert_eq!(clean("// only a comment"), None);
    assert_eq!(clean("   "), None);
    assert_eq!(clean("0;JMP//no space"), Some("0;JMP".to_string()));
    assert_eq!(clean("(END) // a // b"), Some("(END)".to_string()));

    let lines = clean_source("// header\n\n@2\r\n  D=A // two\n");
    assert_eq!(
        lines,
        vec![
            Line { idx: 2, text: "@2".to_string() },
            Line { idx: 3, text: "D=A".to_string() },
        ]
    );
}
