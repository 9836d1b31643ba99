use hackasm::assemble;
use hackasm::error::Error;
use hackasm::ident::Ident;
use hackasm::msg::Msg;

fn hack(code: &str) -> Vec<String> {
    println!("{}", code);
    let asm = match assemble(code) {
        Ok(asm) => asm,
        Err(errors) => panic!("Errors found: {:?}", errors),
    };
    let out = asm.to_hack();
    println!("{}", out);
    out.lines().map(str::to_string).collect()
}

fn errors(code: &str) -> Vec<(usize, Error)> {
    match assemble(code) {
        Ok(asm) => panic!("Expected errors, got:\n{}", asm.to_hack()),
        Err(errors) => errors,
    }
}

macro_rules! case {
    ($name:ident, $code:expr, [$($bin:expr),* $(,)?]) => {
        #[test]
        fn $name() {
            assert_eq!(hack($code), vec![$($bin.to_string()),*]);
        }
    };
}

case!(
    add_two_constants,
    "@2\nD=A\n@3\nD=D+A\n@0\nM=D",
    [
        "0000000000000010",
        "1110110000010000",
        "0000000000000011",
        "1110000010010000",
        "0000000000000000",
        "1110001100001000",
    ]
);

case!(
    forward_label,
    "@LOOP\n0;JMP\n(LOOP)\n@0\nM=1",
    [
        "0000000000000010",
        "1110101010000111",
        "0000000000000000",
        "1110111111001000",
    ]
);

case!(predefined_register, "@R3", ["0000000000000011"]);
case!(predefined_zero, "@SP\n@R0", ["0000000000000000", "0000000000000000"]);
case!(predefined_pointers, "@LCL\n@ARG\n@THIS\n@THAT", [
    "0000000000000001",
    "0000000000000010",
    "0000000000000011",
    "0000000000000100",
]);
case!(predefined_io, "@SCREEN\n@KBD", ["0100000000000000", "0110000000000000"]);
case!(max_literal, "@32767", ["0111111111111111"]);

case!(
    comments_and_blanks,
    "// Adds 1 + 1\n\n   @1 // one\n\tD = A\n// end\n",
    ["0000000000000001", "1110110000010000"]
);

case!(
    dest_jump_combined,
    "AMD=D+1;JMP\nMD=M-1\nD;JGT\nAM=!M;JLE",
    [
        "1110011111111111",
        "1111110010011000",
        "1110001100000001",
        "1111110001101110",
    ]
);

case!(
    variables_in_first_use_order,
    "@i\nM=1\n@sum\nM=0\n@i\nD=M\n@count",
    [
        "0000000000010000",
        "1110111111001000",
        "0000000000010001",
        "1110101010001000",
        "0000000000010000",
        "1111110000010000",
        "0000000000010010",
    ]
);

// Repeated label declarations keep the first address
case!(
    redeclared_label,
    "(A)\n@A\n0;JMP\n(A)\n@A",
    ["0000000000000000", "1110101010000111", "0000000000000000"]
);

// Labels are counted out of the PC even when re-declared
case!(
    label_after_redeclared_label,
    "(A)\n@0\n(A)\n(B)\n@B",
    ["0000000000000000", "0000000000000001"]
);

#[test]
fn r3_matches_literal() {
    assert_eq!(hack("@R3"), hack("@3"));
}

#[test]
fn label_takes_no_room() {
    let asm = assemble("@1\n(FIRST)\n(SECOND)\nD=A\n(END)\n@END\n0;JMP").unwrap();
    assert_eq!(asm.code.len(), 4);
    assert_eq!(asm.symbols.get_val("FIRST"), Some(1));
    assert_eq!(asm.symbols.get_val("SECOND"), Some(1));
    assert_eq!(asm.symbols.get_val("END"), Some(2));
}

#[test]
fn label_is_not_a_variable() {
    // @END is seen before (END) but must not take RAM slot 16
    let asm = assemble("@END\n0;JMP\n@x\nM=0\n(END)\n@END").unwrap();
    assert_eq!(asm.symbols.get("END").map(|e| e.1), Some(Ident::Label));
    assert_eq!(asm.symbols.get_val("END"), Some(4));
    assert_eq!(asm.symbols.get_val("x"), Some(16));
    assert_eq!(asm.symbols.next_variable(), 17);
}

#[test]
fn variable_reuse() {
    let asm = assemble("@a\n@b\n@a\n@c\n@b").unwrap();
    assert_eq!(asm.symbols.get_val("a"), Some(16));
    assert_eq!(asm.symbols.get_val("b"), Some(17));
    assert_eq!(asm.symbols.get_val("c"), Some(18));
    let addrs: Vec<u16> = asm.code.iter().map(|(_, inst)| inst.to_bin()).collect();
    assert_eq!(addrs, vec![16, 17, 16, 18, 17]);
}

#[test]
fn deterministic() {
    let code = "@i\nM=1\n(LOOP)\n@i\nD=M\n@100\nD=D-A\n@END\nD;JGT\n@i\nM=M+1\n@LOOP\n0;JMP\n(END)\n@END\n0;JMP";
    assert_eq!(hack(code), hack(code));
    assert_eq!(assemble(code).unwrap().to_hack(), assemble(code).unwrap().to_hack());
}

#[test]
fn no_trailing_newline() {
    let out = assemble("@1\n@2\n").unwrap().to_hack();
    assert_eq!(out, "0000000000000001\n0000000000000010");
}

#[test]
fn empty_source() {
    assert_eq!(assemble("// nothing\n\n").unwrap().to_hack(), "");
}

#[test]
fn redeclared_label_warns() {
    let asm = assemble("(A)\n@0\n(A)\n@A").unwrap();
    assert_eq!(
        asm.warnings[0],
        (2, Msg::Warn("Re-defined label: `A`".to_string()))
    );
    assert!(matches!(asm.warnings[1], (0, Msg::Note(_))));
}

#[test]
fn label_shadowing_predefined() {
    let asm = assemble("@0\n(R1)\n@R1").unwrap();
    assert_eq!(asm.symbols.get_val("R1"), Some(1));
    assert_eq!(asm.warnings.len(), 2);
}

#[test]
fn unknown_comp_aborts() {
    let errs = errors("@1\nD=Q");
    assert_eq!(errs.len(), 1);
    assert!(matches!(&errs[0], (1, Error::UnknownComp(c)) if c == "Q"));
}

#[test]
fn unknown_dest_and_jump() {
    let errs = errors("// header\nDA=1\n@0\n0;JUMP");
    assert_eq!(errs.len(), 2);
    assert!(matches!(&errs[0], (1, Error::UnknownDest(d)) if d == "DA"));
    assert!(matches!(&errs[1], (3, Error::UnknownJump(j)) if j == "JUMP"));
}

#[test]
fn operand_order_matters() {
    assert!(matches!(&errors("D=A+D")[0], (0, Error::UnknownComp(_))));
    assert!(matches!(&errors("D=M+D")[0], (0, Error::UnknownComp(_))));
}

#[test]
fn syntax_errors() {
    let errs = errors("@\n()\n@40000");
    assert_eq!(errs.len(), 3);
    assert!(matches!(errs[0], (0, Error::MissingReference)));
    assert!(matches!(errs[1], (1, Error::EmptyLabel)));
    assert!(matches!(errs[2], (2, Error::AddressOutOfRange(_))));
}

#[test]
fn output_path() {
    use std::path::Path;
    assert_eq!(
        hackasm::output_path(Path::new("prog/Max.asm")),
        Path::new("prog/Max.hack")
    );
    assert_eq!(hackasm::output_path(Path::new("Add")), Path::new("Add.hack"));
}

#[test]
fn label_past_rom() {
    let code = format!("{}(END)\n@END", "@0\n".repeat(32768));
    let errs = errors(&code);
    assert_eq!(errs.len(), 1);
    assert!(matches!(&errs[0], (32768, Error::RomExhausted(name)) if name == "END"));

    // Would wrap to 0 in 16 bits
    let code = format!("{}(WRAP)\n@WRAP", "@0\n".repeat(65536));
    assert!(matches!(&errors(&code)[0], (65536, Error::RomExhausted(_))));
}

#[test]
fn label_at_last_rom_address() {
    let code = format!("{}(LAST)\n0;JMP", "@0\n".repeat(32767));
    let asm = assemble(&code).unwrap();
    assert_eq!(asm.symbols.get_val("LAST"), Some(32767));
    assert_eq!(asm.code.len(), 32768);
}
