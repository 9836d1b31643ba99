use arch::symbol::VAR_BASE;
use color_print::cprintln;
use hackasm::{error::Error, util};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (`.asm`). Output goes next to it as `.hack`
    input: PathBuf,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Dump resolved labels and variables
    #[clap(short, long)]
    symbols: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    println!("1. Read File");
    let path = args.input.display().to_string();
    println!("  < {}", path);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(err) => {
            Error::FileOpen(path, err).print();
            std::process::exit(1);
        }
    };
    let raw: Vec<&str> = source.lines().collect();

    println!("2. Resolve Symbols & Generate Binary");
    let asm = match hackasm::assemble(&source) {
        Ok(asm) => asm,
        Err(errors) => {
            for (line_idx, err) in &errors {
                err.print_diag(&path, &raw, *line_idx);
            }
            cprintln!(
                "<red,bold>error</>: aborting due to {} previous error(s)",
                errors.len()
            );
            std::process::exit(1);
        }
    };
    for (line_idx, msg) in &asm.warnings {
        msg.print(&path, &raw, *line_idx);
    }
    println!(
        "  {} words, {} variables",
        asm.code.len(),
        asm.symbols.next_variable() - VAR_BASE
    );

    let output = hackasm::output_path(&args.input);
    let out_path = output.display().to_string();
    println!("3. Write Binary");
    println!("  > {}", out_path);
    if let Err(err) = std::fs::write(&output, asm.to_hack()) {
        Error::FileWrite(out_path, err).print();
        std::process::exit(1);
    }

    if args.dump {
        util::print_dump(&path, &raw, &asm);
    }
    if args.symbols {
        util::print_symbols(&asm.symbols);
    }
}
