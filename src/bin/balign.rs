use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;

use blockalign::{align, align_columns, align_equals};

/// Aligns the columns or the `=` signs of a block of text.
///
/// balign reads a block of lines from stdin or files and writes it back with
/// normalized spacing: whitespace-separated columns padded to a common
/// width, or assignment statements' `=` signs lined up in one column. Handy
/// as a shell filter from any editor that can pipe a selection through a
/// command.
#[derive(Parser, Debug)]
#[command(name = "balign")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Which aligner to apply.
    #[arg(short, long, value_enum, default_value = "auto")]
    mode: ModeArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Columns when the input has no `=`, equals otherwise.
    Auto,
    /// Force whitespace-column alignment.
    Columns,
    /// Force `=`-sign alignment.
    Equals,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("balign: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let input = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input files, and stdin is a terminal".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let mut combined = String::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            combined.push_str(&content);
        }
        combined
    };

    // Align
    let output = match args.mode {
        ModeArg::Auto => align(&input)?,
        ModeArg::Columns => align_columns(&input),
        ModeArg::Equals => align_equals(&input),
    };

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}
