use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use bftape::Interpreter;
use clap::Parser;
use clap::error::ErrorKind;

/// No program file was given (usage error).
const EXIT_USAGE: u8 = 3;
/// The program file could not be opened.
const EXIT_OPEN: u8 = 4;

#[derive(Parser, Debug)]
#[command(
    name = "bftape",
    version,
    about = "Run a Brainfuck program from a file"
)]
struct Cli {
    /// Path to the Brainfuck program file
    #[arg(value_name = "PROGRAM")]
    program: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    let file = match File::open(&cli.program) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("bftape: cannot open {}: {err}", cli.program.display());
            return ExitCode::from(EXIT_OPEN);
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut interpreter = Interpreter::new(BufReader::new(file), stdin, stdout);
    match interpreter.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bftape: {err}");
            ExitCode::from(err.status() as u8)
        }
    }
}
