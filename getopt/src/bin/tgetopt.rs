// Test runner for short-option scanning.
//
// usage: tgetopt [-q] OPTSTRING [ARG]...
//
// Scans the ARGs as if they followed the program name "tgetopt" and prints
// one line per scan result, then the final index and the operands.

use std::process::ExitCode;

use getopt::{Cursor, ScanError, ShortSpec};

#[derive(Debug, thiserror::Error)]
enum RunnerError {
    #[error("usage: tgetopt [-q] OPTSTRING [ARG]...")]
    Usage,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RunnerError> {
    let mut input: Vec<String> = std::env::args().skip(1).collect();
    let quiet = input.first().is_some_and(|a| a == "-q");
    if quiet {
        input.remove(0);
    }
    if input.is_empty() {
        return Err(RunnerError::Usage);
    }
    let spec = ShortSpec::new(&input.remove(0));

    let mut args = vec!["tgetopt".to_string()];
    args.extend(input);

    let mut cursor = Cursor::new();
    if quiet {
        cursor = cursor.quiet();
    }

    loop {
        match cursor.scan_short(&args, &spec) {
            Ok(Some(opt)) => match opt.arg() {
                Some(v) => println!("option -{} arg {:?}", char_of(opt.code()), v),
                None => println!("option -{}", char_of(opt.code())),
            },
            Ok(None) => break,
            Err(e) => print_error(&e),
        }
    }

    println!("optind {}", cursor.optind());
    for operand in cursor.remaining(&args) {
        println!("operand {:?}", operand);
    }
    Ok(())
}

fn char_of(code: i32) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('?')
}

fn print_error(e: &ScanError) {
    let kind = if e.is_missing_argument() {
        "missing"
    } else {
        "illegal"
    };
    println!("error {} {}", kind, e.option());
}
