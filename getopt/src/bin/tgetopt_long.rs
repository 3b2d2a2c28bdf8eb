// Test runner for mixed long/short scanning.
//
// usage: tgetopt_long [-q] OPTSTRING [ARG]...
//
// The long table is fixed:
//   --verbose        sets the verbose flag to 1
//   --name VALUE     required value, code 1000
//   --color[=VALUE]  optional value, code 1001
//   --help           no value, code 'h'

use std::cell::Cell;
use std::process::ExitCode;

use getopt::{Cursor, HasArg, LongOpt, Opt, ShortSpec};

#[derive(Debug, thiserror::Error)]
enum RunnerError {
    #[error("usage: tgetopt_long [-q] OPTSTRING [ARG]...")]
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

    let mut args = vec!["tgetopt_long".to_string()];
    args.extend(input);

    let verbose = Cell::new(0);
    let table = [
        LongOpt::new("verbose", HasArg::No, 1).flag(&verbose),
        LongOpt::new("name", HasArg::Required, 1000),
        LongOpt::new("color", HasArg::Optional, 1001),
        LongOpt::new("help", HasArg::No, 'h' as i32),
    ];

    let mut cursor = Cursor::new();
    if quiet {
        cursor = cursor.quiet();
    }

    loop {
        match cursor.scan_long(&args, &spec, &table) {
            Ok(Some(Opt::Short { opt, arg })) => match arg {
                Some(v) => println!("option -{} arg {:?}", opt, v),
                None => println!("option -{}", opt),
            },
            Ok(Some(Opt::Long { index, val, arg })) => match arg {
                Some(v) => println!("long --{} code {} arg {:?}", table[index].name, val, v),
                None => println!("long --{} code {}", table[index].name, val),
            },
            Ok(Some(Opt::Flag { index })) => println!("flag --{}", table[index].name),
            Ok(None) => break,
            Err(e) => {
                let kind = if e.is_missing_argument() {
                    "missing"
                } else {
                    "illegal"
                };
                println!("error {} {}", kind, e.option());
            }
        }
    }

    println!("verbose {}", verbose.get());
    println!("optind {}", cursor.optind());
    for operand in cursor.remaining(&args) {
        println!("operand {:?}", operand);
    }
    Ok(())
}
