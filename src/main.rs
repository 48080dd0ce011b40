use std::{fs, process::ExitCode};

use clap::Parser;
use cosmo::interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit code for a program that failed to scan or parse.
const EXIT_SYNTAX: u8 = 65;
/// Exit code for a program that stopped on a runtime error.
const EXIT_RUNTIME: u8 = 70;
/// Exit code for an input file that could not be read.
const EXIT_IO: u8 = 74;

/// cosmo is a small dynamically typed scripting language with first-class
/// functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells cosmo to treat the argument as a path to a script file instead of
    /// the script itself.
    #[arg(short, long)]
    file: bool,

    /// Print the scanned tokens before running.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed statements before running.
    #[arg(long)]
    ast: bool,

    /// Raise log verbosity (-v for info, -vv for debug). `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(false))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(error) => {
                eprintln!("Failed to read the input file '{}': {error}", &args.contents);
                return ExitCode::from(EXIT_IO);
            },
        }
    } else {
        args.contents
    };

    let scanned = scan(&script);
    for error in &scanned.errors {
        eprintln!("{error}");
    }
    if args.tokens {
        for token in &scanned.tokens {
            println!("{token}");
        }
    }

    let parsed = parse(&scanned.tokens);
    if !parsed.is_ok() {
        for error in &parsed.errors {
            eprintln!("{error}");
        }
        return ExitCode::from(EXIT_SYNTAX);
    }
    if args.ast {
        for statement in &parsed.statements {
            println!("{statement:#?}");
        }
    }

    if let Err(error) = Interpreter::new().interpret(&parsed.statements) {
        eprintln!("{error}");
        return ExitCode::from(EXIT_RUNTIME);
    }

    ExitCode::SUCCESS
}
