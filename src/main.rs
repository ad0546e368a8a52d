use std::{
    fs,
    io::{self, IsTerminal, Read},
    process::ExitCode,
};

use calc::{
    Config, Interpreter, ScanPolicy, ScopeMode, ast::dump::dump, config::DEFAULT_MAX_CALL_DEPTH,
    parse,
};
use clap::Parser;
use tracing::Level;

/// calc runs small imperative scripts over 64-bit integers and reports the
/// value of their final `return`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calc to treat CONTENTS as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Prints the syntax tree before running the script.
    #[arg(short, long)]
    dump_ast: bool,

    /// Which scope a function call's scope is chained to.
    #[arg(long, value_enum, default_value_t)]
    scope: ScopeMode,

    /// What the scanner does with characters that start no token.
    #[arg(long, value_enum, default_value_t)]
    scan: ScanPolicy,

    /// How many script function calls may be active at once.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Raises the log level (warn, info, debug, trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The script, or a path with --file. Read from stdin when absent.
    contents: Option<String>,
}

fn read_script(args: &Args) -> io::Result<String> {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path),
        Some(source) => Ok(source.clone()),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .with_ansi(io::stderr().is_terminal())
                             .init();

    let script = match read_script(&args) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the script: {e}");
            return ExitCode::FAILURE;
        },
    };

    let config = Config { scope_mode:     args.scope,
                          scan_policy:    args.scan,
                          max_call_depth: args.max_call_depth, };
    let parsed = match parse(&script, config.scan_policy) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };
    if args.dump_ast {
        print!("{}", dump(&parsed.program));
    }

    match Interpreter::new(config).evaluate(parsed, &mut io::stdout().lock()) {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
