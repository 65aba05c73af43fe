// rok - A small Lisp with curried lambdas and quoted expressions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use rok_core::{Session, Value, set_max_eval_depth};

const USAGE: &str = "\
Usage: rok [OPTIONS] [FILE]...

Loads each FILE in order. Starts an interactive prompt when no files are given.

Options:
  --no-prelude       Start with builtins only
  --max-depth N      Limit expression nesting depth (default 1000)
  -v, --version      Print version
  -h, --help         Print this help";

/// Command-line options.
#[derive(Debug, Default)]
struct Options {
    version: bool,
    help: bool,
    no_prelude: bool,
    max_depth: Option<usize>,
    files: Vec<String>,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--version" => options.version = true,
                "-h" | "--help" => options.help = true,
                "--no-prelude" => options.no_prelude = true,
                "--max-depth" => {
                    let value = args
                        .next()
                        .ok_or_else(|| "--max-depth requires a value".to_string())?;
                    let depth = value
                        .parse()
                        .map_err(|_| format!("invalid --max-depth '{}'", value))?;
                    options.max_depth = Some(depth);
                }
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(format!("unknown option '{}'", flag));
                }
                _ => options.files.push(arg),
            }
        }
        Ok(options)
    }
}

/// Install a tracing subscriber when `ROK_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if env::var("ROK_LOG").is_ok() {
        let filter = EnvFilter::from_env("ROK_LOG");
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .init();
    }
}

fn main() {
    init_tracing();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            process::exit(2);
        }
    };

    if options.version {
        println!("Rok v{}", env!("CARGO_PKG_VERSION"));
        return;
    }
    if options.help {
        println!("{}", USAGE);
        return;
    }

    if let Some(depth) = options.max_depth {
        set_max_eval_depth(depth);
    }

    let session = if options.no_prelude {
        Session::bare()
    } else {
        match Session::new() {
            Ok(session) => session,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    };

    if options.files.is_empty() {
        run_repl(&session);
    } else {
        run_files(&options.files, &session);
    }
}

/// Load each file through `load`, stopping at the first that cannot be read
fn run_files(files: &[String], session: &Session) {
    for path in files {
        tracing::debug!(path = %path, "running file");
        let result = session.load_file(path);
        if let Value::Error(_) = result {
            eprintln!("{}", result);
            process::exit(1);
        }
    }
}

/// Run the interactive REPL
fn run_repl(session: &Session) {
    println!("Rok v{}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+D to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("rok> ");
        if io::stdout().flush().is_err() {
            break;
        }

        match lines.next() {
            None => {
                println!();
                break;
            }
            Some(Ok(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                println!("{}", session.eval_str(&line));
            }
            Some(Err(e)) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }
}
