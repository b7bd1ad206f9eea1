//! Mochi Headless Runner
//!
//! Feeds a recorded capture through the terminal grid and prints the
//! resulting state. Reads input from a file or stdin.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use mochi_grid::app::{self, TerminalConfig};
use mochi_grid::Terminal;

use tracing::{error, info};

fn main() -> ExitCode {
    app::init_logging("warn");

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Try 'mochi-headless --help'.");
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = TerminalConfig::load_or_default(args.config.as_deref())?;
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }

    let input = match &args.input {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            data
        }
    };

    let mut term = Terminal::from_config(&config);
    info!(rows = term.rows(), cols = term.cols(), bytes = input.len(), "feeding capture");
    term.feed_bytes(&input)?;

    let snapshot = term.snapshot();
    match args.format {
        OutputFormat::Text => {
            println!("Terminal State ({}x{}):", term.rows(), term.cols());
            println!("Cursor: ({}, {})", snapshot.cursor.row, snapshot.cursor.col);
            println!("---");
            print!("{}", snapshot.to_text());
            println!("---");
        }
        OutputFormat::Json => println!("{}", snapshot.to_json()?),
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    rows: Option<usize>,
    cols: Option<usize>,
    /// Input file (stdin if not specified)
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    format: OutputFormat,
    help: bool,
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    let mut argv = argv.into_iter();

    while let Some(arg) = argv.next() {
        let mut value = |flag: &str| argv.next().ok_or_else(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "-r" | "--rows" => args.rows = Some(parse_dimension(&arg, &value(&arg)?)?),
            "-c" | "--cols" => args.cols = Some(parse_dimension(&arg, &value(&arg)?)?),
            "-f" | "--file" => args.input = Some(PathBuf::from(value(&arg)?)),
            "--config" => args.config = Some(PathBuf::from(value(&arg)?)),
            "-j" | "--json" => args.format = OutputFormat::Json,
            "-t" | "--text" => args.format = OutputFormat::Text,
            "-h" | "--help" => args.help = true,
            other if !other.starts_with('-') && args.input.is_none() => {
                args.input = Some(PathBuf::from(other));
            }
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }

    Ok(args)
}

fn parse_dimension(flag: &str, value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{flag} expects a positive integer, got '{value}'")),
    }
}

fn print_help() {
    println!("Mochi Headless Runner");
    println!();
    println!("Usage: mochi-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -r, --rows <N>      Set terminal height (default: 24)");
    println!("  -c, --cols <N>      Set terminal width (default: 80)");
    println!("  -f, --file <PATH>   Read input from file");
    println!("      --config <PATH> Load rows/cols from a JSON config file");
    println!("  -j, --json          Output snapshot as JSON");
    println!("  -t, --text          Output snapshot as text (default)");
    println!("  -h, --help          Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!("Set RUST_LOG=debug to trace the commands being applied.");
    println!();
    println!("Examples:");
    println!("  printf 'Hello\\033[31mWorld\\033[0m' | mochi-headless");
    println!("  mochi-headless -c 120 -r 40 capture.txt");
    println!("  mochi-headless --json < capture.txt > snapshot.json");
}
