use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use rpncalc::{
    interpreter::{lexer::tokenize, parser::core::parse_line},
    program::{FileReport, Outcome, run_file},
};
use tracing::{error, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// rpncalc evaluates fully parenthesized RPN programs, one statement per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A program file, or a directory whose matching files are run in name
    /// order.
    path: PathBuf,

    /// Extension of the program files to run.
    #[arg(short, long, default_value = "txt")]
    extension: String,

    /// Prints the syntax tree of every line before its result.
    #[arg(short, long)]
    tree: bool,

    /// Only prints diagnostics.
    #[arg(short, long)]
    quiet: bool,

    /// Raises the log level (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log filter directive; overrides `--verbose`.
    #[arg(long, env = "RPNCALC_LOG", hide_env_values = true)]
    log: Option<String>,
}

fn init_logging(args: &Args) {
    let default = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let fallback = || EnvFilter::default().add_directive(default.into());
    let filter = match args.log.as_deref().map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        Some(Err(e)) => {
            eprintln!("Warning: ignoring the invalid log filter: {e}");
            fallback()
        },
        None => fallback(),
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

/// Collects the files to run: the path itself, or the matching entries of a
/// directory sorted by name.
///
/// Symbolic links inside the directory are followed. Entries that cannot be
/// read are skipped with a warning.
fn collect_inputs(path: &Path, extension: &str) -> Result<Vec<PathBuf>, String> {
    let matches = |p: &Path| p.extension() == Some(OsStr::new(extension));

    if path.is_file() {
        if matches(path) {
            return Ok(vec![path.to_path_buf()]);
        }
        return Err(format!("'{}' is not a .{extension} file", path.display()));
    }
    if !path.is_dir() {
        return Err(format!("'{}' not found", path.display()));
    }

    WalkDir::new(path).min_depth(1)
                      .max_depth(1)
                      .follow_links(true)
                      .sort_by_file_name()
                      .into_iter()
                      .filter_map(|entry| match entry {
                          Ok(entry) => Some(entry),
                          Err(e) => {
                              warn!(error = %e, "skipping unreadable entry");
                              None
                          },
                      })
                      .filter(|entry| entry.file_type().is_file() && matches(entry.path()))
                      .map(|entry| Ok(entry.into_path()))
                      .collect()
}

fn print_report(report: &FileReport, args: &Args) {
    if !args.quiet {
        println!("---- {} ----", report.file);
    }

    for line in &report.lines {
        if args.tree
           && !args.quiet
           && let Ok(tokens) = tokenize(&line.source, line.line_number)
           && let Ok(expr) = parse_line(&tokens)
        {
            print!("{}", expr.tree());
        }

        match &line.outcome {
            Outcome::Value(value) if !args.quiet => println!("line {}: {value}", line.line_number),
            Outcome::NoValue if !args.quiet => println!("line {}: (no value)", line.line_number),
            Outcome::Failed(diagnostic) => println!("{diagnostic}"),
            _ => {},
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let inputs = match collect_inputs(&args.path, &args.extension) {
        Ok(inputs) => inputs,
        Err(message) => {
            eprintln!("Error: {message}.");
            return ExitCode::from(2);
        },
    };

    let mut clean = true;
    for input in &inputs {
        match run_file(input) {
            Ok(report) => {
                clean &= report.is_clean();
                print_report(&report, &args);
            },
            Err(e) => {
                error!(path = %input.display(), "cannot read input");
                eprintln!("Failed to read the input file '{}': {e}", input.display());
                return ExitCode::from(2);
            },
        }
    }

    if clean { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
