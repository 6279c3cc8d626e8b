mod args;
mod error;

use args::Args;
use clap::Parser;
use error::Error;
use lineq_parser::normalize::normalize;
use lineq_solve::{solve_with, Solution};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal, Write},
    path::Path,
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, such as `LINEQ_LOG=lineq_solve=trace`.
const LOG_ENV: &str = "LINEQ_LOG";

/// Installs the tracing subscriber. Logs go to stderr so that JSON output stays parseable.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("failed to initialize tracing subscriber: {}", err);
    }
}

/// Writes the steps of a solution as indented text.
fn write_text(out: &mut impl Write, solution: &Solution) -> io::Result<()> {
    for step in &solution.steps {
        writeln!(out, "{}", step.title)?;
        writeln!(out, "    {}", step.detail)?;
        writeln!(out, "    {}", step.expression)?;
    }
    writeln!(out)
}

/// Writes a solution as a single line of JSON.
fn write_json(out: &mut impl Write, solution: &Solution) -> Result<(), Error> {
    serde_json::to_writer(&mut *out, solution)?;
    writeln!(out)?;
    Ok(())
}

/// Writes a solver error as a single line of JSON, for front ends that only read stdout.
fn write_json_error(out: &mut impl Write, err: &lineq_error::Error) -> Result<(), Error> {
    let value = serde_json::json!({
        "error": {
            "category": format!("{:?}", err.category()),
            "message": err.message(),
            "spans": err.spans.iter().map(|span| [span.start, span.end]).collect::<Vec<_>>(),
        },
    });
    serde_json::to_writer(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

/// Solves the given equation and prints its steps.
fn solve_print(input: &str, args: &Args) -> Result<(), Error> {
    let mut out = io::stdout().lock();
    match solve_with(input, args.format_options()) {
        Ok(solution) if args.json => write_json(&mut out, &solution),
        Ok(solution) => Ok(write_text(&mut out, &solution)?),
        Err(err) if args.json => {
            write_json_error(&mut out, &err)?;
            Err(err.into())
        },
        Err(err) => Err(err.into()),
    }
}

/// Solves one equation, reporting any failure to stderr. Returns `true` on success.
fn run_line(input: &str, args: &Args) -> bool {
    match solve_print(input, args) {
        Ok(()) => true,
        Err(err) => {
            // error spans refer to the normalized equation
            err.report_to_stderr(&normalize(input));
            false
        },
    }
}

/// Solves every non-empty line of the reader. Returns `true` if every equation was solved.
fn run_batch(reader: impl BufRead, args: &Args) -> io::Result<bool> {
    let mut all_solved = true;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        all_solved &= run_line(&line, args);
    }
    Ok(all_solved)
}

/// Runs the interactive mode until end of input.
fn run_repl(args: &Args) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(input) => {
                if input.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(&input)?;
                run_line(&input, args);
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);

    let batch = match args.file.as_deref() {
        Some(path) if path == Path::new("-") => run_batch(io::stdin().lock(), &args),
        Some(path) => File::open(path).and_then(|file| run_batch(BufReader::new(file), &args)),
        None if !io::stdin().is_terminal() => run_batch(io::stdin().lock(), &args),
        None => {
            return match run_repl(&args) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("{}", err);
                    ExitCode::FAILURE
                },
            };
        },
    };

    match batch {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
