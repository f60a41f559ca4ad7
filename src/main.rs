//! sheetcalc - a headless spreadsheet driven from the command line

mod commands;
mod config;
mod error;
mod logging;
mod render;

use anyhow::{Context, bail};
use clap::Parser;
use sheetcalc_core::{Document, GridSize};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::{Command, apply, parse_line, parse_script};
use crate::config::{Config, load_config};

#[derive(Parser, Debug)]
#[command(name = "sheetcalc")]
#[command(about = "Headless spreadsheet: set cells, recalculate, print values")]
#[command(version)]
#[command(after_help = "\
Examples:
  sheetcalc A1=5 'A2==A1*2' 'A3==SUM(A1:A2)'
  sheetcalc -i sheet.txt --grid
  sheetcalc -c '(1 + 2) * 3'
  sheetcalc A1=4 -c '=A1 / 8'")]
struct Cli {
    /// Cell assignments applied in order, as CELL=CONTENT
    assignments: Vec<String>,

    /// Command script to run first ('-' reads stdin)
    #[arg(long, short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Evaluate a formula against the cells and print only its result
    #[arg(long, short = 'c', value_name = "FORMULA", allow_hyphen_values = true)]
    command: Option<String>,

    /// Print a table of the visible grid instead of a cell list
    #[arg(long)]
    grid: bool,

    /// Config file (defaults to the user config dir)
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore config files and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Number of columns formulas may reference
    #[arg(long, value_name = "N")]
    max_cols: Option<usize>,

    /// Number of rows formulas may reference
    #[arg(long, value_name = "N")]
    max_rows: Option<usize>,

    /// Visible grid rows (clamped to 1..=100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Visible grid columns (clamped to 1..=100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    cols: Option<i64>,

    /// Cache each cell's value during a recalculation
    #[arg(long)]
    memoize: bool,
}

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref())?
    };
    let mut doc = build_document(&cli, config);

    let mut stdout = io::stdout().lock();

    if let Some(input) = &cli.input {
        let text = if input.as_os_str() == "-" {
            io::read_to_string(io::stdin()).context("Failed to read script from stdin")?
        } else {
            std::fs::read_to_string(input)
                .with_context(|| format!("Failed to read {}", input.display()))?
        };
        let script =
            parse_script(&text).with_context(|| format!("Invalid script {}", input.display()))?;
        for command in script {
            if apply(&mut doc, command) {
                print_document(&mut stdout, &doc, cli.grid)?;
            }
        }
    }

    for assignment in &cli.assignments {
        match parse_line(assignment) {
            Ok(Some(command @ Command::Commit { .. })) => {
                apply(&mut doc, command);
            }
            Ok(_) => bail!("Expected CELL=CONTENT, got: {}", assignment),
            Err(message) => bail!("{}", message),
        }
    }

    if let Some(formula) = &cli.command {
        let formula = if formula.trim_start().starts_with('=') {
            formula.clone()
        } else {
            format!("={}", formula)
        };
        return match doc.evaluate_formula(&formula) {
            Ok(value) => {
                writeln!(stdout, "{}", value)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                writeln!(stdout, "{}", e.sentinel())?;
                eprintln!("Error: {}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    print_document(&mut stdout, &doc, cli.grid)?;
    Ok(ExitCode::SUCCESS)
}

/// Apply command-line overrides on top of the loaded config.
fn build_document(cli: &Cli, config: Config) -> Document {
    let Config { mut engine, grid } = config;
    if let Some(max_cols) = cli.max_cols {
        engine.bounds.max_cols = max_cols;
    }
    if let Some(max_rows) = cli.max_rows {
        engine.bounds.max_rows = max_rows;
    }
    engine.memoize |= cli.memoize;

    let mut doc = Document::with_config(engine, grid);
    if cli.rows.is_some() || cli.cols.is_some() {
        let GridSize { rows, cols } = doc.grid;
        doc.resize(
            cli.rows.unwrap_or(rows as i64),
            cli.cols.unwrap_or(cols as i64),
        );
    }
    doc
}

fn print_document<W: Write>(out: &mut W, doc: &Document, grid: bool) -> io::Result<()> {
    if grid {
        render::write_grid(out, doc)
    } else {
        render::write_list(out, doc)
    }
}
