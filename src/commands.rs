//! Command scripts: line-oriented edits applied to a document.
//!
//! ```text
//! # comment
//! A1=5
//! A2==A1*2
//! :undo
//! :redo
//! :clear
//! :resize 20 5
//! :print
//! ```
//!
//! An assignment splits at the first `=`; everything after it is the raw
//! draft, so `A2==A1*2` stores the formula `=A1*2` and `A1=` clears A1.

use regex::Regex;
use sheetcalc_core::{CellRef, Document};
use std::sync::OnceLock;

use crate::error::{Result, ScriptError};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Commit { cell: CellRef, draft: String },
    Undo,
    Redo,
    Clear,
    Resize { rows: i64, cols: i64 },
    Print,
}

fn assignment_re() -> &'static Regex {
    static ASSIGNMENT_RE: OnceLock<Regex> = OnceLock::new();
    ASSIGNMENT_RE.get_or_init(|| {
        Regex::new(r"^\s*(?<cell>[A-Za-z]+[0-9]+)\s*=(?<draft>.*)$")
            .expect("assignment regex must compile")
    })
}

/// Parse one line. Blank lines and `#` comments yield None.
pub fn parse_line(line: &str) -> std::result::Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    if let Some(rest) = trimmed.strip_prefix(':') {
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        let command = match (name, args.as_slice()) {
            ("undo", []) => Command::Undo,
            ("redo", []) => Command::Redo,
            ("clear", []) => Command::Clear,
            ("print", []) => Command::Print,
            ("resize", [rows, cols]) => Command::Resize {
                rows: parse_dimension(rows),
                cols: parse_dimension(cols),
            },
            _ => return Err(format!("Unknown command: :{}", rest)),
        };
        return Ok(Some(command));
    }

    let caps = assignment_re()
        .captures(line)
        .ok_or_else(|| format!("Expected CELL=CONTENT, got: {}", trimmed))?;
    let cell = CellRef::from_str(&caps["cell"])
        .ok_or_else(|| format!("Invalid cell reference: {}", &caps["cell"]))?;
    Ok(Some(Command::Commit {
        cell,
        draft: caps["draft"].to_string(),
    }))
}

/// Non-numeric sizes fall back to 1, like an empty resize field.
fn parse_dimension(text: &str) -> i64 {
    text.parse::<i64>().unwrap_or(1)
}

/// Parse a whole script, reporting the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {}
            Err(message) => {
                return Err(ScriptError::Parse {
                    line: idx + 1,
                    message,
                });
            }
        }
    }
    Ok(commands)
}

/// Apply a command. Returns true when the command asks for output.
pub fn apply(doc: &mut Document, command: Command) -> bool {
    match command {
        Command::Commit { cell, draft } => {
            doc.commit(cell, &draft);
        }
        Command::Undo => {
            if let Err(e) = doc.undo() {
                eprintln!("Warning: {}", e);
            }
        }
        Command::Redo => {
            if let Err(e) = doc.redo() {
                eprintln!("Warning: {}", e);
            }
        }
        Command::Clear => {
            doc.clear_all();
        }
        Command::Resize { rows, cols } => {
            doc.resize(rows, cols);
        }
        Command::Print => return true,
    }
    false
}
