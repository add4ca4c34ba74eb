//! Programmatic one-shot commands over a `TodoService`. The `todolite` binary maps its
//! subcommands onto these; `serve` is handled by the binary itself.

use crate::errors::TodoError;
use crate::todo::{TodoQueryParams, TodoService};
use std::io::Write;

pub enum Command {
    /// Run the list pipeline and print NDJSON, one todo per line.
    List { params: Vec<(String, String)> },
    /// Print the number of todos matching the filter parameters.
    Count { params: Vec<(String, String)> },
    /// Print one todo as JSON.
    Get { id: String },
}

/// Splits `key=value` arguments. The value may itself contain `=`.
///
/// # Errors
/// `TodoError::Validation` for an argument without `=`.
pub fn parse_pairs(args: &[String]) -> Result<Vec<(String, String)>, TodoError> {
    args.iter()
        .map(|a| {
            a.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| TodoError::Validation(format!("expected key=value, got '{a}'")))
        })
        .collect()
}

/// # Errors
/// Propagates service errors and write failures on `out`.
pub fn run<W: Write>(service: &TodoService, cmd: Command, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::List { params } => {
            let todos = service.list(&TodoQueryParams::from_pairs(params))?;
            for todo in todos {
                writeln!(out, "{}", serde_json::to_string(&todo)?)?;
            }
        }
        Command::Count { params } => {
            let n = service.count(&TodoQueryParams::from_pairs(params))?;
            writeln!(out, "{n}")?;
        }
        Command::Get { id } => {
            let todo = service.get(&id)?;
            writeln!(out, "{}", serde_json::to_string(&todo)?)?;
        }
    }
    Ok(())
}
