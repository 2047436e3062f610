//! Command-line parsing
//!
//! ```text
//! expensify list   [--text T] [--sort date|amount] [--from YYYY-MM-DD] [--to YYYY-MM-DD]
//! expensify add    [--description D] [--note N] [--amount 12.50] [--date YYYY-MM-DD]
//! expensify edit   <id> [--description D] [--note N] [--amount 12.50] [--date YYYY-MM-DD]
//! expensify remove <id>
//! expensify total
//! expensify help
//! ```

use anyhow::{bail, Context, Result};

use crate::domain_models::{ExpenseDraft, ExpenseUpdates};
use crate::format::{parse_amount, parse_date};
use crate::state::{FiltersState, SortBy};

pub const USAGE: &str = "\
Usage: expensify <command> [options]

Commands:
  list     [--text T] [--sort date|amount] [--from YYYY-MM-DD] [--to YYYY-MM-DD]
  add      [--description D] [--note N] [--amount 12.50] [--date YYYY-MM-DD]
  edit     <id> [--description D] [--note N] [--amount 12.50] [--date YYYY-MM-DD]
  remove   <id>
  total
  help

Environment:
  EXPENSIFY_ENV            development (default), production or test
  FIREBASE_DATABASE_URL    database root, e.g. https://my-app.firebaseio.com
  FIREBASE_PROJECT_ID      used when FIREBASE_DATABASE_URL is unset
  FIREBASE_AUTH_TOKEN      optional credential for the database
  RUST_LOG                 log level for the debug log file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(FiltersState),
    Add(ExpenseDraft),
    Edit { id: String, updates: ExpenseUpdates },
    Remove { id: String },
    Total,
    Help,
}

impl Command {
    /// Parse the arguments after the program name
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let Some(name) = args.next() else {
            return Ok(Command::Help);
        };
        let rest: Vec<String> = args.collect();

        match name.as_str() {
            "list" | "ls" => parse_filters(&rest).map(Command::List),
            "add" => parse_updates(&rest).map(Command::Add),
            "edit" => {
                let (id, options) = split_id(&name, &rest)?;
                Ok(Command::Edit {
                    id,
                    updates: parse_updates(options)?,
                })
            }
            "remove" | "rm" => {
                let (id, options) = split_id(&name, &rest)?;
                if let Some(extra) = options.first() {
                    bail!("Unexpected argument '{}' for remove", extra);
                }
                Ok(Command::Remove { id })
            }
            "total" => no_options(&name, &rest).map(|_| Command::Total),
            "help" | "--help" | "-h" => Ok(Command::Help),
            other => bail!("Unknown command '{}'\n\n{}", other, USAGE),
        }
    }
}

fn split_id<'a>(command: &str, args: &'a [String]) -> Result<(String, &'a [String])> {
    match args.split_first() {
        Some((id, rest)) if !id.starts_with("--") => Ok((id.clone(), rest)),
        _ => bail!("'{}' needs an expense id", command),
    }
}

fn no_options(command: &str, args: &[String]) -> Result<()> {
    match args.first() {
        Some(extra) => bail!("Unexpected argument '{}' for {}", extra, command),
        None => Ok(()),
    }
}

/// Walk `--flag value` pairs
fn options(args: &[String]) -> Result<Vec<(&str, &str)>> {
    let mut pairs = Vec::new();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let Some(name) = flag.strip_prefix("--") else {
            bail!("Unexpected argument '{}'", flag);
        };
        let value = iter
            .next()
            .with_context(|| format!("Option --{} needs a value", name))?;
        pairs.push((name, value.as_str()));
    }
    Ok(pairs)
}

fn parse_filters(args: &[String]) -> Result<FiltersState> {
    let mut filters = FiltersState::default();
    for (name, value) in options(args)? {
        match name {
            "text" => filters.text = value.to_string(),
            "sort" => {
                filters.sort_by = match value {
                    "date" => SortBy::Date,
                    "amount" => SortBy::Amount,
                    other => bail!("Unknown sort '{}', use date or amount", other),
                }
            }
            "from" => filters.start_date = Some(parse_date(value)?),
            "to" => filters.end_date = Some(parse_date(value)?),
            other => bail!("Unknown option --{} for list", other),
        }
    }
    Ok(filters)
}

fn parse_updates(args: &[String]) -> Result<ExpenseUpdates> {
    let mut updates = ExpenseUpdates::new();
    for (name, value) in options(args)? {
        updates = match name {
            "description" => updates.description(value),
            "note" => updates.note(value),
            "amount" => updates.amount(parse_amount(value)?),
            "date" => updates.created_at(parse_date(value)?),
            other => bail!("Unknown option --{}", other),
        };
    }
    Ok(updates)
}
