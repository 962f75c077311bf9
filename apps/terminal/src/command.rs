//! # Commands
//!
//! One command per input line.
//!
//! ```text
//! amount 100          set the original amount (free text, parsed leniently)
//! discount 20         set the discount percentage
//! extra 10            set the additional discount (no argument clears it)
//! key discount 15.5<  type on the keypad: digits, '.', '<' = backspace
//! currency EUR        select the display currency
//! currencies [query]  list / search the catalog
//! calc                calculate
//! show                show the form and last result
//! json                dump the form state as JSON
//! clear               reset the form
//! help | quit
//! ```

use slash_core::{Currency, Field, Key};

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { field: Field, text: String },
    Keys { field: Field, keys: Vec<Key> },
    Currency(String),
    Currencies(String),
    Calculate,
    Show,
    Json,
    Clear,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  amount <text>         set the original amount
  discount <text>       set the discount percentage (0-100)
  extra [text]          set or clear the additional discount
  key <field> <keys>    type on the keypad (0-9, '.', '<' = backspace)
  currency <code>       select the display currency
  currencies [query]    list currencies
  calc                  calculate the final amount
  show                  show the form
  json                  print the form state as JSON
  clear                 reset the form
  help                  show this help
  quit                  exit";

impl Command {
    /// Parses a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "amount" | "a" => Command::Set {
                field: Field::OriginalAmount,
                text: required(rest, "amount", "a value")?,
            },
            "discount" | "d" => Command::Set {
                field: Field::DiscountPercent,
                text: required(rest, "discount", "a percentage")?,
            },
            "extra" | "e" => Command::Set {
                field: Field::AdditionalDiscountPercent,
                text: rest.to_string(),
            },
            "key" | "k" => {
                let (field, keys) = rest.split_once(char::is_whitespace).ok_or(
                    CommandError::MissingArgument {
                        command: "key",
                        what: "a field and keys",
                    },
                )?;
                Command::Keys {
                    field: parse_field(field)?,
                    keys: parse_keys(keys.trim())?,
                }
            }
            "currency" | "c" => Command::Currency(required(rest, "currency", "a currency code")?),
            "currencies" => Command::Currencies(rest.to_string()),
            "calc" | "calculate" | "=" => Command::Calculate,
            "show" | "s" => Command::Show,
            "json" => Command::Json,
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(rest: &str, command: &'static str, what: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command, what });
    }
    Ok(rest.to_string())
}

fn parse_field(name: &str) -> Result<Field, CommandError> {
    match name.to_lowercase().as_str() {
        "amount" | "a" => Ok(Field::OriginalAmount),
        "discount" | "d" => Ok(Field::DiscountPercent),
        "extra" | "e" => Ok(Field::AdditionalDiscountPercent),
        other => Err(CommandError::UnknownField(other.to_string())),
    }
}

fn parse_keys(keys: &str) -> Result<Vec<Key>, CommandError> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_char(c).ok_or(CommandError::InvalidKey(c)))
        .collect()
}

/// One line per catalog entry matching `query`.
pub fn currency_listing(query: &str, selected: Currency) -> Vec<String> {
    slash_core::currency::search(query)
        .into_iter()
        .map(|c| {
            let marker = if c == selected { "*" } else { " " };
            format!("{} {}  {:<4} {}", marker, c.code(), c.symbol(), c.name())
        })
        .collect()
}
