//! Command line parsing: "/name arg1 'arg two'".

use regex::Regex;
use std::sync::OnceLock;

/// Regex for splitting a line on whitespace while keeping quoted substrings together.
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'|"([^"]*)"|(\S+)"#).expect("Invalid Regex")
    })
}

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Lowercase name without the leading '/' or a "@botname" suffix.
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Parse a line starting with '/'. Other text yields `None`.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let head = line.strip_prefix('/')?;
        if head.starts_with(char::is_whitespace) {
            return None;
        }

        let mut tokens = split_and_strip(head).into_iter();
        let name = tokens.next()?;
        let name = name.split('@').next().unwrap_or_default().to_lowercase();
        if name.is_empty() {
            return None;
        }

        Some(Command {
            name,
            args: tokens.map(str::to_string).collect(),
        })
    }
}

/// Split on whitespace, preserving quoted substrings (quotes removed).
fn split_and_strip(input: &str) -> Vec<&str> {
    get_token_regex()
        .captures_iter(input)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
        .map(|m| m.as_str())
        .collect()
}
