//! Command-line parsing and verb completion.
//!
//! A command line is split on whitespace: the first token is the verb, the
//! rest are positional arguments. There is no quoting — handlers that want a
//! multi-word title or task rejoin the arguments with single spaces, so the
//! original separators are not recoverable.

use crate::apps::AppId;

use super::registry::commands_in_scope;

/// A tokenized command line.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub verb: String,
    pub args: Vec<String>,
}

/// Split a line into verb and arguments. Returns None for blank input.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let mut tokens = input.split_whitespace();
    let verb = tokens.next()?.to_string();
    let args = tokens.map(|token| token.to_string()).collect();
    Some(ParsedCommand { verb, args })
}

/// Attempt to complete a partially typed verb against the commands in scope.
///
/// Returns the completed input if progress can be made: the full verb plus a
/// trailing space when the match is unique, or the longest common prefix when
/// several verbs match. Arguments are free text and never completed.
pub fn complete_command_input(input: &str, active: AppId) -> Option<String> {
    if input.ends_with(' ') {
        return None;
    }
    let mut tokens = input.split_whitespace();
    let current = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let mut candidates: Vec<&'static str> = commands_in_scope(active)
        .filter(|command| command.verb.starts_with(current))
        .map(|command| command.verb)
        .collect();
    candidates.sort();
    candidates.dedup();
    if candidates.is_empty() {
        return None;
    }

    let common = longest_common_prefix(&candidates);
    if common.is_empty() || common == current {
        return None;
    }

    let mut completed = common;
    if candidates.len() == 1 && completed == candidates[0] {
        completed.push(' ');
    }
    Some(completed)
}

fn longest_common_prefix(items: &[&str]) -> String {
    let Some((first, rest)) = items.split_first() else {
        return String::new();
    };
    let mut prefix = first.to_string();
    for item in rest {
        let mut next = String::new();
        for (a, b) in prefix.chars().zip(item.chars()) {
            if a == b {
                next.push(a);
            } else {
                break;
            }
        }
        prefix = next;
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::{complete_command_input, parse_command};
    use crate::apps::AppId;

    #[test]
    fn parse_returns_none_for_blank_input() {
        assert!(parse_command("").is_none());
        assert!(parse_command("   ").is_none());
    }

    #[test]
    fn parse_splits_verb_and_args() {
        let command = parse_command("add buy milk").expect("parse ok");
        assert_eq!(command.verb, "add");
        assert_eq!(command.args, vec!["buy".to_string(), "milk".to_string()]);
    }

    #[test]
    fn parse_collapses_extra_whitespace() {
        let command = parse_command("  new   shopping  list ").expect("parse ok");
        assert_eq!(command.verb, "new");
        assert_eq!(
            command.args,
            vec!["shopping".to_string(), "list".to_string()]
        );
    }

    #[test]
    fn complete_unique_verb_appends_space() {
        assert_eq!(
            complete_command_input("op", AppId::Home),
            Some("open ".to_string())
        );
        assert_eq!(
            complete_command_input("do", AppId::Todo),
            Some("done ".to_string())
        );
    }

    #[test]
    fn complete_ambiguous_verb_extends_to_common_prefix() {
        // "li" matches only "list" in todo scope; "l" matches "ls" and "list"
        // with no progress past the typed prefix.
        assert_eq!(
            complete_command_input("li", AppId::Todo),
            Some("list ".to_string())
        );
        assert!(complete_command_input("l", AppId::Todo).is_none());
    }

    #[test]
    fn complete_respects_active_app_scope() {
        assert!(complete_command_input("ad", AppId::Notes).is_none());
        assert_eq!(
            complete_command_input("ad", AppId::Todo),
            Some("add ".to_string())
        );
    }

    #[test]
    fn complete_ignores_arguments() {
        assert!(complete_command_input("add bu", AppId::Todo).is_none());
        assert!(complete_command_input("done ", AppId::Todo).is_none());
    }
}
