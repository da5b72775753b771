use anyhow::Result;

use super::generator::Shell;
use crate::topics::TopicDirectory;

/// Global flags that consume the following word
const FLAGS_WITH_VALUE: &[&str] = &["--config"];

/// What the shell hook knows about the word being completed
#[derive(Debug, Clone)]
pub struct CompletionContext {
    /// Command line up to the cursor, including the partial current word
    pub cmdline: String,
    pub current_word: String,
    pub prev_word: String,
}

impl CompletionContext {
    /// Parse completion context from shell-provided arguments
    ///
    /// Shells pass `[cmdline, current_word, prev_word]`; missing entries
    /// default to empty.
    pub fn from_args(args: &[String]) -> Self {
        let cmdline = args.first().cloned().unwrap_or_default();
        let current_word = args.get(1).cloned().unwrap_or_default();
        let prev_word = args.get(2).cloned().unwrap_or_default();

        Self {
            cmdline,
            current_word,
            prev_word,
        }
    }

    /// Subcommand whose first positional argument is being completed.
    ///
    /// `cqlhelp show cre` and `cqlhelp --config c.toml show ` both yield
    /// `show`; `cqlhelp show select ` yields nothing because the topic is
    /// already given. Without a command line, the previous word decides.
    pub fn completing_argument_of(&self) -> Option<&str> {
        if self.cmdline.trim().is_empty() {
            return Some(self.prev_word.as_str()).filter(|word| !word.is_empty());
        }

        let mut words: Vec<&str> = self.cmdline.split_whitespace().skip(1).collect();
        let typing_word = !self.cmdline.ends_with(char::is_whitespace);
        if typing_word {
            words.pop();
        }

        let mut positionals = Vec::new();
        let mut iter = words.into_iter();
        while let Some(word) = iter.next() {
            if FLAGS_WITH_VALUE.contains(&word) {
                iter.next();
            } else if !word.starts_with('-') {
                positionals.push(word);
            }
        }

        match positionals.as_slice() {
            [subcommand] => Some(*subcommand),
            _ => None,
        }
    }
}

/// Topic identifiers starting with `prefix` (case-insensitive)
///
/// Completion only; `TopicDirectory::resolve` never matches on prefixes.
pub fn complete_topics(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.to_lowercase();
    TopicDirectory::global()
        .list_topics()
        .into_iter()
        .filter(|name| name.starts_with(&prefix))
        .collect()
}

/// Supported shell names starting with `prefix` (case-insensitive)
pub fn complete_shells(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.to_lowercase();
    Shell::ALL
        .into_iter()
        .map(Shell::name)
        .filter(|name| name.starts_with(&prefix))
        .collect()
}

/// Candidates for the word being typed
pub fn candidates(ctx: &CompletionContext) -> Vec<&'static str> {
    match ctx.completing_argument_of() {
        Some("show") => complete_topics(&ctx.current_word),
        Some("completions") => complete_shells(&ctx.current_word),
        _ => Vec::new(),
    }
}

/// Print completions for the word being typed, one per line
pub fn complete_dynamic(ctx: &CompletionContext) -> Result<()> {
    for completion in candidates(ctx) {
        println!("{completion}");
    }

    Ok(())
}
