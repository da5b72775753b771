//! `cqlhelp show <topic>` - resolve a topic to its documentation anchor.

use anyhow::Result;
use colored::Colorize;
use tracing::warn;

use crate::config::Config;
use crate::topics::TopicDirectory;

/// Print the anchor (or full URL) for a topic.
///
/// Exits with status 1 when the topic is unknown.
pub fn execute(topic: String, url: bool, config: &Config) -> Result<()> {
    let topics = TopicDirectory::global();

    let anchor = match topics.resolve(&topic) {
        Ok(anchor) => anchor,
        Err(err) => {
            warn!(topic = %topic, "help requested for unknown topic");
            eprintln!("{} {}", "✗".red(), err);
            std::process::exit(1);
        }
    };

    if url {
        println!("{}", config.doc_url(&anchor));
    } else {
        println!("{anchor}");
    }

    let synonyms = topics.synonyms(&topic)?;
    if !synonyms.is_empty() {
        println!(
            "  {} see also: {}",
            "→".dimmed(),
            synonyms.join(", ").cyan()
        );
    }

    Ok(())
}
