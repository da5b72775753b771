//! Topic directory behavior through the public API

use cqlhelp::{HelpError, TopicDirectory};

#[test]
fn test_every_listed_topic_resolves() {
    let topics = TopicDirectory::global();
    let names = topics.list_topics();
    assert_eq!(names.len(), 67);

    for name in &names {
        let anchor = topics
            .resolve(name)
            .unwrap_or_else(|e| panic!("{name} failed to resolve: {e}"));
        assert!(anchor.as_str().contains(".html"));
    }
}

#[test]
fn test_entries_match_list_and_resolve() {
    let topics = TopicDirectory::new();
    let entries: Vec<_> = topics.entries().collect();

    assert_eq!(
        entries.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
        topics.list_topics()
    );
    for (name, anchor) in entries {
        assert_eq!(topics.resolve(name).unwrap(), anchor);
    }
}

#[test]
fn test_mixed_case_statement_topics() {
    let topics = TopicDirectory::global();
    assert_eq!(
        topics.resolve("Create_Materialized_View").unwrap(),
        "mvs.html#create-materialized-view"
    );
    assert_eq!(
        topics.resolve("GRANT_PERMISSION").unwrap(),
        "security.html#grant-permission"
    );
    assert_eq!(
        topics.resolve("Keywords").unwrap(),
        "appendices.html#appendix-a-cql-keywords"
    );
}

#[test]
fn test_constants_share_one_anchor() {
    let topics = TopicDirectory::global();
    for name in ["blob", "uuid", "boolean", "int", "text", "ascii"] {
        assert_eq!(
            topics.resolve(name).unwrap(),
            "definitions.html#constants",
            "{name}"
        );
    }
}

#[test]
fn test_unknown_topic_keeps_original_spelling() {
    let err = TopicDirectory::global()
        .resolve("NoSuchTopic")
        .unwrap_err();

    assert!(matches!(err, HelpError::TopicNotFound { ref topic } if topic == "NoSuchTopic"));
    assert_eq!(err.to_string(), "no help available for topic 'NoSuchTopic'");
}
