//! CQL help topic directory.
//!
//! Maps help topic identifiers (CQL keywords, statements and data types) to
//! anchors relative to the CQL documentation root, e.g. `ddl.html#create-table`.
//! The table is compiled in and never changes at runtime, so a single
//! directory can be shared freely between threads.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{HelpError, HelpResult};

/// Every known topic and its anchor.
///
/// Synonyms are separate rows pointing at the same anchor literal.
const TOPICS: &[(&str, &str)] = &[
    // data types
    ("types", "types.html"),
    ("timestamp", "types.html#working-with-timestamps"),
    ("date", "types.html#working-with-dates"),
    ("time", "types.html#working-with-times"),
    ("duration", "types.html#working-with-durations"),
    ("map", "types.html#maps"),
    ("set", "types.html#sets"),
    ("list", "types.html#lists"),
    ("blob", "definitions.html#constants"),
    ("uuid", "definitions.html#constants"),
    ("boolean", "definitions.html#constants"),
    ("int", "definitions.html#constants"),
    ("counter", "types.html#counters"),
    ("text", "definitions.html#constants"),
    ("ascii", "definitions.html#constants"),
    ("tuple", "types.html#tuples"),
    // data manipulation
    ("use", "ddl.html#use"),
    ("insert", "dml.html#insert"),
    ("update", "dml.html#update"),
    ("delete", "dml.html#delete"),
    ("select", "dml.html#select"),
    ("json", "json.html"),
    ("select_json", "json.html#select-json"),
    ("insert_json", "json.html#insert-json"),
    ("batch", "dml.html#batch"),
    ("begin", "dml.html#batch"),
    ("apply", "dml.html#batch"),
    // data definition
    ("create_keyspace", "ddl.html#create-keyspace"),
    ("alter_keyspace", "ddl.html#alter-keyspace"),
    ("drop_keyspace", "ddl.html#drop-keyspace"),
    ("create_table", "ddl.html#create-table"),
    ("create_columnfamily", "ddl.html#create-table"),
    ("alter_table", "ddl.html#alter-table"),
    ("drop_table", "ddl.html#drop-table"),
    ("drop_columnfamily", "ddl.html#drop-table"),
    ("create_index", "indexes.html#create-index"),
    ("drop_index", "indexes.html#drop-index"),
    ("truncate", "ddl.html#truncate"),
    ("create_type", "types.html#creating-a-udt"),
    ("alter_type", "types.html#altering-a-udt"),
    ("drop_type", "types.html#dropping-a-udt"),
    // functions and aggregates
    ("create_function", "functions.html#create-function"),
    ("drop_function", "functions.html#drop-function"),
    ("functions", "functions.html"),
    ("create_aggregate", "functions.html#create-aggregate"),
    ("drop_aggregate", "functions.html#drop-aggregate"),
    ("aggregates", "functions.html#aggregate-functions"),
    ("create_trigger", "triggers.html#create-trigger"),
    ("drop_trigger", "triggers.html#drop-trigger"),
    ("create_materialized_view", "mvs.html#create-materialized-view"),
    ("alter_materialized_view", "mvs.html#alter-materialized-view"),
    ("drop_materialized_view", "mvs.html#drop-materialized-view"),
    ("keywords", "appendices.html#appendix-a-cql-keywords"),
    // security
    ("create_user", "security.html#create-user"),
    ("alter_user", "security.html#alter-user"),
    ("drop_user", "security.html#drop-user"),
    ("list_users", "security.html#list-users"),
    ("create_role", "security.html#create-role"),
    ("alter_role", "security.html#alter-role"),
    ("drop_role", "security.html#drop-role"),
    ("grant_role", "security.html#grant-role"),
    ("revoke_role", "security.html#revoke-role"),
    ("list_roles", "security.html#list-roles"),
    ("permissions", "security.html#permissions"),
    ("list_permissions", "security.html#list-permissions"),
    ("grant_permission", "security.html#grant-permission"),
    ("revoke_permission", "security.html#revoke-permission"),
];

static GLOBAL: LazyLock<TopicDirectory> = LazyLock::new(TopicDirectory::new);

/// A documentation anchor relative to the CQL docs root.
///
/// Either `<page>.html` or `<page>.html#<fragment>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anchor(&'static str);

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The page part, e.g. `ddl.html` for `ddl.html#create-table`.
    pub fn page(&self) -> &'static str {
        match self.0.split_once('#') {
            Some((page, _)) => page,
            None => self.0,
        }
    }

    /// The fragment after `#`, if the anchor points inside a page.
    pub fn fragment(&self) -> Option<&'static str> {
        self.0.split_once('#').map(|(_, fragment)| fragment)
    }
}

impl Deref for Anchor {
    type Target = str;

    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for Anchor {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for Anchor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for Anchor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Immutable lookup table from topic identifier to [`Anchor`].
#[derive(Debug, Clone)]
pub struct TopicDirectory {
    topics: BTreeMap<&'static str, Anchor>,
}

impl TopicDirectory {
    /// Build a directory from the compiled-in topic table.
    pub fn new() -> Self {
        let topics = TOPICS
            .iter()
            .map(|&(name, anchor)| (name, Anchor(anchor)))
            .collect();
        Self { topics }
    }

    /// Process-wide directory, built on first use.
    pub fn global() -> &'static TopicDirectory {
        &GLOBAL
    }

    /// All topic identifiers in lexicographic order.
    pub fn list_topics(&self) -> Vec<&'static str> {
        self.topics.keys().copied().collect()
    }

    /// Resolve a topic identifier to its anchor.
    ///
    /// Matching is case-insensitive and exact: no prefix or fuzzy matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use cqlhelp::topics::TopicDirectory;
    ///
    /// let topics = TopicDirectory::global();
    /// assert_eq!(topics.resolve("CREATE_TABLE").unwrap(), "ddl.html#create-table");
    /// assert!(topics.resolve("frobnicate").is_err());
    /// ```
    pub fn resolve(&self, topic: &str) -> HelpResult<Anchor> {
        let key = topic.to_lowercase();
        match self.topics.get(key.as_str()) {
            Some(anchor) => {
                debug!(topic = %key, anchor = %anchor, "resolved help topic");
                Ok(*anchor)
            }
            None => {
                debug!(topic = %key, "unknown help topic");
                Err(HelpError::TopicNotFound {
                    topic: topic.to_string(),
                })
            }
        }
    }

    /// Other identifiers that resolve to the same anchor as `topic`.
    pub fn synonyms(&self, topic: &str) -> HelpResult<Vec<&'static str>> {
        let anchor = self.resolve(topic)?;
        let key = topic.to_lowercase();

        Ok(self
            .entries()
            .filter(|(name, other)| *other == anchor && *name != key)
            .map(|(name, _)| name)
            .collect())
    }

    /// `(identifier, anchor)` pairs in identifier order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Anchor)> + '_ {
        self.topics.iter().map(|(name, anchor)| (*name, *anchor))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicDirectory {
    fn default() -> Self {
        Self::new()
    }
}
