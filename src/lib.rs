//! CQL help topics.
//!
//! [`topics::TopicDirectory`] maps the topic names a CQL shell accepts after
//! `HELP` to anchors in the CQL documentation. The remaining modules back the
//! `cqlhelp` binary.

pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod logging;
pub mod topics;

pub use error::{HelpError, HelpResult};
pub use topics::{Anchor, TopicDirectory};
