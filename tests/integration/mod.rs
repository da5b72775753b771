//! Integration tests for cqlhelp
//!
//! These tests exercise the public topic directory API and the `cqlhelp`
//! binary end to end.

pub mod cli_commands;
pub mod topic_lookup;
