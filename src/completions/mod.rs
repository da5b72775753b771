pub mod dynamic;
pub mod generator;

pub use dynamic::{candidates, complete_dynamic, complete_shells, complete_topics, CompletionContext};
pub use generator::{generate_completions, Shell};
