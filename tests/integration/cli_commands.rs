//! End-to-end tests for the cqlhelp binary

use super::helpers::{run_cqlhelp, stderr, stdout, write_config};

#[test]
fn test_topics_lists_index() {
    let output = run_cqlhelp(&["topics"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("CQL help topics:"));
    assert!(out.contains("create_table"));
    assert!(out.contains("revoke_permission"));
}

#[test]
fn test_topics_json() {
    let output = run_cqlhelp(&["topics", "--json"]);
    assert!(output.status.success());

    let names: Vec<String> =
        serde_json::from_str(&stdout(&output)).expect("topics --json should emit a JSON array");
    assert_eq!(names.len(), 67);
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(names.contains(&"json".to_string()));
}

#[test]
fn test_show_prints_anchor_and_synonyms() {
    let (_temp, config) = write_config("http://docs.local/cql/");
    let config = config.to_str().unwrap();

    let output = run_cqlhelp(&["--config", config, "show", "BEGIN"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("dml.html#batch\n"));
    assert!(out.contains("see also: apply, batch"));
}

#[test]
fn test_show_url_uses_configured_base() {
    let (_temp, config) = write_config("http://docs.local/cql");
    let config = config.to_str().unwrap();

    let output = run_cqlhelp(&["show", "create_table", "--url", "--config", config]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).lines().next(),
        Some("http://docs.local/cql/ddl.html#create-table")
    );
}

#[test]
fn test_show_unknown_topic_fails() {
    let (_temp, config) = write_config("http://docs.local/cql/");
    let config = config.to_str().unwrap();

    let output = run_cqlhelp(&["--config", config, "show", "nonexistent_topic_xyz"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("no help available for topic 'nonexistent_topic_xyz'"));
}

#[test]
fn test_show_missing_config_file_fails() {
    let output = run_cqlhelp(&["--config", "/nonexistent/cqlhelp.toml", "show", "select"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Config file not found"));
}

#[test]
fn test_completion_scripts_route_through_dynamic_helper() {
    let hooks = [
        ("bash", "cqlhelp complete bash \"${COMP_LINE:0:COMP_POINT}\""),
        ("zsh", "cqlhelp complete zsh \"$LBUFFER\""),
        ("fish", "(cqlhelp complete fish (commandline -cp) (commandline -ct)"),
    ];

    for (shell, call) in hooks {
        let output = run_cqlhelp(&["completions", shell]);
        assert!(output.status.success(), "completions {shell} failed");

        let script = stdout(&output);
        assert!(script.contains("show"), "{shell} script lacks subcommands");
        assert!(script.contains(call), "{shell} script never calls the helper");
    }
}

#[test]
fn test_completions_unsupported_shell() {
    let output = run_cqlhelp(&["completions", "powershell"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unsupported shell 'powershell'"));
}

#[test]
fn test_dynamic_completion_of_topics() {
    let output = run_cqlhelp(&["complete", "bash", "cqlhelp show drop_c", "drop_c", "show"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "drop_columnfamily\n");
}

#[test]
fn test_dynamic_completion_after_topic_is_empty() {
    let output = run_cqlhelp(&["complete", "zsh", "cqlhelp show select ", "", "select"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_dynamic_completion_of_shell_names() {
    let output = run_cqlhelp(&["complete", "fish", "cqlhelp completions Z", "Z"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "zsh\n");
}
