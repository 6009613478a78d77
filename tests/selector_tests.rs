mod common;

use common::FakeRunner;
use llm_context::errors::ContextError;
use llm_context::selector::{parse_selection, FzfSelector, SelectorConfig, CANCELLED_EXIT_CODE};
use std::path::Path;

#[test]
fn test_default_arguments() {
    let args = SelectorConfig::default().args();
    assert_eq!(
        args,
        vec![
            "--multi",
            "--height=80%",
            "--layout=reverse",
            "--border",
            "--preview=head -n 20 {}",
        ]
    );
}

#[test]
fn test_custom_preview_and_no_border() {
    let config = SelectorConfig {
        height: "40%".to_string(),
        border: false,
        preview_lines: 5,
        ..Default::default()
    };
    let args = config.args();
    assert!(args.contains(&"--height=40%".to_string()));
    assert!(args.contains(&"--preview=head -n 5 {}".to_string()));
    assert!(!args.contains(&"--border".to_string()));
}

#[test]
fn test_parse_selection_drops_blank_entries() {
    assert_eq!(
        parse_selection("  src/a.rs\n\n  b.go \n"),
        vec!["src/a.rs".to_string(), "  b.go".to_string()]
    );
    assert_eq!(parse_selection("a.rs\r\nb.rs\r\n"), vec!["a.rs", "b.rs"]);
    assert!(parse_selection("").is_empty());
    assert!(parse_selection(" \n\t\n").is_empty());
}

#[test]
fn test_missing_selector_reported() {
    let runner = FakeRunner::new();
    let selector = FzfSelector::new(&runner, SelectorConfig::default());

    let err = selector.ensure_available().unwrap_err();
    assert!(matches!(err, ContextError::MissingDependency(ref p) if p == "fzf"));
    assert_eq!(err.to_string(), "fzf is not installed or not in your PATH");
}

#[tokio::test]
async fn test_select_feeds_candidates_and_keeps_order() {
    let runner = FakeRunner::new()
        .with_program("fzf")
        .with_selection(0, "z.rs\na.rs\n");
    let selector = FzfSelector::new(&runner, SelectorConfig::default());

    let selected = selector.select("a.rs\nz.rs", Path::new(".")).await.unwrap();

    assert_eq!(selected, vec!["z.rs".to_string(), "a.rs".to_string()]);
    assert_eq!(runner.selector_input().as_deref(), Some("a.rs\nz.rs"));
    assert_eq!(
        runner.calls(),
        vec!["fzf --multi --height=80% --layout=reverse --border --preview=head -n 20 {}".to_string()]
    );
}

#[tokio::test]
async fn test_interrupted_selector_is_cancellation() {
    let runner = FakeRunner::new()
        .with_program("fzf")
        .with_selection(CANCELLED_EXIT_CODE, "");
    let selector = FzfSelector::new(&runner, SelectorConfig::default());

    let result = selector.select("a.rs", Path::new(".")).await;
    assert!(matches!(result, Err(ContextError::SelectionCancelled)));
}

#[tokio::test]
async fn test_other_exit_codes_are_errors() {
    let runner = FakeRunner::new().with_program("fzf").with_selection(2, "");
    let selector = FzfSelector::new(&runner, SelectorConfig::default());

    match selector.select("a.rs", Path::new(".")).await {
        Err(ContextError::Selector(message)) => {
            assert!(message.contains("status 2"), "message: {}", message)
        }
        other => panic!("expected selector error, got {:?}", other),
    }
}

#[test]
fn test_parse_selection_keeps_inner_whitespace_of_paths() {
    assert_eq!(
        parse_selection("first.rs\n  padded name.rs \nlast.rs\n"),
        vec![
            "first.rs".to_string(),
            "  padded name.rs ".to_string(),
            "last.rs".to_string(),
        ]
    );
}
