// tests/result_parsing.rs

use std::collections::HashMap;

use awf_wrap::result::{parse_lines, ResultMap};

#[test]
fn lines_without_colon_are_ignored() {
    let parsed = parse_lines(["Input file: sample.mp3", "Done", "", "100%"]);

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.get("Input file").map(String::as_str), Some(" sample.mp3"));
}

#[test]
fn split_happens_on_first_colon_only() {
    let parsed = parse_lines(["a:b:c"]);
    assert_eq!(parsed.get("a").map(String::as_str), Some("b:c"));
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let parsed = parse_lines(["x:1", "x:2"]);

    let mut expected = HashMap::new();
    expected.insert("x".to_string(), "2".to_string());
    assert_eq!(parsed, expected);
}

#[test]
fn keys_and_values_are_not_trimmed() {
    let parsed = parse_lines([" frames : 1024 ", "empty:", ":orphan"]);

    assert_eq!(parsed.get(" frames ").map(String::as_str), Some(" 1024 "));
    assert_eq!(parsed.get("empty").map(String::as_str), Some(""));
    assert_eq!(parsed.get("").map(String::as_str), Some("orphan"));
}

#[test]
fn completed_result_carries_status_and_diagnostics() {
    let result = ResultMap::completed(parse_lines(["frames:1024"]), true);

    assert!(result.is_success());
    assert_eq!(result.status(), "true");
    assert_eq!(result.get("frames"), Some("1024"));
    assert_eq!(result.len(), 2);
}

#[test]
fn synthesized_status_overrides_a_printed_one() {
    let result = ResultMap::completed(parse_lines(["status:true", "frames:1"]), false);

    assert_eq!(result.status(), "false");
    assert_eq!(result.get("frames"), Some("1"));
}

#[test]
fn degraded_result_has_only_status() {
    let result = ResultMap::degraded();

    assert!(!result.is_success());
    assert_eq!(result.len(), 1);
    assert_eq!(result.get("status"), Some("false"));
}

#[test]
fn display_is_sorted_key_value_lines() {
    let result = ResultMap::completed(parse_lines(["zeta:1", "alpha:2"]), true);
    assert_eq!(result.to_string(), "alpha:2\nstatus:true\nzeta:1");
}
