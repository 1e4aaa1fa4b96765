use expr_syntax::{MAX_DEPTH, MAX_NESTING, ParseError, parse};

fn assert_too_deep(input: &str) {
    match parse(input) {
        Err(ParseError::TooDeep { .. }) => {}
        other => panic!("Expected nesting error, got {:?}", other.map(|n| n.span)),
    }
}

#[test]
fn test_long_and_chain_is_rejected() {
    assert_too_deep(&vec!["boolField"; 5_000].join(" and "));
}

#[test]
fn test_long_prefix_chain_is_rejected() {
    assert_too_deep(&format!("{}boolField", "!".repeat(20_000)));
    assert_too_deep(&format!("{}2", "-".repeat(20_000)));
}

#[test]
fn test_deep_parentheses_are_rejected() {
    let depth = 10_000;
    assert_too_deep(&format!("{}a{}", "(".repeat(depth), ")".repeat(depth)));
    assert_too_deep(&format!("{}1{}", "[".repeat(depth), "]".repeat(depth)));
}

#[test]
fn test_deep_ternary_is_rejected() {
    assert_too_deep(&format!("{}c{}", "a ? ".repeat(5_000), " : b".repeat(5_000)));
}

#[test]
fn test_long_member_chain_is_rejected() {
    assert_too_deep(&format!("doc{}", ".a".repeat(5_000)));
}

#[test]
fn test_nesting_within_limits_parses() {
    let chain = vec!["boolField"; MAX_DEPTH / 2].join(" and ");
    assert!(parse(&chain).is_ok());

    let depth = MAX_NESTING;
    let nested = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    assert!(parse(&nested).is_ok());
}

#[test]
fn test_error_reports_limit() {
    let err = parse(&vec!["a"; 1_000].join(" or ")).unwrap_err();
    assert!(err.to_string().contains(&MAX_DEPTH.to_string()));
    assert_eq!(err.position(), (1, 1));
}
