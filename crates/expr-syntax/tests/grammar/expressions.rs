//! Grammar tests for accepted expressions

use expr_syntax::parser::{ExprParser, Rule};
use pest::Parser;

fn assert_parses(inputs: &[&str]) {
    for input in inputs {
        let result = ExprParser::parse(Rule::program, input);
        assert!(result.is_ok(), "Failed to parse: {} ({:?})", input, result.err());
    }
}

#[test]
fn test_parse_literals() {
    assert_parses(&[
        "nil",
        "true",
        "false",
        "42",
        "1_000_000",
        "3.14",
        "1e10",
        "2.5E-3",
        r#""hello""#,
        r#"'hello'"#,
        "`raw string`",
        r#""escaped \"quote\"""#,
    ]);
}

#[test]
fn test_parse_comparisons() {
    assert_parses(&[
        "intField == 2",
        "intField != nil",
        "floatField < 1.5",
        "floatField > 1.5",
        "tsField <= \"2024-09-17T08:00:00Z\"",
        "tsField >= \"2024-09-17T08:00:00Z\"",
    ]);
}

#[test]
fn test_parse_keyword_operators() {
    assert_parses(&[
        "a and b",
        "a or b",
        "not a",
        "a in [1, 2]",
        r#"s matches "[A-Z]+""#,
        r#"s contains "x""#,
        r#"s startsWith "x""#,
        r#"s endsWith "x""#,
    ]);
}

#[test]
fn test_parse_symbolic_operators() {
    assert_parses(&[
        "a && b || !c",
        "a + b - c * d / e % f",
        "a ** 2",
        "a ^ 2",
        "a ?? b",
        "-a",
        "+a",
    ]);
}

#[test]
fn test_keyword_prefixed_identifiers() {
    // identifiers that start with an operator keyword
    assert_parses(&["index == 1", "notes == 1", "order == 1", "android == 1", "nilable == 1"]);
}

#[test]
fn test_parse_member_access() {
    assert_parses(&[
        "jsonField.a",
        "jsonField.a.b.c",
        "jsonField['a']",
        "jsonField[\"a\"].b",
        "jsonField[3]",
        "jsonField?.a",
    ]);
}

#[test]
fn test_parse_other_constructs() {
    assert_parses(&[
        "len(stringField) > 2",
        "now()",
        "[1, 2, 3]",
        "[]",
        "a ? b : c",
        "(a + b) * c",
    ]);
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_parses(&["  intField==2  ", "intField\n  == 2", "\tboolField\t"]);
}
