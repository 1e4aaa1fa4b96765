use crate::{binary, parse_ok, unary};
use expr_syntax::NodeKind;

#[test]
fn test_unary_minus_on_literal() {
    let node = parse_ok("-2");
    let (op, operand) = unary(&node);
    assert_eq!(op, "-");
    assert_eq!(operand.kind, NodeKind::Integer(2));
}

#[test]
fn test_not_binds_tighter_than_and() {
    let node = parse_ok("!boolField and otherField");
    let (op, left, right) = binary(&node);
    assert_eq!(op, "and");
    assert_eq!(unary(left).0, "!");
    assert_eq!(right.kind, NodeKind::Identifier("otherField".to_string()));
}

#[test]
fn test_and_binds_tighter_than_or() {
    let node = parse_ok("a or b and c");
    let (op, _, right) = binary(&node);
    assert_eq!(op, "or");
    assert_eq!(binary(right).0, "and");
}

#[test]
fn test_additive_is_left_associative() {
    let node = parse_ok("floatField + 3 - 2");
    let (op, left, right) = binary(&node);
    assert_eq!(op, "-");
    assert_eq!(right.kind, NodeKind::Integer(2));
    assert_eq!(binary(left).0, "+");
}

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    let node = parse_ok("a + b * c");
    let (op, _, right) = binary(&node);
    assert_eq!(op, "+");
    assert_eq!(binary(right).0, "*");
}

#[test]
fn test_power_is_right_associative() {
    let node = parse_ok("a ** b ** c");
    let (op, left, right) = binary(&node);
    assert_eq!(op, "**");
    assert_eq!(left.kind, NodeKind::Identifier("a".to_string()));
    assert_eq!(binary(right).0, "**");
}

#[test]
fn test_comparison_against_arithmetic() {
    let node = parse_ok("jsonField.floatProperty >= floatField + 3 - 2");
    let (op, left, right) = binary(&node);
    assert_eq!(op, ">=");
    assert!(matches!(left.kind, NodeKind::Member { .. }));
    assert_eq!(binary(right).0, "-");
}

#[test]
fn test_keyword_operators_are_kept_verbatim() {
    for op in ["contains", "startsWith", "endsWith", "matches"] {
        let node = parse_ok(&format!(r#"stringField {} "abcd""#, op));
        assert_eq!(binary(&node).0, op);
    }
}

#[test]
fn test_grouping_overrides_precedence() {
    let node = parse_ok("(a + b) * c");
    let (op, left, _) = binary(&node);
    assert_eq!(op, "*");
    assert_eq!(binary(left).0, "+");
}

#[test]
fn test_conditional() {
    let node = parse_ok("a ? b : c");
    assert!(matches!(node.kind, NodeKind::Conditional { .. }));
}

#[test]
fn test_display_round_trips_structure() {
    let node = parse_ok("!boolField and jsonField.intProperty == -2");
    assert_eq!(
        node.to_string(),
        "!boolField and (jsonField.intProperty == -2)"
    );
}
