use crate::parse_ok;
use expr_syntax::{Node, NodeKind};

fn member(node: &Node) -> (&Node, &Node, bool) {
    match &node.kind {
        NodeKind::Member {
            node,
            property,
            optional,
        } => (node, property, *optional),
        other => panic!("Expected member node, got {:?}", other),
    }
}

#[test]
fn test_dotted_access() {
    let node = parse_ok("jsonField.intProperty");
    let (base, property, optional) = member(&node);
    assert_eq!(base.kind, NodeKind::Identifier("jsonField".to_string()));
    assert_eq!(property.kind, NodeKind::String("intProperty".to_string()));
    assert!(!optional);
}

#[test]
fn test_nested_access_is_left_nested() {
    let node = parse_ok("jsonField.nestedProperty1['nestedProperty2'].stringProperty");
    let (inner, property, _) = member(&node);
    assert_eq!(property.kind, NodeKind::String("stringProperty".to_string()));

    let (inner, property, _) = member(inner);
    assert_eq!(property.kind, NodeKind::String("nestedProperty2".to_string()));

    let (base, property, _) = member(inner);
    assert_eq!(property.kind, NodeKind::String("nestedProperty1".to_string()));
    assert_eq!(base.kind, NodeKind::Identifier("jsonField".to_string()));
}

#[test]
fn test_integer_index() {
    let node = parse_ok("jsonField[3]");
    let (_, property, _) = member(&node);
    assert_eq!(property.kind, NodeKind::Integer(3));
}

#[test]
fn test_optional_access_is_wrapped_in_chain() {
    let node = parse_ok("jsonField?.abcd");
    let NodeKind::Chain(inner) = &node.kind else {
        panic!("Expected chain node, got {:?}", node.kind);
    };
    let (_, property, optional) = member(inner);
    assert!(optional);
    assert_eq!(property.kind, NodeKind::String("abcd".to_string()));
    assert_eq!(node.to_string(), "jsonField?.abcd");
}

#[test]
fn test_call() {
    let node = parse_ok("len(stringField, 2)");
    match node.kind {
        NodeKind::Call { callee, arguments } => {
            assert_eq!(callee, "len");
            assert_eq!(arguments.len(), 2);
        }
        other => panic!("Expected call node, got {:?}", other),
    }
}

#[test]
fn test_ast_serializes_to_json() {
    let node = parse_ok("intField == 2");
    let json = serde_json::to_value(&node).unwrap();

    let binary = &json["kind"]["Binary"];
    assert_eq!(binary["operator"], "==");
    assert_eq!(binary["left"]["kind"]["Identifier"], "intField");
    assert_eq!(binary["right"]["kind"]["Integer"], 2);
    assert_eq!(json["span"]["start"], 0);
    assert_eq!(json["span"]["end"], 13);
}
