use crate::assert_translates;
use filter::{Identifier, IdentifierType, TranslatorDialect, new_translator};

#[test]
fn test_binary_expressions() {
    assert_translates(
        r#"intField >= 3 and jsonField.tsProperty > "2024-09-17T08:00:00Z""#,
        "((intField >= 3) and (jsonField ->> 'tsProperty' > '2024-09-17T08:00:00Z'))",
    );
}

#[test]
fn test_unary_expressions() {
    assert_translates(
        "!boolField and jsonField.intProperty == -2",
        "((not boolField) and (cast(jsonField ->> 'intProperty' as int) = (-2)))",
    );
}

#[test]
fn test_math_expressions() {
    assert_translates(
        "jsonField.floatProperty >= floatField + 3 - 2",
        "(cast(jsonField ->> 'floatProperty' as float) >= ((floatField + 3) - 2))",
    );
}

#[test]
fn test_integer_math_stays_integer() {
    assert_translates("intField == intField * 2 % 3", "(intField = ((intField * 2) % 3))");
    assert_translates("intField <= 2 ** 3", "(intField <= (2 ^ 3))");
    assert_translates("intField <= 2 ^ 3", "(intField <= (2 ^ 3))");
}

#[test]
fn test_mixed_math_becomes_float() {
    assert_translates("floatField < intField / 2.0", "(floatField < (intField / 2))");
    assert!(
        crate::translate("intField == intField + 0.5")
            .unwrap_err()
            .is_unsupported_operation()
    );
}

#[test]
fn test_string_expressions() {
    assert_translates(
        r#"(stringField startsWith "abcd" or stringField endsWith "abcd") and (jsonField.stringProperty matches "[A-Z]+" or jsonField.stringProperty contains "ijkl")"#,
        "(((stringField like 'abcd%') or (stringField like '%abcd')) and ((jsonField ->> 'stringProperty' ~ '[A-Z]+') or (jsonField ->> 'stringProperty' like '%ijkl%')))",
    );
}

#[test]
fn test_like_pattern_keeps_quote_escaping() {
    assert_translates(
        r#"stringField contains "o'brien""#,
        "(stringField like '%o''brien%')",
    );
}

#[test]
fn test_symbolic_and_keyword_logical_operators_agree() {
    assert_translates(
        "boolField && true || !false",
        "((boolField and TRUE) or (not FALSE))",
    );
    assert_translates(
        "boolField and true or not false",
        "((boolField and TRUE) or (not FALSE))",
    );
}

#[test]
fn test_negated_float_literal() {
    assert_translates("floatField > -1.5", "(floatField > (-1.5))");
}

#[test]
fn test_quickstart_example() {
    let translator = new_translator(
        vec![
            Identifier::new("intField", IdentifierType::Int),
            Identifier::new("stringField", IdentifierType::String),
        ],
        TranslatorDialect::Postgres,
    );

    let sql = translator
        .translate(r#"intField >= 3 and stringField startsWith "abcd""#)
        .unwrap();
    assert_eq!(sql, "((intField >= 3) and (stringField like 'abcd%'))");
}

#[test]
fn test_translator_is_shareable_across_threads() {
    let translator = std::sync::Arc::new(crate::translator());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let translator = translator.clone();
            std::thread::spawn(move || translator.translate(&format!("intField == {}", i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let sql = handle.join().unwrap().unwrap();
        assert_eq!(sql.as_str(), format!("(intField = {})", i));
    }
}

#[test]
fn test_literal_math_type_promotion() {
    assert_translates("intField == 1 + 2", "(intField = (1 + 2))");
    assert_translates("floatField == 1 + 2.5", "(floatField = (1 + 2.5))");
    assert!(crate::translate("intField == 1 + 2.5").is_err());
    assert!(crate::translate("floatField == 1 + 2").is_err());
}
