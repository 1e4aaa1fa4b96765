//! Translates filter expressions into SQL `WHERE` conditions.
//!
//! Only declared identifiers may be referenced, and every operator is
//! checked against an explicit list of allowed operand types:
//!
//! ```
//! use filter::{Identifier, IdentifierType, TranslatorDialect, new_translator};
//!
//! let translator = new_translator(
//!     vec![
//!         Identifier::new("intField", IdentifierType::Int),
//!         Identifier::new("stringField", IdentifierType::String),
//!     ],
//!     TranslatorDialect::Postgres,
//! );
//!
//! let sql = translator
//!     .translate(r#"intField >= 3 and stringField startsWith "abcd""#)
//!     .unwrap();
//! assert_eq!(sql, "((intField >= 3) and (stringField like 'abcd%'))");
//! ```

pub mod dialect;
pub mod error;
pub mod identifier;
pub mod literal;
pub mod operators;
pub mod registry;
pub mod schema;
pub mod translator;
pub mod types;

pub use dialect::{Dialect, TranslatorDialect};
pub use error::TranslateError;
pub use identifier::{Identifier, JsonElement, JsonTree};
pub use schema::{Schema, SchemaError};
pub use translator::{SqlWhereCondition, Translator};
pub use types::{ExprType, IdentifierType, TranslationResult};

/// Build a translator for `identifiers` rendering the given dialect.
pub fn new_translator(identifiers: Vec<Identifier>, dialect: TranslatorDialect) -> Translator {
    Translator::new(identifiers, dialect)
}
