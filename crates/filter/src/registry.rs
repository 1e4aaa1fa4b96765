use crate::{
    error::TranslateError,
    identifier::{Identifier, JsonTree},
    types::{ExprType, IdentifierType, TranslationResult},
};
use std::collections::{HashMap, hash_map::Entry};
use tracing::warn;

#[derive(Debug, Clone)]
struct Declaration {
    column: String,
    ty: ExprType,
    json: Option<JsonTree>,
}

/// Lookup table of the identifiers a filter may reference.
#[derive(Debug, Clone, Default)]
pub struct IdentifierRegistry {
    declarations: HashMap<String, Declaration>,
}

impl IdentifierRegistry {
    pub fn new(identifiers: Vec<Identifier>) -> Self {
        let mut declarations = HashMap::with_capacity(identifiers.len());

        for ident in identifiers {
            let column = ident.column_name().to_string();
            let json = match ident.kind {
                IdentifierType::Json => Some(ident.json.unwrap_or_default()),
                _ => None,
            };

            match declarations.entry(ident.name) {
                Entry::Occupied(existing) => {
                    warn!(
                        name = %existing.key(),
                        "Duplicate identifier declaration ignored; keeping the first"
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(Declaration {
                        column,
                        ty: ident.kind.into(),
                        json,
                    });
                }
            }
        }

        Self { declarations }
    }

    /// Resolve a name used in filter text. JSON identifiers also return
    /// their document shape.
    pub fn resolve(
        &self,
        name: &str,
    ) -> Result<(TranslationResult, Option<&JsonTree>), TranslateError> {
        let decl = self
            .declarations
            .get(name)
            .ok_or_else(|| TranslateError::UnknownIdentifier(name.to_string()))?;

        Ok((
            TranslationResult::new(decl.column.clone(), decl.ty),
            decl.json.as_ref(),
        ))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
