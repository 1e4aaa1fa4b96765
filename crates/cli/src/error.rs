use expr_syntax::ParseError;
use filter::{SchemaError, TranslateError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to load the schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("Failed to parse the expression:\n{}", .0.format_error())]
    Parse(#[from] ParseError),

    #[error("Failed to translate the expression: {0}")]
    Translate(#[from] TranslateError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
