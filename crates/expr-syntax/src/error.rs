use crate::parser::Rule;
use pest::error::Error as PestError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
        source_snippet: String,
    },

    #[error("invalid number literal '{literal}' at line {line}, column {column}")]
    InvalidNumber {
        literal: String,
        line: usize,
        column: usize,
    },

    #[error("invalid escape sequence '{sequence}' at line {line}, column {column}")]
    InvalidEscape {
        sequence: String,
        line: usize,
        column: usize,
    },

    #[error("expression nesting exceeds the limit of {limit} at line {line}, column {column}")]
    TooDeep {
        limit: usize,
        line: usize,
        column: usize,
    },

    #[error("unexpected {rule} at line {line}, column {column}")]
    UnexpectedRule {
        rule: String,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    pub fn from_pest_error(err: PestError<Rule>) -> Self {
        use pest::error::LineColLocation;

        let (line, column) = match err.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };

        ParseError::Syntax {
            message: err.variant.message().to_string(),
            line,
            column,
            source_snippet: err.line().to_string(),
        }
    }

    /// Line and column the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::InvalidNumber { line, column, .. }
            | ParseError::InvalidEscape { line, column, .. }
            | ParseError::TooDeep { line, column, .. }
            | ParseError::UnexpectedRule { line, column, .. } => (*line, *column),
        }
    }

    /// Format error with a caret under the offending column.
    pub fn format_error(&self) -> String {
        match self {
            ParseError::Syntax {
                message,
                line,
                column,
                source_snippet,
            } => format!(
                "Parse error at line {}, column {}:\n{}\n{}^\n{}",
                line,
                column,
                source_snippet,
                " ".repeat(column.saturating_sub(1)),
                message
            ),
            _ => self.to_string(),
        }
    }
}
