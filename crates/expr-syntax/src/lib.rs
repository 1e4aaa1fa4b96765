//! Front-end for the filter expression language: grammar, AST and the
//! builder turning source text into [`Node`] trees.

pub mod ast;
pub mod builder;
pub mod error;
pub mod parser;

pub use ast::{Node, NodeKind, Span};
pub use builder::{MAX_DEPTH, MAX_NESTING, parse};
pub use error::ParseError;
