pub mod node;
pub mod span;

pub use node::{Node, NodeKind};
pub use span::Span;
