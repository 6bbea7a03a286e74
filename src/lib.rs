pub mod ast;
pub mod lexer;
pub mod line_index;
pub mod options;
pub mod parser;
pub mod position;
pub mod span;

pub use ast::{Node, Visitor};
pub use options::ParserOptions;
pub use parser::{ParseError, Parser, Program, parse};
pub use position::Position;
pub use span::Span;
