/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of MCL command lines.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{lex, next_token};
pub use line::Line;
pub use parse::{expression, parse, statement, verbs};

pub mod ast;
pub mod token;
