//! A front-end for the Thrift Interface Definition Language: a lexer, a
//! grammar-driven parser producing a typed AST, a multi-file loader that
//! follows `include` directives, and a per-module symbol table for
//! cross-reference resolution.
//!
//! See `SPEC_FULL.md` for the full design.

pub mod ast;
pub mod base;
pub mod config;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod loader;
pub mod parser;
pub mod printer;
pub mod symbol_table;

pub use ast::Thrift;
pub use config::LoaderOptions;
pub use error::{LexError, LoaderError, LookupError, ParseError};
pub use loader::{Loader, Logger, TracingLogger};
pub use parser::parse;
pub use symbol_table::{ModuleRegistry, SymbolTable, SymbolValue};
