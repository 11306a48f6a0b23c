//! Error types for every fallible stage of the pipeline.
//!
//! Lexer and parser failures carry the offending span when one is available,
//! mirroring the teacher's `parser::errors` layering of message + location.
//! `LoaderError` wraps I/O failures and nested parse failures encountered
//! while walking an include graph; `LookupError` is the resolver's
//! recoverable failure kind (`SPEC_FULL.md` §7).

use std::path::PathBuf;

use crate::base::Span;

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    pub span: Option<Span>,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Option<Span>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    pub fn from_lex(err: LexError) -> Self {
        Self {
            message: err.message,
            span: err.span,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("module '{name}' is already registered (duplicate_module_is_fatal is set)")]
    DuplicateModule { name: String },
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct LookupError {
    pub message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn unknown_module(module: &str) -> Self {
        Self::new(format!("unknown module '{module}'"))
    }

    pub fn unknown_name(name: &str, module: &str) -> Self {
        Self::new(format!("'{name}' is not defined in module '{module}'"))
    }
}
