//! Error type shared by the generation pipeline.

use crate::symbol::MAX_SYMBOLS;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("symbol offset {offset} is past 'Z' (at most {} symbols)", MAX_SYMBOLS)]
    SymbolOutOfRange { offset: usize },
    #[error("invalid arity range {min}..={max}: need 2 <= min <= max <= {}", MAX_SYMBOLS)]
    InvalidRange { min: usize, max: usize },
    #[error("failed to write generated code: {0}")]
    Io(#[from] std::io::Error),
}
