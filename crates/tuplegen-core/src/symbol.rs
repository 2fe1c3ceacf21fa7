//! Letter identifiers used as tuple type parameters.

use crate::error::GenError;

/// Number of distinct symbols available ('A' through 'Z').
pub const MAX_SYMBOLS: usize = 26;

/// Map an offset to its uppercase letter: 0 → 'A', 1 → 'B', ...
pub fn symbol(offset: usize) -> Result<char, GenError> {
    if offset >= MAX_SYMBOLS {
        return Err(GenError::SymbolOutOfRange { offset });
    }
    Ok(char::from(b'A' + offset as u8))
}

/// The first `arity` symbols in alphabetical order.
pub fn symbols(arity: usize) -> Result<Vec<char>, GenError> {
    (0..arity).map(symbol).collect()
}
