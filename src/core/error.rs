//! Engine errors.
//!
//! Only dealing can fail. Selections that cannot apply are reported as
//! `SelectOutcome::Ignored`, not as errors.

use thiserror::Error;

use super::SymbolId;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot deal a game from an empty symbol set")]
    EmptySymbolSet,

    #[error("symbol {0} appears more than once in the symbol set")]
    DuplicateSymbol(SymbolId),

    #[error("symbol set of {0} symbols exceeds the card id space")]
    TooManySymbols(usize),

    #[error("card id space exhausted: {0} more ids needed")]
    IdsExhausted(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::EmptySymbolSet.to_string(),
            "cannot deal a game from an empty symbol set"
        );
        assert_eq!(
            GameError::DuplicateSymbol(SymbolId(4)).to_string(),
            "symbol Symbol(4) appears more than once in the symbol set"
        );
        assert_eq!(
            GameError::IdsExhausted(12).to_string(),
            "card id space exhausted: 12 more ids needed"
        );
    }
}
