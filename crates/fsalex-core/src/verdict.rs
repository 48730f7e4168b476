// Evaluation outcome types.

use std::fmt;

use crate::state::StateId;

/// Why an input string was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A symbol matched none of the alphabet classes.
    ///
    /// `position` is the character offset of the offending symbol.
    OutOfAlphabet { position: usize, symbol: char },

    /// The walk reached a rejecting state while input remained.
    ///
    /// `consumed` is the number of symbols processed before the walk stopped,
    /// so the symbol at `consumed` was the first one skipped.
    RejectingState { state: StateId, consumed: usize },

    /// All input was processed but the final state does not accept.
    NotAccepting { state: StateId },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::OutOfAlphabet { position, symbol } => {
                write!(f, "symbol {symbol:?} at position {position} is not in the alphabet")
            }
            Rejection::RejectingState { state, consumed } => {
                write!(f, "entered rejecting state {state} after {consumed} symbols")
            }
            Rejection::NotAccepting { state } => {
                write!(f, "input ended in non-accepting state {state}")
            }
        }
    }
}

/// Result of evaluating one input string.
///
/// Tokens are only ever carried by an accepted verdict; a rejected
/// evaluation never exposes what the token builder accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T> {
    Accepted { state: StateId, tokens: T },
    Rejected { reason: Rejection },
}

impl<T> Verdict<T> {
    /// Whether the input belongs to the language.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// The extracted tokens, if the input was accepted.
    pub fn tokens(&self) -> Option<&T> {
        match self {
            Verdict::Accepted { tokens, .. } => Some(tokens),
            Verdict::Rejected { .. } => None,
        }
    }

    /// Consume the verdict, returning the tokens of an accepted input.
    pub fn into_tokens(self) -> Option<T> {
        match self {
            Verdict::Accepted { tokens, .. } => Some(tokens),
            Verdict::Rejected { .. } => None,
        }
    }

    /// The rejection reason, if the input was rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted { .. } => None,
            Verdict::Rejected { reason } => Some(reason),
        }
    }
}
