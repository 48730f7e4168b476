//! Table-driven finite state recognizer.
//!
//! An [`Fsa`] is built once from a [`FsaConfig`] (alphabet classes,
//! transition rows, accepting and rejecting states) and then evaluates input
//! strings one at a time. Each evaluation drives a caller-supplied
//! [`TokenBuilder`] with the same symbol/state stream the automaton walks, so
//! accepted strings come back decomposed into grammar-specific fields.
//!
//! # Architecture
//!
//! - [`alphabet`] -- Symbol classification (char to table column)
//! - [`table`] -- Dense transition table
//! - [`config`] -- Configuration record, text and JSON loading, validation
//! - [`engine`] -- The evaluation walk and acceptance policy

pub mod alphabet;
pub mod config;
pub mod engine;
pub mod table;

pub use alphabet::AlphabetClassifier;
pub use config::FsaConfig;
pub use engine::{Fsa, prepare_line};
pub use fsalex_core::{Rejection, StateId, Verdict};
pub use table::TransitionTable;

/// Error type for configuration loading and validation.
///
/// Every variant is fatal: an [`Fsa`] is never built from a configuration
/// that fails validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration declares no states")]
    NoStates,
    #[error("no accepting states declared")]
    NoAcceptingStates,
    #[error("state {state} has {actual} transitions, expected one per class ({expected})")]
    RowWidth {
        state: StateId,
        expected: usize,
        actual: usize,
    },
    #[error(
        "transition from state {from} on class {class} targets undeclared state {target} ({state_count} states declared)"
    )]
    UndeclaredTarget {
        from: StateId,
        class: usize,
        target: StateId,
        state_count: usize,
    },
    #[error("{role} state {state} is not declared ({state_count} states declared)")]
    UndeclaredState {
        role: &'static str,
        state: StateId,
        state_count: usize,
    },
    #[error("line {line}: class symbol {token:?} is not a single character")]
    MultiCharSymbol { line: usize, token: String },
    #[error("line {line}: invalid state id {token:?}")]
    InvalidStateId { line: usize, token: String },
    #[error("line {line}: content after the rejecting-states section")]
    TooManySections { line: usize },
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-evaluation accumulator driven by the automaton walk.
///
/// The engine calls [`reset`](Self::reset) once at the start of every
/// evaluation, then for every in-alphabet symbol it processes:
/// `before_transition(symbol, state_before)`, the table lookup, and
/// `after_transition(symbol, state_after)`. Symbols skipped after the walk
/// has become invalid never reach the builder. [`snapshot`](Self::snapshot)
/// is only called for accepted input.
pub trait TokenBuilder {
    type Tokens;

    /// Called with the state the automaton occupied before consuming `symbol`.
    fn before_transition(&mut self, symbol: char, state: StateId);

    /// Called with the state reached after consuming `symbol`.
    fn after_transition(&mut self, symbol: char, state: StateId);

    /// Clear all accumulated fields.
    fn reset(&mut self);

    /// Owned copy of the accumulated fields.
    fn snapshot(&self) -> Self::Tokens;
}

/// Pure recognition: no fields are extracted.
impl TokenBuilder for () {
    type Tokens = ();

    fn before_transition(&mut self, _symbol: char, _state: StateId) {}

    fn after_transition(&mut self, _symbol: char, _state: StateId) {}

    fn reset(&mut self) {}

    fn snapshot(&self) -> Self::Tokens {}
}
