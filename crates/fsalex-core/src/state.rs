// State identifiers for table-driven automata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an automaton state.
///
/// States are dense indices into the transition table, so a state id doubles
/// as the row number of its transitions. Ordering is the natural integer
/// order, which is what range-based token rules compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl StateId {
    /// The state every evaluation starts in.
    pub const INITIAL: StateId = StateId(0);

    /// Row index of this state in a transition table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for StateId {
    fn from(value: u32) -> Self {
        StateId(value)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
