// Dense transition table: (state, class) -> state.

use fsalex_core::StateId;

use crate::ConfigError;

/// Row-major transition table.
///
/// Row `s` holds the successors of state `s`, one per alphabet class. The
/// table is validated on construction: every row has exactly `class_count`
/// entries and every entry names a declared state, so any lookup with an
/// in-range state and class is total.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    cells: Vec<StateId>,
    class_count: usize,
    state_count: usize,
}

impl TransitionTable {
    /// Build a table from one row per state.
    pub fn from_rows(rows: &[Vec<StateId>], class_count: usize) -> Result<Self, ConfigError> {
        let state_count = rows.len();
        if state_count == 0 {
            return Err(ConfigError::NoStates);
        }

        let mut cells = Vec::with_capacity(state_count * class_count);
        for (index, row) in rows.iter().enumerate() {
            let from = StateId(index as u32);
            if row.len() != class_count {
                return Err(ConfigError::RowWidth {
                    state: from,
                    expected: class_count,
                    actual: row.len(),
                });
            }
            for (class, &target) in row.iter().enumerate() {
                if target.index() >= state_count {
                    return Err(ConfigError::UndeclaredTarget {
                        from,
                        class,
                        target,
                        state_count,
                    });
                }
                cells.push(target);
            }
        }

        Ok(Self {
            cells,
            class_count,
            state_count,
        })
    }

    /// Successor of `state` on symbol class `class`.
    ///
    /// `class` must be below [`class_count`](Self::class_count); out of
    /// alphabet symbols are filtered by the caller.
    #[inline]
    pub fn next(&self, state: StateId, class: usize) -> StateId {
        debug_assert!(class < self.class_count);
        self.cells[state.index() * self.class_count + class]
    }

    /// All successors of `state`, indexed by class.
    pub fn row(&self, state: StateId) -> &[StateId] {
        let start = state.index() * self.class_count;
        &self.cells[start..start + self.class_count]
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    /// Whether `state` is one of the declared rows.
    #[inline]
    pub fn contains(&self, state: StateId) -> bool {
        state.index() < self.state_count
    }
}
