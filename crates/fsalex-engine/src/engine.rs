// Evaluation engine: the table-driven walk, rejection policy and acceptance
// check.

use fsalex_core::{Rejection, StateId, Verdict};
use hashbrown::HashSet;

use crate::alphabet::AlphabetClassifier;
use crate::config::FsaConfig;
use crate::table::TransitionTable;
use crate::{ConfigError, TokenBuilder};

/// A finite state automaton built from a validated configuration.
///
/// All data is immutable after construction, so one `Fsa` can be shared
/// between threads and evaluate any number of inputs. Per-evaluation state
/// lives on the stack of [`evaluate`](Self::evaluate) and in the caller's
/// [`TokenBuilder`].
pub struct Fsa {
    classifier: AlphabetClassifier,
    table: TransitionTable,
    accepting: HashSet<StateId>,
    rejecting: HashSet<StateId>,
}

impl std::fmt::Debug for Fsa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fsa")
            .field("state_count", &self.table.state_count())
            .field("class_count", &self.classifier.class_count())
            .field("accepting", &self.accepting.len())
            .field("rejecting", &self.rejecting.len())
            .finish()
    }
}

impl Fsa {
    /// Validate `config` and build the automaton.
    pub fn from_config(config: &FsaConfig) -> Result<Self, ConfigError> {
        let classifier = AlphabetClassifier::new(config.classes.clone());
        let table = TransitionTable::from_rows(&config.transitions, classifier.class_count())?;

        if config.accepting.is_empty() {
            return Err(ConfigError::NoAcceptingStates);
        }
        let accepting = collect_states(&table, &config.accepting, "accepting")?;
        let rejecting = collect_states(&table, &config.rejecting, "rejecting")?;

        log::debug!(
            "built automaton: {} states, {} classes, {} accepting, {} rejecting",
            table.state_count(),
            classifier.class_count(),
            accepting.len(),
            rejecting.len()
        );

        Ok(Self {
            classifier,
            table,
            accepting,
            rejecting,
        })
    }

    /// Parse and build from the sectioned text format.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Self::from_config(&FsaConfig::parse_text(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Self::from_config(&FsaConfig::from_json(text)?)
    }

    pub fn classifier(&self) -> &AlphabetClassifier {
        &self.classifier
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    #[inline]
    pub fn is_rejecting(&self, state: StateId) -> bool {
        self.rejecting.contains(&state)
    }

    /// Evaluate one input string.
    ///
    /// The builder is reset first, then driven with every symbol the walk
    /// processes. Once the walk is invalid (a rejecting state was reached
    /// with input remaining, or a symbol fell outside the alphabet) the rest
    /// of the input is still read but no longer classified, transitioned or
    /// passed to the builder.
    pub fn evaluate<B>(&self, input: &str, builder: &mut B) -> Verdict<B::Tokens>
    where
        B: TokenBuilder + ?Sized,
    {
        builder.reset();

        let mut state = StateId::INITIAL;
        // `None` while the walk is valid.
        let mut rejection: Option<Rejection> = None;

        for (position, symbol) in input.chars().enumerate() {
            if rejection.is_some() {
                continue;
            }
            if self.is_rejecting(state) {
                rejection = Some(Rejection::RejectingState {
                    state,
                    consumed: position,
                });
                continue;
            }

            let class = self.classifier.classify(symbol);
            if self.classifier.is_out_of_alphabet(class) {
                rejection = Some(Rejection::OutOfAlphabet { position, symbol });
                continue;
            }

            builder.before_transition(symbol, state);
            state = self.table.next(state, class);
            builder.after_transition(symbol, state);
        }

        if rejection.is_none() && !self.is_accepting(state) {
            rejection = Some(Rejection::NotAccepting { state });
        }

        match rejection {
            None => {
                log::trace!("accepted {input:?} in state {state}");
                Verdict::Accepted {
                    state,
                    tokens: builder.snapshot(),
                }
            }
            Some(reason) => {
                log::trace!("rejected {input:?}: {reason}");
                Verdict::Rejected { reason }
            }
        }
    }

    /// Recognition only, without token extraction.
    pub fn recognizes(&self, input: &str) -> bool {
        self.evaluate(input, &mut ()).is_accepted()
    }

    /// Evaluate every line of `text`, reusing one builder.
    ///
    /// Each line is passed through [`prepare_line`] first. The builder is
    /// reset by every evaluation, so tokens never leak between lines.
    pub fn evaluate_lines<'a, B>(
        &'a self,
        text: &'a str,
        builder: &'a mut B,
    ) -> impl Iterator<Item = (&'a str, Verdict<B::Tokens>)> + 'a
    where
        B: TokenBuilder,
    {
        text.lines().map(move |line| {
            let input = prepare_line(line);
            (input, self.evaluate(input, builder))
        })
    }
}

/// Strip the line terminator and leading whitespace from an input line.
///
/// Trailing spaces are kept; they are part of the input string.
pub fn prepare_line(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.trim_start()
}

fn collect_states(
    table: &TransitionTable,
    states: &[StateId],
    role: &'static str,
) -> Result<HashSet<StateId>, ConfigError> {
    states
        .iter()
        .map(|&state| {
            if table.contains(state) {
                Ok(state)
            } else {
                Err(ConfigError::UndeclaredState {
                    role,
                    state,
                    state_count: table.state_count(),
                })
            }
        })
        .collect()
}
