// Automaton configuration: the record an Fsa is built from, plus loaders for
// the sectioned text format and JSON.

use std::str::FromStr;

use fsalex_core::StateId;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Parsed, not yet validated, automaton description.
///
/// The text format has four sections separated by blank lines:
///
/// 1. Alphabet classes, one per line, symbols separated by spaces.
/// 2. Transition rows, one per state, next-state ids separated by spaces
///    (column `i` belongs to class `i`).
/// 3. Accepting state ids.
/// 4. Rejecting state ids (optional).
///
/// ```text
/// 0 1 2 3 4 5 6 7 8 9
/// -
///
/// 2 1
/// 2 3
/// 2 3
/// 3 3
///
/// 2
///
/// 3
/// ```
///
/// Validation happens when the configuration is turned into an
/// [`Fsa`](crate::Fsa).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsaConfig {
    pub classes: Vec<Vec<char>>,
    pub transitions: Vec<Vec<StateId>>,
    pub accepting: Vec<StateId>,
    #[serde(default)]
    pub rejecting: Vec<StateId>,
}

impl FsaConfig {
    /// Parse the sectioned text format.
    ///
    /// Every blank (or whitespace-only) line advances to the next section.
    /// Accepting and rejecting sections may span several lines; their ids are
    /// concatenated.
    pub fn parse_text(text: &str) -> Result<Self, ConfigError> {
        let mut config = FsaConfig::default();
        let mut section = 0usize;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                section += 1;
                continue;
            }
            match section {
                0 => config.classes.push(parse_class(line, line_no)?),
                1 => config.transitions.push(parse_states(line, line_no)?),
                2 => config.accepting.extend(parse_states(line, line_no)?),
                3 => config.rejecting.extend(parse_states(line, line_no)?),
                _ => return Err(ConfigError::TooManySections { line: line_no }),
            }
        }

        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration without keeping the built automaton.
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::Fsa::from_config(self).map(|_| ())
    }

    /// Number of declared states (transition rows).
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }
}

impl FromStr for FsaConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

fn parse_class(line: &str, line_no: usize) -> Result<Vec<char>, ConfigError> {
    line.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Ok(symbol),
                _ => Err(ConfigError::MultiCharSymbol {
                    line: line_no,
                    token: token.to_string(),
                }),
            }
        })
        .collect()
}

fn parse_states(line: &str, line_no: usize) -> Result<Vec<StateId>, ConfigError> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map(StateId)
                .map_err(|_| ConfigError::InvalidStateId {
                    line: line_no,
                    token: token.to_string(),
                })
        })
        .collect()
}
