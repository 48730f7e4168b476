// Token builder for the email grammar.

use std::ops::RangeInclusive;

use fsalex_core::StateId;
use fsalex_engine::TokenBuilder;

use crate::address::EmailAddress;

/// Username states of the bundled automaton.
pub const USERNAME_STATES: RangeInclusive<StateId> = StateId(1)..=StateId(3);

/// States occupied after the `@` in the bundled automaton.
pub const DOMAIN_STATES: RangeInclusive<StateId> = StateId(4)..=StateId(7);

/// Splits an email address into [`EmailAddress`] fields while the automaton
/// walks it.
///
/// - After a transition into a username state the symbol is appended to the
///   username.
/// - Before a transition out of a domain state, a `.` shifts the domain
///   fields down one level (tld to sld, sld to host) and any other symbol is
///   appended to the tld.
///
/// Domain labels are always collected into the tld first; the shift on the
/// next `.` is what moves them to their final field.
#[derive(Debug, Clone)]
pub struct EmailTokenBuilder {
    fields: EmailAddress,
    username_states: RangeInclusive<StateId>,
    domain_states: RangeInclusive<StateId>,
}

impl Default for EmailTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailTokenBuilder {
    /// Builder for the bundled automaton's state layout.
    pub fn new() -> Self {
        Self::with_ranges(USERNAME_STATES, DOMAIN_STATES)
    }

    /// Builder for an automaton with a different state numbering.
    pub fn with_ranges(
        username_states: RangeInclusive<StateId>,
        domain_states: RangeInclusive<StateId>,
    ) -> Self {
        Self {
            fields: EmailAddress::default(),
            username_states,
            domain_states,
        }
    }

    /// Fields accumulated so far.
    pub fn fields(&self) -> &EmailAddress {
        &self.fields
    }

    fn shift_domain(&mut self) {
        let fields = &mut self.fields;
        if !fields.host.is_empty() {
            fields.host.push('.');
        }
        fields.host.push_str(&fields.second_level_domain);
        fields.second_level_domain = std::mem::take(&mut fields.top_level_domain);
    }
}

impl TokenBuilder for EmailTokenBuilder {
    type Tokens = EmailAddress;

    fn before_transition(&mut self, symbol: char, state: StateId) {
        if !self.domain_states.contains(&state) {
            return;
        }
        if symbol == '.' {
            self.shift_domain();
        } else {
            self.fields.top_level_domain.push(symbol);
        }
    }

    fn after_transition(&mut self, symbol: char, state: StateId) {
        if self.username_states.contains(&state) {
            self.fields.username.push(symbol);
        }
    }

    fn reset(&mut self) {
        self.fields.clear();
    }

    fn snapshot(&self) -> Self::Tokens {
        self.fields.clone()
    }
}
