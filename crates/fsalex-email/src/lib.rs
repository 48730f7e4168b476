//! Email address grammar for fsalex.
//!
//! The bundled automaton recognizes a simplified email address:
//!
//! - a username of letters and digits, optionally containing one `.` that is
//!   neither its first nor its last character;
//! - an `@`;
//! - a domain of at least two labels of letters and digits separated by `.`.
//!
//! State layout of the bundled table (the [`EmailTokenBuilder`] defaults
//! depend on it):
//!
//! | State | Meaning |
//! |---|---|
//! | 0 | start |
//! | 1..=3 | inside the username |
//! | 4..=7 | after the `@` |
//! | 7 | accepting |
//! | 8 | sink (rejecting) |

pub mod address;
pub mod builder;

pub use address::EmailAddress;
pub use builder::EmailTokenBuilder;

use fsalex_engine::{ConfigError, Fsa, FsaConfig};

/// Text configuration of the bundled email automaton.
pub const EMAIL_CONFIG: &str = include_str!("../data/email.txt");

/// Parsed configuration of the bundled email automaton.
pub fn email_config() -> Result<FsaConfig, ConfigError> {
    FsaConfig::parse_text(EMAIL_CONFIG)
}

/// Build the bundled email automaton.
pub fn email_fsa() -> Result<Fsa, ConfigError> {
    Fsa::from_text(EMAIL_CONFIG)
}
