//! Error types for the remainder-fsm crate.
//!
//! Each layer has its own error enum: [`FsmError`] for the generic engine,
//! [`RemainderError`] for the mod-3 automaton, and [`DefinitionError`] for
//! machines described in TOML. Every error is caused by caller input and
//! none are retryable.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// The construction check that rejected a machine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationCheck {
    /// The state set was empty.
    EmptyStates,
    /// The initial state is not a member of the state set.
    InitialState,
    /// A final state is not a member of the state set.
    FinalState,
    /// A transition leaves from an undeclared state.
    TransitionSource,
    /// A transition is labelled with a symbol outside the alphabet.
    TransitionSymbol,
    /// A transition leads to an undeclared state.
    TransitionTarget,
}

impl fmt::Display for ConfigurationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmptyStates => "States must not be empty",
            Self::InitialState => "Initial state must be in states list",
            Self::FinalState => "Final states must be in states list",
            Self::TransitionSource => "Transition source must be in states list",
            Self::TransitionSymbol => "Transition symbol must be in input alphabet",
            Self::TransitionTarget => "Transition target must be in states list",
        })
    }
}

/// Errors raised by [`GenericFsm`](crate::fsm::GenericFsm).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// The machine was constructed with an inconsistent configuration.
    #[error("{check}: {detail}")]
    Configuration {
        check: ConfigurationCheck,
        detail: String,
    },

    /// A symbol outside the declared alphabet was offered.
    #[error("Symbol {symbol} not in input alphabet")]
    InvalidSymbol { symbol: String },

    /// The transition table has no entry for the current state and symbol.
    #[error("No transition defined for state {state} and symbol {symbol}")]
    UndefinedTransition { state: String, symbol: String },
}

impl FsmError {
    pub(crate) fn configuration(check: ConfigurationCheck, detail: impl fmt::Display) -> Self {
        Self::Configuration {
            check,
            detail: detail.to_string(),
        }
    }

    /// Returns `true` if the error was raised while constructing a machine.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// The failed construction check, if this is a configuration error.
    #[must_use]
    pub const fn check(&self) -> Option<ConfigurationCheck> {
        match self {
            Self::Configuration { check, .. } => Some(*check),
            _ => None,
        }
    }
}

/// Errors raised by [`RemainderAutomaton`](crate::remainder::RemainderAutomaton).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemainderError {
    /// The binary string was empty.
    #[error("Input string cannot be empty")]
    EmptyInput,

    /// The binary string contained something other than `0` or `1`.
    #[error("Invalid character '{character}' at position {position}. Only '0' and '1' are allowed")]
    InvalidCharacter { character: char, position: usize },

    /// The underlying engine rejected the input.
    #[error(transparent)]
    Machine(#[from] FsmError),
}

impl RemainderError {
    /// Returns `true` if the error was caused by a malformed binary string.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InvalidCharacter { .. })
    }
}

/// Errors raised while loading a machine from a TOML definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Failed to read the definition file.
    #[error("Failed to read definition from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The definition is not valid TOML, or does not match the schema.
    #[error("Failed to parse definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// The definition could not be serialised back into TOML.
    #[error("Failed to serialise definition: {0}")]
    Serialise(#[from] toml::ser::Error),

    /// An alphabet entry or transition symbol is not a single character.
    #[error("Symbol {symbol:?} must be exactly one character")]
    InvalidSymbol { symbol: String },

    /// The same state and symbol are given more than one transition.
    #[error("Duplicate transition from {from} on symbol {symbol}")]
    DuplicateTransition { from: String, symbol: char },

    /// The described machine failed engine validation.
    #[error("Invalid machine: {0}")]
    Machine(#[from] FsmError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;

    #[test]
    fn test_fsm_error_display() {
        let err = FsmError::configuration(ConfigurationCheck::InitialState, "INVALID");
        assert_eq!(
            err.to_string(),
            "Initial state must be in states list: INVALID"
        );

        let err = FsmError::InvalidSymbol {
            symbol: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Symbol x not in input alphabet");

        let err = FsmError::UndefinedTransition {
            state: "S1".to_string(),
            symbol: "a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No transition defined for state S1 and symbol a"
        );
    }

    #[test]
    fn test_fsm_error_classification() {
        let err = FsmError::configuration(ConfigurationCheck::FinalState, "X");
        assert!(err.is_configuration());
        assert_eq!(err.check(), Some(ConfigurationCheck::FinalState));

        let err = FsmError::InvalidSymbol {
            symbol: "2".to_string(),
        };
        assert!(!err.is_configuration());
        assert_eq!(err.check(), None);
    }

    #[test]
    fn test_remainder_error_classification() {
        assert!(RemainderError::EmptyInput.is_input_error());
        assert!(
            RemainderError::InvalidCharacter {
                character: '2',
                position: 2
            }
            .is_input_error()
        );

        let err = RemainderError::from(FsmError::InvalidSymbol {
            symbol: "2".to_string(),
        });
        assert!(!err.is_input_error());
        assert_eq!(err.to_string(), "Symbol 2 not in input alphabet");
    }

    #[test]
    fn test_definition_error_source_chain() {
        let err = DefinitionError::Io {
            path: PathBuf::from("/nonexistent/machine.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Failed to read definition from /nonexistent/machine.toml: not found"
        );
    }
}
