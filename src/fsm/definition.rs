//! TOML description of a machine over string states and single-character
//! symbols.
//!
//! ```toml
//! states = ["even", "odd"]
//! alphabet = ["a", "b"]
//! initial = "even"
//! finals = ["even"]
//!
//! [[transitions]]
//! from = "even"
//! symbol = "b"
//! to = "odd"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GenericFsm, TransitionTable};
use crate::{error::DefinitionError, remainder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub from: String,
    pub symbol: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmDefinition {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub initial: String,

    #[serde(default)]
    pub finals: Vec<String>,

    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
}

fn symbol(value: &str) -> Result<char, DefinitionError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(DefinitionError::InvalidSymbol {
            symbol: value.to_string(),
        }),
    }
}

impl FsmDefinition {
    /// Parses a definition from TOML text.
    ///
    /// # Errors
    ///
    /// Fails if the text is not valid TOML or is missing required fields.
    pub fn from_toml_str(content: &str) -> Result<Self, DefinitionError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a definition file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Renders the definition as TOML.
    ///
    /// # Errors
    ///
    /// Fails if serialisation fails.
    pub fn to_toml_string(&self) -> Result<String, DefinitionError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds a validated machine from this definition.
    ///
    /// # Errors
    ///
    /// Fails if a symbol is not exactly one character, a state and symbol
    /// pair has more than one transition, or the machine fails
    /// [`GenericFsm::new`] validation.
    pub fn build(&self) -> Result<GenericFsm<String, char>, DefinitionError> {
        let alphabet = self
            .alphabet
            .iter()
            .map(|entry| symbol(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = TransitionTable::new();
        for edge in &self.transitions {
            let on = symbol(&edge.symbol)?;
            if table
                .insert(edge.from.clone(), on, edge.to.clone())
                .is_some()
            {
                return Err(DefinitionError::DuplicateTransition {
                    from: edge.from.clone(),
                    symbol: on,
                });
            }
        }

        Ok(GenericFsm::new(
            self.states.iter().cloned(),
            alphabet,
            self.initial.clone(),
            self.finals.iter().cloned(),
            table,
        )?)
    }

    /// The mod-3 remainder automaton.
    #[must_use]
    pub fn remainder() -> Self {
        let states = remainder::Residue::ALL
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        Self {
            finals: states.clone(),
            states,
            alphabet: remainder::ALPHABET.iter().map(ToString::to_string).collect(),
            initial: remainder::Residue::S0.to_string(),
            transitions: remainder::TRANSITIONS
                .iter()
                .map(|(from, symbol, to)| TransitionDefinition {
                    from: from.to_string(),
                    symbol: symbol.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }
}
