//! Remainder of a binary number modulo three.
//!
//! A three-state machine reads the most significant bit first. Reading bit
//! `b` in the state for remainder `r` moves to the state for `(2r + b) mod 3`.
//! The table below encodes that directly instead of doing arithmetic:
//!
//! | state | `0` | `1` |
//! |-------|-----|-----|
//! | S0    | S0  | S1  |
//! | S1    | S2  | S0  |
//! | S2    | S1  | S2  |

use core::fmt::{self, Display, Formatter};

use crate::{
    automaton,
    error::RemainderError,
    fsm::{GenericFsm, TransitionTable},
    traits::FiniteStateMachine,
};

/// A state of the remainder machine, named after the remainder it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Residue {
    S0,
    S1,
    S2,
}

impl Residue {
    pub const ALL: [Self; 3] = [Self::S0, Self::S1, Self::S2];

    /// The remainder this state maps to.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
        }
    }

    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::S0),
            1 => Some(Self::S1),
            2 => Some(Self::S2),
            _ => None,
        }
    }
}

impl Display for Residue {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        fmt.write_str(match self {
            Self::S0 => "S0",
            Self::S1 => "S1",
            Self::S2 => "S2",
        })
    }
}

pub(crate) const ALPHABET: [char; 2] = ['0', '1'];

pub(crate) const TRANSITIONS: [(Residue, char, Residue); 6] = [
    (Residue::S0, '0', Residue::S0),
    (Residue::S0, '1', Residue::S1),
    (Residue::S1, '0', Residue::S2),
    (Residue::S1, '1', Residue::S0),
    (Residue::S2, '0', Residue::S1),
    (Residue::S2, '1', Residue::S2),
];

/// Computes `n mod 3` for binary strings by running them through a
/// [`GenericFsm`].
///
/// Each call to [`compute_remainder`](Self::compute_remainder) resets the
/// machine first, so one instance can be reused for any number of inputs.
/// It is not meant to be shared between threads; construct one per caller.
#[derive(Debug, Clone)]
pub struct RemainderAutomaton {
    fsm: GenericFsm<Residue, char>,
}

impl Default for RemainderAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

impl RemainderAutomaton {
    #[must_use]
    pub fn new() -> Self {
        automaton!(level = INFO, "Initializing remainder automaton");

        let table = TRANSITIONS
            .iter()
            .map(|&(from, symbol, to)| ((from, symbol), to))
            .collect::<TransitionTable<_, _>>();

        for (from, symbol, to) in &TRANSITIONS {
            automaton!(level = DEBUG, "  {from} --{symbol}--> {to}");
        }

        #[allow(
            clippy::expect_used,
            reason = "the mod-3 configuration is fixed and declares every state it uses"
        )]
        let fsm = GenericFsm::new(Residue::ALL, ALPHABET, Residue::S0, Residue::ALL, table)
            .expect("remainder automaton configuration should be valid");

        automaton!(level = INFO, "Remainder automaton initialized successfully");

        Self { fsm }
    }

    /// The wrapped engine.
    #[must_use]
    pub const fn fsm(&self) -> &GenericFsm<Residue, char> {
        &self.fsm
    }

    /// The fixed terminal state to remainder mapping.
    #[must_use]
    pub fn remainder_map() -> [(Residue, u8); 3] {
        Residue::ALL.map(|state| (state, state.value()))
    }

    /// Checks that `binary` holds only `0` and `1`.
    ///
    /// # Errors
    ///
    /// Returns [`RemainderError::InvalidCharacter`] for the first other
    /// character found.
    pub fn validate_input_string(binary: &str) -> Result<(), RemainderError> {
        automaton!(level = DEBUG, "Validating input string: {binary}");

        if let Some((position, character)) = binary
            .chars()
            .enumerate()
            .find(|(_, character)| !ALPHABET.contains(character))
        {
            automaton!(
                level = ERROR,
                "Invalid character '{character}' at position {position} in input string"
            );
            return Err(RemainderError::InvalidCharacter {
                character,
                position,
            });
        }

        automaton!(level = DEBUG, "Input string validation successful");
        Ok(())
    }

    /// Returns the value of `binary` modulo 3.
    ///
    /// # Errors
    ///
    /// Fails with [`RemainderError::EmptyInput`] for an empty string and
    /// [`RemainderError::InvalidCharacter`] for anything but `0` and `1`.
    pub fn compute_remainder(&mut self, binary: &str) -> Result<u8, RemainderError> {
        automaton!(level = INFO, "Computing remainder for binary string: {binary}");

        if binary.is_empty() {
            automaton!(level = ERROR, "Empty input string provided");
            return Err(RemainderError::EmptyInput);
        }

        self.fsm.reset();
        Self::validate_input_string(binary)?;

        let terminal = *self.fsm.process_input(binary.chars())?;
        let remainder = terminal.value();

        automaton!(
            level = INFO,
            "Computation complete. Binary: {binary} = {remainder} (mod 3)"
        );

        Ok(remainder)
    }

    /// Whether `binary` is a multiple of three.
    ///
    /// # Errors
    ///
    /// See [`compute_remainder`](Self::compute_remainder).
    pub fn is_divisible(&mut self, binary: &str) -> Result<bool, RemainderError> {
        Ok(self.compute_remainder(binary)? == 0)
    }
}
