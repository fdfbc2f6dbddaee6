//! A generic deterministic finite-state machine engine, and a three-state
//! automaton built on it that computes the remainder of a binary number
//! divided by three.
//!
//! ```
//! use remainder_fsm::RemainderAutomaton;
//!
//! let mut automaton = RemainderAutomaton::new();
//! assert_eq!(automaton.compute_remainder("1010").unwrap(), 1);
//! assert_eq!(automaton.compute_remainder("1111").unwrap(), 0);
//! ```

pub mod error;
pub mod fsm;
pub mod logging;
pub mod remainder;
pub mod traits;

pub use tracing;

pub use self::{
    error::{ConfigurationCheck, DefinitionError, FsmError, RemainderError},
    fsm::{FsmDefinition, GenericFsm, TransitionTable},
    remainder::{RemainderAutomaton, Residue},
    traits::FiniteStateMachine,
};
