//! A generic deterministic finite-state machine.
//!
//! [`GenericFsm`] owns a set of states, an input alphabet, an initial state,
//! a set of final states and a [`TransitionTable`]. The configuration is
//! checked once at construction; every symbol is checked again when it is
//! consumed.

pub mod definition;
pub mod table;

use std::{
    collections::HashSet,
    fmt::{Debug, Display},
    hash::Hash,
};

pub use self::{definition::FsmDefinition, table::TransitionTable};
use crate::{
    engine,
    error::{ConfigurationCheck, FsmError},
    traits::FiniteStateMachine,
};

/// A deterministic finite-state machine with a mutable cursor.
///
/// The machine never resets itself between runs. Callers either call
/// [`reset`](FiniteStateMachine::reset) before each new sequence, or use
/// [`accepts`](FiniteStateMachine::accepts) which does so for them.
#[derive(Debug, Clone)]
pub struct GenericFsm<S, I> {
    states: HashSet<S>,
    alphabet: HashSet<I>,
    initial: S,
    finals: HashSet<S>,
    table: TransitionTable<S, I>,
    current: S,
}

impl<S, I> GenericFsm<S, I>
where
    S: Clone + Eq + Hash + Debug + Display,
    I: Clone + Eq + Hash + Debug + Display,
{
    /// Builds and validates a machine.
    ///
    /// # Errors
    ///
    /// Returns [`FsmError::Configuration`] if the state set is empty, the
    /// initial state or a final state is not declared, or a transition uses
    /// an undeclared state or a symbol outside the alphabet.
    pub fn new(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = I>,
        initial: S,
        finals: impl IntoIterator<Item = S>,
        table: TransitionTable<S, I>,
    ) -> Result<Self, FsmError> {
        let states = states.into_iter().collect::<HashSet<_>>();
        let alphabet = alphabet.into_iter().collect::<HashSet<_>>();
        let finals = finals.into_iter().collect::<HashSet<_>>();

        engine!(
            level = INFO,
            "Initializing FSM with states={:?}, alphabet={:?}",
            states,
            alphabet
        );
        engine!(
            level = DEBUG,
            "Initial state: {initial}, final states: {finals:?}, {} transitions",
            table.len()
        );

        if states.is_empty() {
            engine!(level = ERROR, "Invalid configuration: no states declared");
            return Err(FsmError::configuration(
                ConfigurationCheck::EmptyStates,
                "no states declared",
            ));
        }

        if !states.contains(&initial) {
            engine!(level = ERROR, "Invalid initial state: {initial} not in states");
            return Err(FsmError::configuration(
                ConfigurationCheck::InitialState,
                &initial,
            ));
        }

        if let Some(state) = finals.iter().find(|state| !states.contains(*state)) {
            engine!(level = ERROR, "Invalid final state: {state} not in states");
            return Err(FsmError::configuration(ConfigurationCheck::FinalState, state));
        }

        for (from, symbol, to) in table.iter() {
            let edge = format!("{from} --{symbol}--> {to}");
            let check = if !states.contains(from) {
                ConfigurationCheck::TransitionSource
            } else if !alphabet.contains(symbol) {
                ConfigurationCheck::TransitionSymbol
            } else if !states.contains(to) {
                ConfigurationCheck::TransitionTarget
            } else {
                continue;
            };

            engine!(level = ERROR, "Invalid transition {edge}: {check}");
            return Err(FsmError::configuration(check, edge));
        }

        engine!(level = INFO, "FSM initialized successfully");

        Ok(Self {
            states,
            alphabet,
            current: initial.clone(),
            initial,
            finals,
            table,
        })
    }

    #[must_use]
    pub const fn states(&self) -> &HashSet<S> {
        &self.states
    }

    #[must_use]
    pub const fn alphabet(&self) -> &HashSet<I> {
        &self.alphabet
    }

    #[must_use]
    pub const fn initial_state(&self) -> &S {
        &self.initial
    }

    #[must_use]
    pub const fn final_states(&self) -> &HashSet<S> {
        &self.finals
    }

    #[must_use]
    pub const fn table(&self) -> &TransitionTable<S, I> {
        &self.table
    }

    /// Like [`process_input`](FiniteStateMachine::process_input), but restores
    /// the state held before the call if any symbol fails.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing transition.
    pub fn process_input_atomic<T>(&mut self, inputs: T) -> Result<&S, FsmError>
    where
        T: IntoIterator<Item = I>,
    {
        let checkpoint = self.current.clone();
        let outcome = self.process_input(inputs).map(|_| ());

        if let Err(err) = outcome {
            engine!(level = DEBUG, "Rolling back to {checkpoint}");
            self.current = checkpoint;
            return Err(err);
        }

        Ok(&self.current)
    }
}

impl<S, I> FiniteStateMachine for GenericFsm<S, I>
where
    S: Clone + Eq + Hash + Debug + Display,
    I: Clone + Eq + Hash + Debug + Display,
{
    type State = S;
    type Input = I;
    type Error = FsmError;

    fn current_state(&self) -> &S {
        &self.current
    }

    fn transition(&mut self, symbol: I) -> Result<&S, FsmError> {
        engine!(
            level = DEBUG,
            "Attempting transition from {} with symbol {symbol}",
            self.current
        );

        if !self.alphabet.contains(&symbol) {
            engine!(
                level = ERROR,
                "Invalid symbol: {symbol} not in alphabet {:?}",
                self.alphabet
            );
            return Err(FsmError::InvalidSymbol {
                symbol: symbol.to_string(),
            });
        }

        let Some(next) = self.table.get(&self.current, &symbol).cloned() else {
            engine!(
                level = ERROR,
                "No transition defined for state {} and symbol {symbol}",
                self.current
            );
            return Err(FsmError::UndefinedTransition {
                state: self.current.to_string(),
                symbol: symbol.to_string(),
            });
        };

        engine!(level = DEBUG, "Transition: {} --{symbol}--> {next}", self.current);
        self.current = next;

        Ok(&self.current)
    }

    fn process_input<T>(&mut self, inputs: T) -> Result<&S, FsmError>
    where
        T: IntoIterator<Item = I>,
    {
        engine!(level = DEBUG, "Processing input from state {}", self.current);

        for symbol in inputs {
            self.transition(symbol)?;
        }

        engine!(
            level = DEBUG,
            "Input sequence processed. Final state: {}",
            self.current
        );

        Ok(&self.current)
    }

    fn reset(&mut self) {
        engine!("FSM reset to initial state {}", self.initial);
        self.current = self.initial.clone();
    }

    fn is_accepting(&self) -> bool {
        self.finals.contains(&self.current)
    }
}
