/// A deterministic machine that consumes one input at a time.
///
/// Implementors keep a mutable cursor over their states. A single caller
/// drives an instance at a time; the owner resets the cursor between
/// independent runs.
pub trait FiniteStateMachine {
    type State;
    type Input;
    type Error;

    /// The state the machine is currently in.
    fn current_state(&self) -> &Self::State;

    /// Consumes a single input, returning the new current state.
    ///
    /// On failure the current state is left untouched.
    ///
    /// # Errors
    ///
    /// Fails if the input is not accepted in the current state.
    fn transition(&mut self, input: Self::Input) -> Result<&Self::State, Self::Error>;

    /// Consumes every input in order and returns the final state.
    ///
    /// Transitions taken before a failing input are kept.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing [`transition`](Self::transition).
    fn process_input<I>(&mut self, inputs: I) -> Result<&Self::State, Self::Error>
    where
        I: IntoIterator<Item = Self::Input>;

    /// Moves the cursor back to the initial state.
    fn reset(&mut self);

    /// Whether the current state is a final state.
    fn is_accepting(&self) -> bool;

    /// Runs `inputs` from the initial state and reports acceptance.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`process_input`](Self::process_input).
    fn accepts<I>(&mut self, inputs: I) -> Result<bool, Self::Error>
    where
        I: IntoIterator<Item = Self::Input>,
    {
        self.reset();
        self.process_input(inputs)?;
        Ok(self.is_accepting())
    }
}
