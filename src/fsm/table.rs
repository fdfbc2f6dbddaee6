use std::{collections::HashMap, hash::Hash};

/// Mapping from `(state, symbol)` to the next state.
///
/// Stored as two levels, state then symbol, so a lookup never needs to
/// build a composite key. Partial tables are allowed.
#[derive(Debug, Clone)]
pub struct TransitionTable<S, I> {
    edges: HashMap<S, HashMap<I, S>>,
}

impl<S, I> Default for TransitionTable<S, I> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<S, I> TransitionTable<S, I>
where
    S: Eq + Hash,
    I: Eq + Hash,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edge, returning the target it replaced, if any.
    pub fn insert(&mut self, from: S, symbol: I, to: S) -> Option<S> {
        self.edges.entry(from).or_default().insert(symbol, to)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, from: S, symbol: I, to: S) -> Self {
        self.insert(from, symbol, to);
        self
    }

    #[must_use]
    pub fn get(&self, from: &S, symbol: &I) -> Option<&S> {
        self.edges.get(from).and_then(|row| row.get(symbol))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(from, symbol, to)` triples in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &I, &S)> {
        self.edges
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(symbol, to)| (from, symbol, to)))
    }
}

impl<S, I> FromIterator<((S, I), S)> for TransitionTable<S, I>
where
    S: Eq + Hash,
    I: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = ((S, I), S)>>(iter: T) -> Self {
        let mut table = Self::new();
        for ((from, symbol), to) in iter {
            table.insert(from, symbol, to);
        }
        table
    }
}

impl<S, I> Extend<((S, I), S)> for TransitionTable<S, I>
where
    S: Eq + Hash,
    I: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = ((S, I), S)>>(&mut self, iter: T) {
        for ((from, symbol), to) in iter {
            self.insert(from, symbol, to);
        }
    }
}
