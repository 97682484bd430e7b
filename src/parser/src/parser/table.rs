//! The state table

use crate::{matcher::Matcher, parser::Action};

/// One way out of a state.
#[derive(Debug, Clone)]
pub struct Transition<R> {
    matcher: Matcher,
    next: isize,
    action: Option<Action<R>>,
}

impl<R> Transition<R> {
    pub fn new(
        matcher: Matcher,
        next: isize,
        action: Option<Action<R>>,
    ) -> Self {
        Transition {
            matcher,
            next,
            action,
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The destination as declared. Negative means there isn't one.
    pub fn next(&self) -> isize {
        self.next
    }

    /// The destination, if there is one.
    pub fn next_state(&self) -> Option<usize> {
        usize::try_from(self.next).ok()
    }

    pub fn action(&self) -> Option<&Action<R>> {
        self.action.as_ref()
    }
}

/// States and their transitions, indexed by state number.
///
/// States can be added in any order. Any state numbers skipped over are
/// gaps, which behave like states with no transitions.
#[derive(Debug, Clone)]
pub struct StateTable<R> {
    states: Vec<Option<Vec<Transition<R>>>>,
}

impl<R> StateTable<R> {
    pub fn new() -> Self {
        StateTable { states: Vec::new() }
    }

    /// Add a transition to the end of a state's list, growing the table if
    /// needed.
    pub fn add(&mut self, state: usize, transition: Transition<R>) {
        if state >= self.states.len() {
            self.states.resize_with(state + 1, || None);
        }

        self.states[state]
            .get_or_insert_with(Vec::new)
            .push(transition);
    }

    /// The transitions out of a state, in the order they were added.
    pub fn transitions(&self, state: usize) -> &[Transition<R>] {
        match self.states.get(state) {
            Some(Some(transitions)) => transitions,
            _ => &[],
        }
    }

    /// Has anything been added to `state`?
    pub fn is_declared(&self, state: usize) -> bool {
        matches!(self.states.get(state), Some(Some(_)))
    }

    /// One more than the highest state number used.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Every transition with the state it leaves from, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Transition<R>)> {
        self.states.iter().enumerate().flat_map(|(state, transitions)| {
            transitions
                .iter()
                .flatten()
                .map(move |transition| (state, transition))
        })
    }

    /// A comparable summary of the table, as `(state, label, next)`.
    pub fn entries(&self) -> Vec<(usize, String, isize)> {
        self.iter()
            .map(|(state, t)| (state, t.matcher.label(), t.next))
            .collect()
    }
}

impl<R> Default for StateTable<R> {
    fn default() -> Self {
        StateTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(next: isize) -> Transition<()> {
        Transition::new(Matcher::Any, next, None)
    }

    #[test]
    fn grows_with_gaps() {
        let mut table = StateTable::new();
        table.add(3, t(4));

        assert_eq!(table.len(), 4);
        assert!(table.transitions(0).is_empty());
        assert!(!table.is_declared(1));
        assert!(table.is_declared(3));
        assert!(table.transitions(10).is_empty());
    }

    #[test]
    fn keeps_declaration_order() {
        let mut table = StateTable::new();
        table.add(0, t(1));
        table.add(0, t(2));

        let nexts: Vec<isize> =
            table.transitions(0).iter().map(Transition::next).collect();
        assert_eq!(nexts, [1, 2]);
    }

    #[test]
    fn negative_destinations() {
        assert_eq!(t(-1).next_state(), None);
        assert_eq!(t(7).next_state(), Some(7));
    }

    #[test]
    fn iterates_in_state_order() {
        let mut table = StateTable::new();
        table.add(2, t(3));
        table.add(0, t(2));

        let entries = table.entries();
        assert_eq!(
            entries,
            [(0, "MATCH_ANY".to_string(), 2), (2, "MATCH_ANY".to_string(), 3)]
        );
    }
}
