use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::crayon_assert_simple;

/// A stack of change records, partitioned into decision levels.
///
/// Every tentative assignment made by the search opens a new decision level; all changes which
/// are caused by that assignment (the assignment itself, auto-assignments and pruned colours) are
/// pushed onto the trail at that level. Backtracking to a lower level hands back exactly those
/// changes, most recent first, so that they can be undone in reverse order.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_decision_level: usize,
    /// At index i is the position where the i-th decision level ends (exclusive) on the trail
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// We explicitly implement the Default and not as a macro, because we want to avoid imposing Default
// on the generic type T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_decision_level: Default::default(),
            trail_delimiter: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.current_decision_level += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn values_on_decision_level(&self, decision_level: usize) -> &[T] {
        crayon_assert_simple!(decision_level <= self.current_decision_level);

        let start = if decision_level == 0 {
            0
        } else {
            self.trail_delimiter[decision_level - 1]
        };

        let end = if decision_level == self.current_decision_level {
            self.trail.len()
        } else {
            self.trail_delimiter[decision_level]
        };

        &self.trail[start..end]
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.current_decision_level
    }

    /// Removes every change recorded above `new_decision_level` and returns them in the reverse
    /// order of recording.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) -> Rev<Drain<'_, T>> {
        crayon_assert_simple!(new_decision_level < self.current_decision_level);

        let new_trail_len = self.trail_delimiter[new_decision_level];

        self.current_decision_level = new_decision_level;
        self.trail_delimiter.truncate(new_decision_level);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
