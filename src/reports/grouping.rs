use std::collections::HashMap;

use crate::reports::Ranking;

/// Per-key accumulator that remembers the order in which keys first appeared.
pub(crate) struct Grouped<V> {
    index: HashMap<String, usize>,
    groups: Ranking<V>
}

impl<V: Default> Grouped<V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new()
        }
    }

    pub fn entry(&mut self, key: &str) -> &mut V {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.groups.len();
                self.index.insert(key.to_string(), position);
                self.groups.push((key.to_string(), V::default()));
                position
            }
        };

        &mut self.groups[position].1
    }

    pub fn into_first_seen(self) -> Ranking<V> {
        self.groups
    }
}

impl<V: Default + Ord> Grouped<V> {
    /// Sorts by value, largest first. `sort_by` is stable, so equal values keep first-seen order.
    pub fn into_ranked(self) -> Ranking<V> {
        let mut groups = self.groups;
        groups.sort_by(|left, right| right.1.cmp(&left.1));
        groups
    }
}
