//! Insertion-ordered keyed table

use std::collections::HashMap;

use fitness_core::RecordId;

/// Rows in insertion order plus an id -> position index
#[derive(Debug)]
pub(crate) struct Table<T> {
    index: HashMap<RecordId, usize>,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            rows: Vec::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Append a row. Returns false (and stores nothing) if the id is taken.
    pub(crate) fn insert(&mut self, id: RecordId, row: T) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.rows.len());
        self.rows.push(row);
        true
    }

    pub(crate) fn get(&self, id: &RecordId) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.rows[pos])
    }

    /// Swap the stored row for `row`, keeping its position
    pub(crate) fn replace(&mut self, id: &RecordId, row: T) -> bool {
        match self.index.get(id) {
            Some(&pos) => {
                self.rows[pos] = row;
                true
            }
            None => false,
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}
