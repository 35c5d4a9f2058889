// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Levenshtein alignment with pluggable edit costs.
//!
//! Unlike a plain edit distance, every cell of the table keeps the full
//! edit script that reaches it, so callers can inspect which elements were
//! replaced, inserted or deleted.

/// Kind of a single alignment operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Insert,
    Delete,
    Replace,
}

/// One alignment operation between a left and a right sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditOp<T> {
    /// Left value being replaced or deleted
    pub left_value: Option<T>,
    /// Right value being inserted or replaced with
    pub right_value: Option<T>,
    /// Position in the left sequence where the edit occurs
    pub left_position: usize,
}

impl<T> EditOp<T> {
    /// Replace `left` with `right`
    pub fn replace(left: T, right: T, left_position: usize) -> Self {
        Self {
            left_value: Some(left),
            right_value: Some(right),
            left_position,
        }
    }

    /// Insert `right` into the left sequence
    pub fn insert(right: T, left_position: usize) -> Self {
        Self {
            left_value: None,
            right_value: Some(right),
            left_position,
        }
    }

    /// Delete `left` from the left sequence
    pub fn delete(left: T, left_position: usize) -> Self {
        Self {
            left_value: Some(left),
            right_value: None,
            left_position,
        }
    }

    /// Which kind of operation this is
    pub fn kind(&self) -> EditKind {
        match (&self.left_value, &self.right_value) {
            (None, _) => EditKind::Insert,
            (_, None) => EditKind::Delete,
            _ => EditKind::Replace,
        }
    }
}

/// An edit script with its accumulated cost
#[derive(Debug, Clone, PartialEq)]
pub struct Edits<T> {
    edits: Vec<EditOp<T>>,
    cost: f64,
}

impl<T> Default for Edits<T> {
    fn default() -> Self {
        Self {
            edits: Vec::new(),
            cost: 0.0,
        }
    }
}

impl<T: Clone> Edits<T> {
    /// Create an edit script with an explicit cost
    pub fn new(edits: Vec<EditOp<T>>, cost: f64) -> Self {
        Self { edits, cost }
    }

    /// Create an edit script, costing every operation with `cost_fn`
    pub fn make<I, F>(edits: I, cost_fn: F) -> Self
    where
        I: IntoIterator<Item = EditOp<T>>,
        F: Fn(&EditOp<T>) -> f64,
    {
        let edits: Vec<EditOp<T>> = edits.into_iter().collect();
        let cost = edits.iter().map(&cost_fn).sum();
        Self { edits, cost }
    }

    /// Return a new script extended by `edit`
    ///
    /// An operation that costs nothing is not an edit, so the script is
    /// returned unchanged.
    pub fn append<F>(&self, edit: EditOp<T>, cost_fn: F) -> Self
    where
        F: Fn(&EditOp<T>) -> f64,
    {
        let marginal = cost_fn(&edit);
        if marginal == 0.0 {
            return self.clone();
        }

        let mut edits = self.edits.clone();
        edits.push(edit);
        Self {
            edits,
            cost: self.cost + marginal,
        }
    }

    /// The operations, in order
    pub fn edits(&self) -> &[EditOp<T>] {
        &self.edits
    }

    /// Total cost
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Check if the script has no operations
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Full dynamic-programming table of best edit scripts
///
/// Cell `(i, j)` holds the cheapest script turning `left[..=i]` into
/// `right[..=j]`. The table is filled eagerly, so lookups are constant time.
#[derive(Debug, Clone)]
pub struct LevenshteinEditMatrix<T> {
    left_len: usize,
    right_len: usize,
    /// Padded by one row and column holding the empty script
    cells: Vec<Vec<Edits<T>>>,
}

impl<T: Clone> LevenshteinEditMatrix<T> {
    /// Compute the table for `left` against `right`
    pub fn new<F>(left: &[T], right: &[T], cost_fn: F) -> Self
    where
        F: Fn(&EditOp<T>) -> f64,
    {
        let mut cells: Vec<Vec<Edits<T>>> = Vec::with_capacity(left.len() + 1);
        cells.push(vec![Edits::default(); right.len() + 1]);

        for (left_pos, left_value) in left.iter().enumerate() {
            let above = &cells[left_pos];
            let mut row: Vec<Edits<T>> = Vec::with_capacity(right.len() + 1);
            row.push(Edits::default());

            for (right_pos, right_value) in right.iter().enumerate() {
                let replace = above[right_pos].append(
                    EditOp::replace(left_value.clone(), right_value.clone(), left_pos),
                    &cost_fn,
                );
                let insert = row[right_pos]
                    .append(EditOp::insert(right_value.clone(), left_pos + 1), &cost_fn);
                let delete = above[right_pos + 1]
                    .append(EditOp::delete(left_value.clone(), left_pos), &cost_fn);

                // Ties keep the earlier candidate: replace, then insert, then delete
                let mut best = replace;
                for candidate in [insert, delete] {
                    if candidate.cost < best.cost {
                        best = candidate;
                    }
                }
                row.push(best);
            }

            cells.push(row);
        }

        Self {
            left_len: left.len(),
            right_len: right.len(),
            cells,
        }
    }

    /// Best script aligning `left[..=left_pos]` with `right[..=right_pos]`
    ///
    /// # Panics
    ///
    /// Panics if either position is outside its sequence, like slice indexing.
    pub fn at(&self, left_pos: usize, right_pos: usize) -> &Edits<T> {
        &self.cells[left_pos + 1][right_pos + 1]
    }

    /// Best script for a cell, or `None` outside the table
    pub fn get(&self, left_pos: usize, right_pos: usize) -> Option<&Edits<T>> {
        if left_pos >= self.left_len || right_pos >= self.right_len {
            return None;
        }
        Some(&self.cells[left_pos + 1][right_pos + 1])
    }

    /// Best script aligning the whole of both sequences
    pub fn best_edits(&self) -> &Edits<T> {
        &self.cells[self.left_len][self.right_len]
    }
}
