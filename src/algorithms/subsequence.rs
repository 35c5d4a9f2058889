// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Subsequence search over circular sequences of distances.
//!
//! The searched sequence is read as the distance from each element to the
//! next one, wrapping around at the end. A jump table records, for every
//! starting element, the distance covered after one, two, ... hops, so a
//! needle of distances can be matched from any rotation by walking rows.

use std::fmt::Debug;
use std::ops::Add;

use trait_set::trait_set;

use crate::error::{MusicError, MusicResult};

trait_set! {
    pub trait SeqItem = Copy + Ord + Debug;
}

/// Jump table over a circular sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsequenceSearcher<T> {
    /// `search_matrix[i][j]` is the distance from element `i` after `j + 1` hops
    search_matrix: Vec<Vec<T>>,
}

impl<T> SubsequenceSearcher<T>
where
    T: SeqItem + Add<Output = T>,
{
    /// Build the jump table for a circular sequence
    ///
    /// Fails when any row of the table is not strictly increasing, which
    /// happens when the sequence holds zero or negative distances.
    ///
    /// # Panics
    ///
    /// Sums of distances use the element's `Add`, so for integer elements
    /// they panic on overflow in debug builds.
    pub fn new<I: IntoIterator<Item = T>>(sequence: I) -> MusicResult<Self> {
        let sequence: Vec<T> = sequence.into_iter().collect();
        let length = sequence.len();

        let search_matrix = match length {
            0 => Vec::new(),
            // The only possible jump loops all the way around
            1 => vec![sequence.clone()],
            _ => {
                let total = sequence[1..].iter().fold(sequence[0], |acc, &x| acc + x);

                // hop_rows[k][i] is the distance from element i after k + 1 hops
                let mut hop_rows = vec![sequence.clone()];
                for k in 0..length - 1 {
                    let next: Vec<T> = hop_rows[k]
                        .iter()
                        .enumerate()
                        .map(|(i, &x)| x + sequence[(i + k + 1) % length])
                        .collect();
                    hop_rows.push(next);
                }

                let full_loop = hop_rows.pop().unwrap_or_default();
                debug_assert!(
                    full_loop.iter().all(|&x| x == total),
                    "the last hop row must loop around the entire sequence"
                );

                transpose(&hop_rows, length)
            }
        };

        for (row_index, row) in search_matrix.iter().enumerate() {
            if row.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(MusicError::UnorderedJumps { row: row_index });
            }
        }

        Ok(Self { search_matrix })
    }

    /// Number of starting positions
    pub fn len(&self) -> usize {
        self.search_matrix.len()
    }

    /// Check if the searched sequence was empty
    pub fn is_empty(&self) -> bool {
        self.search_matrix.is_empty()
    }

    /// Rows of the jump table, one per starting position
    pub fn rows(&self) -> &[Vec<T>] {
        &self.search_matrix
    }

    /// Find every starting index where `needle` occurs as a run of jumps
    ///
    /// The returned iterator is lazy and yields indices in ascending order.
    /// An empty needle matches at every starting index.
    pub fn find_subsequence_indices<'a>(&'a self, needle: &'a [T]) -> SubsequenceIndices<'a, T> {
        SubsequenceIndices {
            searcher: self,
            needle,
            next_start: 0,
        }
    }

    fn matches_from(&self, start: usize, needle: &[T]) -> bool {
        let length = self.search_matrix.len();
        let mut current = start;

        for element in needle {
            let row = &self.search_matrix[current];
            match row.binary_search(element) {
                Ok(jump_index) => current = (current + jump_index + 1) % length,
                Err(_) => return false,
            }
        }

        true
    }
}

/// Lazy iterator over matching start indices
#[derive(Debug, Clone)]
pub struct SubsequenceIndices<'a, T> {
    searcher: &'a SubsequenceSearcher<T>,
    needle: &'a [T],
    next_start: usize,
}

impl<T> Iterator for SubsequenceIndices<'_, T>
where
    T: SeqItem + Add<Output = T>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next_start < self.searcher.len() {
            let start = self.next_start;
            self.next_start += 1;
            if self.searcher.matches_from(start, self.needle) {
                return Some(start);
            }
        }
        None
    }
}

fn transpose<T: Copy>(rows: &[Vec<T>], width: usize) -> Vec<Vec<T>> {
    (0..width)
        .map(|column| rows.iter().map(|row| row[column]).collect())
        .collect()
}
