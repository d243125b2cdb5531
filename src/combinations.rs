use std::iter::FusedIterator;

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::{
    count::choose,
    error::{Error, Result},
};

/// Lazily walks through every `k`-element combination of a list of items, in lexicographic
/// order of the picked positions.
///
/// Combinations are positional: if `items` contains equal values, combinations that only
/// differ in which of those equal values they picked are still produced separately.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    items: Box<[T]>,
    k: usize,
    // Positions of the combination returned by the *next* call, `None` once exhausted
    indices: Option<Vec<usize>>,
    // Positions of the combination returned by the *previous* call
    last_indices: Option<Vec<usize>>,
    combination_number: BigUint,
    total: BigUint,
}
impl<T: Clone> Combinations<T> {
    /// Copies `items`, so later changes to the original are not observed.
    /// # Errors
    /// - `InvalidChoiceSize` if `k` isnt inside of `1..=items.len()`
    pub fn new(items: &[T], k: usize) -> Result<Self> {
        Self::from_vec(items.to_vec(), k)
    }

    /// Produces the next combination and moves on to the one after it.
    /// # Errors
    /// - `ExhaustedIterator` if every combination has already been produced
    pub fn try_next(&mut self) -> Result<Vec<T>> {
        let Some(indices) = &self.indices else {
            return Err(Error::ExhaustedIterator {
                total: self.total.clone(),
            });
        };

        self.combination_number += 1u32;
        let combination = indices
            .iter()
            .map(|&index| self.items[index].clone())
            .collect();

        // Capture before moving the indices
        self.last_indices.clone_from(&self.indices);
        self.increment_indices();

        Ok(combination)
    }
}
impl<T> Combinations<T> {
    /// Like [`Combinations::new`], but takes ownership of `items` instead of copying them.
    /// # Errors
    /// - `InvalidChoiceSize` if `k` isnt inside of `1..=items.len()`
    pub fn from_vec(items: Vec<T>, k: usize) -> Result<Self> {
        let n = items.len();
        if k < 1 || k > n {
            return Err(Error::InvalidChoiceSize { k, n });
        }

        let total = choose(n, k);
        debug!("picking {k} out of {n} items, {total} combinations");

        Ok(Self {
            items: items.into_boxed_slice(),
            k,
            indices: Some((0..k).collect()),
            last_indices: None,
            combination_number: BigUint::zero(),
            total,
        })
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.indices.is_some()
    }

    /// How many combinations have been produced so far, so the 1-based number of the last one
    #[must_use]
    pub const fn current_combination_number(&self) -> &BigUint {
        &self.combination_number
    }

    #[must_use]
    pub const fn total_combination_count(&self) -> &BigUint {
        &self.total
    }

    /// Positions of the most recently produced combination
    #[must_use]
    pub fn last_indices(&self) -> Option<&[usize]> {
        self.last_indices.as_deref()
    }

    /// [`Combinations::last_indices`] formatted like `[0, 2, 3]`
    #[must_use]
    pub fn indices_as_string(&self) -> Option<String> {
        self.last_indices.as_ref().map(|indices| format!("{indices:?}"))
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// `k`, the number of items in every combination
    #[must_use]
    pub const fn choice_size(&self) -> usize {
        self.k
    }

    fn increment_indices(&mut self) {
        let (n, k) = (self.items.len(), self.k);
        let Some(indices) = &mut self.indices else {
            return;
        };

        // For each index, starting at the rightmost one
        for index in (0..k).rev() {
            // See if it can be incremented
            if indices[index] != index + n - k {
                indices[index] += 1;

                // All indices to the right are at their maximum, so pack them right behind it
                for right_index in index + 1..k {
                    indices[right_index] = indices[right_index - 1] + 1;
                }

                trace!("next indices: {indices:?}");
                return;
            }
        }

        // Every index is at its maximum
        debug!("exhausted after {} combinations", self.combination_number);
        self.indices = None;
    }
}
impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        self.try_next().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = &self.total - &self.combination_number;
        remaining
            .to_usize()
            .map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
    }
}
impl<T: Clone> FusedIterator for Combinations<T> {}
