use std::fmt;

use itertools::Itertools;

use crate::PermutationIncrementerError;

/// This struct lazily enumerates every arrangement of its elements. It fixes
/// the element at its cursor as the head of each emitted arrangement and
/// delegates the remaining elements to a nested instance, rebuilding the
/// nested instance over the new remainder whenever the cursor advances.
#[derive(Debug)]
pub struct PermutationIncrementer<T> {
    elements: Vec<T>,
    cursor: usize,
    nested_permutation_incrementer: Option<Box<PermutationIncrementer<T>>>,
    is_exhausted: bool
}

impl<T: Clone> PermutationIncrementer<T> {
    pub fn from_elements(elements: Vec<T>) -> Self {
        let nested_permutation_incrementer: Option<Box<PermutationIncrementer<T>>>;
        if elements.len() >= 2 {
            let mut nested_elements = elements.clone();
            nested_elements.remove(0);
            nested_permutation_incrementer = Some(Box::new(PermutationIncrementer::from_elements(nested_elements)));
        }
        else {
            nested_permutation_incrementer = None;
        }
        PermutationIncrementer {
            elements: elements,
            cursor: 0,
            nested_permutation_incrementer: nested_permutation_incrementer,
            is_exhausted: false
        }
    }
    pub fn has_next(&self) -> bool {
        return !self.is_exhausted;
    }
    pub fn try_get_next_permutation(&mut self) -> Option<Vec<T>> {
        if self.is_exhausted {
            return None;
        }
        if self.elements.len() <= 1 {
            // the empty and single-element sequences are their own only arrangement
            self.is_exhausted = true;
            return Some(self.elements.clone());
        }
        loop {
            let nested_permutation_incrementer = self.nested_permutation_incrementer.as_mut().unwrap();
            if !nested_permutation_incrementer.is_exhausted {
                let mut permutation: Vec<T> = Vec::with_capacity(self.elements.len());
                permutation.push(self.elements[self.cursor].clone());
                let nested_permutation = nested_permutation_incrementer.try_get_next_permutation().expect("The non-exhausted nested permutation incrementer should provide another permutation.");
                permutation.extend(nested_permutation);
                if self.cursor == self.elements.len() - 1 && nested_permutation_incrementer.is_exhausted {
                    debug!("exhausted after emitting the final permutation");
                    self.is_exhausted = true;
                }
                return Some(permutation);
            }
            self.cursor += 1;
            if self.cursor >= self.elements.len() {
                // terminal guard; the emission at the final cursor already marks exhaustion
                self.is_exhausted = true;
                return None;
            }
            debug!("cursor advanced to {} of {}", self.cursor, self.elements.len());
            let mut nested_elements = self.elements.clone();
            nested_elements.remove(self.cursor);
            self.nested_permutation_incrementer = Some(Box::new(PermutationIncrementer::from_elements(nested_elements)));
        }
    }
    /// Reconstructs the most recently emitted arrangement without advancing.
    /// Still meaningful once exhausted, returning the final arrangement.
    pub fn get_current_permutation(&self) -> Vec<T> {
        if self.elements.len() <= 1 {
            return self.elements.clone();
        }
        let nested_permutation_incrementer = self.nested_permutation_incrementer.as_ref().unwrap();
        let mut permutation: Vec<T> = Vec::with_capacity(self.elements.len());
        permutation.push(self.elements[self.cursor].clone());
        permutation.extend(nested_permutation_incrementer.get_current_permutation());
        return permutation;
    }
    pub fn try_remove(&mut self) -> Result<(), PermutationIncrementerError> {
        // this structure is read-only
        return Err(PermutationIncrementerError::RemoveNotSupported);
    }
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.is_exhausted = false;
        if self.elements.len() >= 2 {
            let mut nested_elements = self.elements.clone();
            nested_elements.remove(0);
            self.nested_permutation_incrementer = Some(Box::new(PermutationIncrementer::from_elements(nested_elements)));
        }
    }
    pub fn get_elements_length(&self) -> usize {
        return self.elements.len();
    }
    pub fn get_permutations_total(&self) -> u64 {
        return crate::get_factorial(self.elements.len() as u64);
    }
}

impl PermutationIncrementer<usize> {
    pub fn from_count(count: usize) -> Self {
        let mut elements: Vec<usize> = Vec::with_capacity(count);
        for element in 1..=count {
            elements.push(element);
        }
        return PermutationIncrementer::from_elements(elements);
    }
}

impl<T: Clone> Iterator for PermutationIncrementer<T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_get_next_permutation()
    }
}

impl<T: fmt::Display> fmt::Display for PermutationIncrementer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elements.is_empty() {
            return write!(f, "( )");
        }
        write!(f, "( {} )", self.elements.iter().join(" "))
    }
}
