// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

/// Substring-reachability matrix for one sub-expression.
///
/// A square boolean table of side `N + 1` where `N` is the word length.
/// `get(i, j)` is true iff the substring `word[i..j)` (the empty string when
/// `i == j`) is generated by the sub-expression this matrix represents.
/// Only the upper triangle `i <= j` is ever set or consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachMatrix {
    // side length, N + 1
    size: usize,
    // row-major, size * size
    cells: Vec<bool>,
}

impl ReachMatrix {
    /// Creates an all-false matrix for a word of `word_len` bytes.
    pub fn empty(word_len: usize) -> Self {
        let size = word_len + 1;
        ReachMatrix {
            size,
            cells: vec![false; size * size],
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.size + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize) {
        self.cells[i * self.size + j] = true;
    }

    pub fn word_len(&self) -> usize {
        self.size - 1
    }

    /// Matrix for a single-symbol literal: each one-byte substring equal to
    /// `symbol` is reachable.
    pub fn symbol(word: &[u8], symbol: u8) -> Self {
        let mut matrix = ReachMatrix::empty(word.len());
        for (i, &byte) in word.iter().enumerate() {
            if byte == symbol {
                matrix.set(i, i + 1);
            }
        }
        matrix
    }

    /// Matrix for the empty-string literal: the empty substring starting at
    /// any position is reachable.
    pub fn empty_string(word_len: usize) -> Self {
        let mut matrix = ReachMatrix::empty(word_len);
        for i in 0..=word_len {
            matrix.set(i, i);
        }
        matrix
    }

    /// Union: merges `other` into `self` in place.
    pub fn merge(&mut self, other: &ReachMatrix) {
        for i in 0..self.size {
            for j in i..self.size {
                if other.get(i, j) {
                    self.set(i, j);
                }
            }
        }
    }

    /// Concatenation: `word[i..j)` is reachable iff it splits at some `k`
    /// into a `first` part `[i..k)` and a `second` part `[k..j)`.
    pub fn concat(first: &ReachMatrix, second: &ReachMatrix) -> Self {
        let n = first.word_len();
        let mut matrix = ReachMatrix::empty(n);
        for i in 0..=n {
            for j in i..=n {
                for k in i..=j {
                    if first.get(i, k) && second.get(k, j) {
                        matrix.set(i, j);
                        break;
                    }
                }
            }
        }
        matrix
    }

    /// Kleene star: zero or more repetitions of `inner`.
    ///
    /// Filled row by row in increasing `j` order, reading back entries of the
    /// matrix under construction: `[i..j)` is reachable iff some already
    /// reachable `[i..k)` extends by one more `inner` repetition `[k..j)`.
    /// The order is load-bearing, columns `< j` of row `i` must be final
    /// before column `j` is computed.
    pub fn star(inner: &ReachMatrix) -> Self {
        let n = inner.word_len();
        let mut matrix = ReachMatrix::empty(n);
        for i in 0..=n {
            // zero repetitions
            matrix.set(i, i);
            for j in (i + 1)..=n {
                for k in i..j {
                    if matrix.get(i, k) && inner.get(k, j) {
                        matrix.set(i, j);
                        break;
                    }
                }
            }
        }
        matrix
    }

    /// Longest prefix of the word reachable from position 0, scanning the
    /// candidate length from `N` down to `0` inclusive. `None` when not even
    /// the empty prefix is reachable.
    pub fn longest_prefix(&self) -> Option<usize> {
        (0..=self.word_len()).rev().find(|&len| self.get(0, len))
    }
}
