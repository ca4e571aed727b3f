// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use std::fmt::Display;

use tracing::debug;

use crate::{error::EvalError, machine::Machine};

/// The result of evaluating an expression against a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The longest prefix of the word in the expression's language has this
    /// length (possibly 0, the empty prefix).
    PrefixLength(usize),
    /// No prefix of the word, not even the empty one, is in the language.
    NoPrefix,
    /// The expression is not a valid postfix expression over the recognized
    /// alphabet.
    MalformedExpression,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PrefixLength(length) => write!(f, "{}", length),
            Outcome::NoPrefix => f.write_str("INF"),
            Outcome::MalformedExpression => f.write_str("ERROR"),
        }
    }
}

/// Finds the length of the longest prefix of `word` that belongs to the
/// language of the postfix `expression`.
///
/// A pure function of its two inputs, repeated calls yield identical
/// outcomes.
///
/// ```
/// use regex_prefix::{evaluate, Outcome};
///
/// // (a|b)* over "abbac" stops before the 'c'
/// assert_eq!(evaluate("ab+*", "abbac"), Outcome::PrefixLength(4));
/// assert_eq!(evaluate("a", "bbb"), Outcome::NoPrefix);
/// assert_eq!(evaluate("a+", "a"), Outcome::MalformedExpression);
/// ```
pub fn evaluate(expression: &str, word: &str) -> Outcome {
    match try_evaluate(expression, word) {
        Ok(Some(length)) => Outcome::PrefixLength(length),
        Ok(None) => Outcome::NoPrefix,
        Err(e) => {
            debug!(error = %e, "malformed expression");
            Outcome::MalformedExpression
        }
    }
}

/// Like [`evaluate`], but keeps the error taxonomy instead of collapsing it
/// into [`Outcome::MalformedExpression`]. `Ok(None)` is the no-prefix case.
pub fn try_evaluate(expression: &str, word: &str) -> Result<Option<usize>, EvalError> {
    let residual = Machine::new(word.as_bytes()).run(expression)?;
    Ok(residual.longest_prefix())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{evaluate, Outcome};

    #[test]
    fn test_outcome_mapping() {
        assert_eq!(evaluate("ab.", "ab"), Outcome::PrefixLength(2));
        assert_eq!(evaluate("a", "b"), Outcome::NoPrefix);
        assert_eq!(evaluate("ab", "ab"), Outcome::MalformedExpression);
    }

    #[test]
    fn test_outcome_rendering() {
        assert_eq!(evaluate("a*", "aaab").to_string(), "3");
        assert_eq!(evaluate("1", "abc").to_string(), "0");
        assert_eq!(evaluate("a", "b").to_string(), "INF");
        assert_eq!(evaluate("x", "a").to_string(), "ERROR");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = evaluate("ab.c.*", "abcabd");
        let second = evaluate("ab.c.*", "abcabd");
        assert_eq!(first, Outcome::PrefixLength(3));
        assert_eq!(first, second);
    }
}
