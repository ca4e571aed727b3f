// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use thiserror::Error;

/// Why an expression failed to evaluate.
///
/// Callers that only render results see all of these collapsed into
/// [`Outcome::MalformedExpression`](crate::Outcome::MalformedExpression);
/// the variants exist for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A byte of the expression is neither an operator nor a recognized
    /// literal.
    #[error("unrecognized token '{}' at position {position}", *token as char)]
    UnrecognizedToken { token: u8, position: usize },

    /// An operator found fewer operand matrices on the stack than its arity
    /// requires.
    #[error(
        "operator '{}' at position {position} requires {required} operands, stack holds {available}",
        *operator as char
    )]
    MissingOperands {
        operator: u8,
        position: usize,
        required: usize,
        available: usize,
    },

    /// The stream ended with a stack size other than exactly 1, either
    /// leftover operands or an empty expression.
    #[error("expression left {operands} operands on the stack, expected exactly 1")]
    IncompleteExpression { operands: usize },
}
