// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use tracing::trace;

use crate::{error::EvalError, matrix::ReachMatrix, token::Token};

/// The postfix evaluation stack machine.
///
/// Scans the expression left to right, one matrix pushed per literal, one
/// operator applied per operator token. A syntactically valid expression
/// leaves exactly one residual matrix.
pub struct Machine<'a> {
    word: &'a [u8],
    stack: Vec<ReachMatrix>,
}

impl<'a> Machine<'a> {
    pub fn new(word: &'a [u8]) -> Self {
        Machine { word, stack: vec![] }
    }

    /// Runs the machine over `expression` and returns the residual matrix.
    /// Stops at the first failing token.
    pub fn run(mut self, expression: &str) -> Result<ReachMatrix, EvalError> {
        for (position, byte) in expression.bytes().enumerate() {
            let token = Token::classify(byte)
                .ok_or(EvalError::UnrecognizedToken { token: byte, position })?;

            trace!(?token, position, stack_depth = self.stack.len(), "dispatch");

            match token {
                Token::Union => self.apply_union(position)?,
                Token::Concat => self.apply_concat(position)?,
                Token::Star => self.apply_star(position)?,
                Token::Symbol(symbol) => {
                    self.stack.push(ReachMatrix::symbol(self.word, symbol));
                }
                Token::Empty => {
                    self.stack.push(ReachMatrix::empty_string(self.word.len()));
                }
            }
        }

        let operands = self.stack.len();
        match self.stack.pop() {
            Some(residual) if self.stack.is_empty() => Ok(residual),
            _ => Err(EvalError::IncompleteExpression { operands }),
        }
    }

    fn require(&self, operator: u8, position: usize, required: usize) -> Result<(), EvalError> {
        let available = self.stack.len();
        if available < required {
            Err(EvalError::MissingOperands {
                operator,
                position,
                required,
                available,
            })
        } else {
            Ok(())
        }
    }

    // pops the top matrix, merges it into the new top in place
    fn apply_union(&mut self, position: usize) -> Result<(), EvalError> {
        self.require(b'+', position, 2)?;
        if let (Some(top), Some(rest)) = (self.stack.pop(), self.stack.last_mut()) {
            rest.merge(&top);
        }
        Ok(())
    }

    fn apply_concat(&mut self, position: usize) -> Result<(), EvalError> {
        self.require(b'.', position, 2)?;
        if let (Some(second), Some(first)) = (self.stack.pop(), self.stack.pop()) {
            self.stack.push(ReachMatrix::concat(&first, &second));
        }
        Ok(())
    }

    fn apply_star(&mut self, position: usize) -> Result<(), EvalError> {
        self.require(b'*', position, 1)?;
        if let Some(inner) = self.stack.pop() {
            self.stack.push(ReachMatrix::star(&inner));
        }
        Ok(())
    }
}
