// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

/// The literal symbols an expression may match against.
pub const ALPHABET: [u8; 3] = [b'a', b'b', b'c'];

/// The marker for the empty-string literal.
///
/// Some historical variants used '!' instead, this crate fixes it to '1'.
pub const EMPTY_LITERAL: u8 = b'1';

/// One character of the postfix stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `+`, binary
    Union,
    /// `.`, binary
    Concat,
    /// `*`, unary
    Star,
    /// one of [`ALPHABET`]
    Symbol(u8),
    /// [`EMPTY_LITERAL`], matches the empty string
    Empty,
}

impl Token {
    /// Classifies a byte of the expression, `None` for anything outside
    /// the operator set and the recognized alphabet.
    pub fn classify(byte: u8) -> Option<Token> {
        match byte {
            b'+' => Some(Token::Union),
            b'.' => Some(Token::Concat),
            b'*' => Some(Token::Star),
            EMPTY_LITERAL => Some(Token::Empty),
            _ if ALPHABET.contains(&byte) => Some(Token::Symbol(byte)),
            _ => None,
        }
    }
}
