// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

mod machine;
mod matrix;
mod token;

pub mod error;
pub mod evaluator;

pub use error::EvalError;
pub use evaluator::{evaluate, try_evaluate, Outcome};
