// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

use proptest::prelude::*;

use regex_prefix::{evaluate, Outcome};

fn arb_word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[abc]{0,8}").unwrap()
}

/// Syntactically valid postfix expressions over the recognized alphabet.
fn arb_postfix() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        Just("1".to_string()),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(x, y)| format!("{}{}+", x, y)),
            (inner.clone(), inner.clone()).prop_map(|(x, y)| format!("{}{}.", x, y)),
            inner.prop_map(|x| format!("{}*", x)),
        ]
    })
}

proptest! {
    #[test]
    fn test_valid_postfix_is_never_malformed(
        expression in arb_postfix(),
        word in arb_word(),
    ) {
        prop_assert_ne!(evaluate(&expression, &word), Outcome::MalformedExpression);
    }

    #[test]
    fn test_prefix_length_never_exceeds_word_length(
        expression in arb_postfix(),
        word in arb_word(),
    ) {
        if let Outcome::PrefixLength(length) = evaluate(&expression, &word) {
            prop_assert!(length <= word.len());
        }
    }

    #[test]
    fn test_starred_expression_accepts_some_prefix(
        expression in arb_postfix(),
        word in arb_word(),
    ) {
        // zero repetitions always covers the empty prefix
        let starred = format!("{}*", expression);
        prop_assert!(matches!(evaluate(&starred, &word), Outcome::PrefixLength(_)));
    }

    #[test]
    fn test_union_is_commutative(
        x in arb_postfix(),
        y in arb_postfix(),
        word in arb_word(),
    ) {
        prop_assert_eq!(
            evaluate(&format!("{}{}+", x, y), &word),
            evaluate(&format!("{}{}+", y, x), &word)
        );
    }

    #[test]
    fn test_empty_literal_is_a_concat_identity(
        expression in arb_postfix(),
        word in arb_word(),
    ) {
        prop_assert_eq!(
            evaluate(&format!("{}1.", expression), &word),
            evaluate(&expression, &word)
        );
    }

    #[test]
    fn test_evaluation_is_deterministic(
        expression in arb_postfix(),
        word in arb_word(),
    ) {
        prop_assert_eq!(evaluate(&expression, &word), evaluate(&expression, &word));
    }
}
