//! Property-based tests for the generic case converter
//!
//! These tests verify that conversion preserves structure and leaf values,
//! is deterministic, and never panics on arbitrary acyclic JSON.

#[cfg(test)]
mod tests {
    use crate::case::{snake_case, to_snake_case};
    use proptest::prelude::*;
    use serde_json::Value;

    /// Strategy for generating JSON values with controlled depth
    fn json_value_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-zA-Z0-9 ]{0,30}".prop_map(Value::String),
        ];

        leaf.prop_recursive(
            3,  // max depth
            16, // max size
            5,  // items per collection
            |inner| {
                prop_oneof![
                    proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                    proptest::collection::hash_map(camel_key_strategy(), inner, 0..5)
                        .prop_map(|m| Value::Object(m.into_iter().collect())),
                ]
            },
        )
    }

    /// Strategy for camelCase-looking keys
    fn camel_key_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-zA-Z0-9]{0,12}"
    }

    /// Strategy for keys that are already snake_case and survive conversion
    /// verbatim (all-lowercase letters, so the mapping is injective)
    fn stable_key_strategy() -> impl Strategy<Value = String> {
        "[a-z]{1,12}"
    }

    proptest! {
        /// Property: primitives and null are returned unchanged
        #[test]
        fn prop_leaf_passthrough_is_identity(
            leaf in prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::Bool),
                any::<i64>().prop_map(|n| Value::Number(n.into())),
                "[a-zA-Z0-9_ ]{0,40}".prop_map(Value::String),
            ]
        ) {
            prop_assert_eq!(to_snake_case(&leaf), leaf);
        }

        /// Property: sequence length is preserved and conversion distributes
        /// element-wise in order
        #[test]
        fn prop_sequence_conversion_is_element_wise(
            items in proptest::collection::vec(json_value_strategy(), 0..8)
        ) {
            let converted = to_snake_case(&Value::Array(items.clone()));
            let converted = converted.as_array().unwrap();

            prop_assert_eq!(converted.len(), items.len());
            for (after, before) in converted.iter().zip(&items) {
                prop_assert_eq!(after, &to_snake_case(before));
            }
        }

        /// Property: conversion is deterministic
        #[test]
        fn prop_conversion_deterministic(json in json_value_strategy()) {
            prop_assert_eq!(to_snake_case(&json), to_snake_case(&json));
        }

        /// Property: conversion never drops object entries when keys cannot
        /// collide after rewriting
        #[test]
        fn prop_object_entry_count_preserved(
            entries in proptest::collection::hash_map(
                stable_key_strategy(),
                json_value_strategy(),
                0..6,
            )
        ) {
            let before = Value::Object(entries.clone().into_iter().collect());
            let after = to_snake_case(&before);
            prop_assert_eq!(after.as_object().unwrap().len(), entries.len());
        }

        /// Property: a second conversion is a no-op (snake_case is a fixpoint)
        #[test]
        fn prop_conversion_idempotent(json in json_value_strategy()) {
            let once = to_snake_case(&json);
            prop_assert_eq!(to_snake_case(&once), once);
        }

        /// Property: key rewriting never panics and yields keys that are
        /// themselves stable under re-rewriting
        #[test]
        fn prop_snake_case_fixpoint(key in "[a-zA-Z0-9_-]{0,24}") {
            let once = snake_case(&key);
            prop_assert_eq!(snake_case(&once), once);
        }
    }
}
