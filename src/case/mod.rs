//! Generic case conversion between internal and wire key naming
//!
//! This module implements the shape-agnostic half of the library: a recursive
//! walker that rewrites every mapping key reachable in a `serde_json::Value`
//! to snake_case, and the [`WireEncodable`] trait through which domain types
//! own their wire serialization while still composing with generic conversion
//! of their container.
//!
//! The walker is total over any acyclic input. Cyclic values cannot be built
//! out of `serde_json::Value`, so recursion depth is bounded by input depth.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wireform::case::to_snake_case;
//!
//! let wire = to_snake_case(&json!({
//!     "authorizingIntegrationOwners": {"0": "1234"},
//!     "interactedMessageId": null,
//! }));
//!
//! assert_eq!(wire, json!({
//!     "authorizing_integration_owners": {"0": "1234"},
//!     "interacted_message_id": null,
//! }));
//! ```

mod snake;

#[cfg(test)]
mod prop_tests;

pub use snake::snake_case;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::timestamp;

/// A value that knows how to produce its own wire representation.
///
/// Implementors return a plain `Value` whose keys may still carry internal
/// (camelCase) naming; [`encode_wire`] runs the generic converter over that
/// result, so implementations never need to snake-case anything themselves.
pub trait WireEncodable {
    /// Produce the plain-value form of `self`, prior to key conversion.
    fn to_wire_value(&self) -> Value;
}

impl WireEncodable for Value {
    fn to_wire_value(&self) -> Value {
        self.clone()
    }
}

impl WireEncodable for DateTime<Utc> {
    /// Instants are never decomposed into fields; they encode as ISO-8601
    /// strings with millisecond precision.
    fn to_wire_value(&self) -> Value {
        Value::String(timestamp::format(self))
    }
}

impl<T: WireEncodable> WireEncodable for Option<T> {
    fn to_wire_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_wire_value(),
            None => Value::Null,
        }
    }
}

impl<T: WireEncodable> WireEncodable for Vec<T> {
    fn to_wire_value(&self) -> Value {
        Value::Array(self.iter().map(WireEncodable::to_wire_value).collect())
    }
}

impl<T: WireEncodable + ?Sized> WireEncodable for &T {
    fn to_wire_value(&self) -> Value {
        (**self).to_wire_value()
    }
}

/// Recursively rewrite every mapping key in `value` to snake_case.
///
/// Primitives and null pass through unchanged; arrays are converted
/// element-wise preserving order and length; objects are rebuilt with every
/// key passed through [`snake_case`] and every nested value converted
/// recursively. No keys are dropped or duplicated; distinct keys that
/// snake-case to the same string is a caller error.
pub fn to_snake_case(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(to_snake_case).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, nested)| (snake_case(key), to_snake_case(nested)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Outbound entry point: unwrap a value's self-encoding capability, then run
/// [`to_snake_case`] over the result.
pub fn encode_wire<T: WireEncodable + ?Sized>(value: &T) -> Value {
    to_snake_case(&value.to_wire_value())
}
