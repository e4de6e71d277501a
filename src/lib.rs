//! Wireform - field-naming and shape normalization between wire and internal values
//!
//! This crate sits between an external wire representation (snake_case JSON
//! payloads from a remote API) and the internal representation application
//! code works with (camelCase-keyed values, instant-typed timestamps, and
//! explicit absence markers instead of omitted fields).
//!
//! # Main Components
//!
//! - **Generic Case Converter**: [`case::to_snake_case`] recursively rewrites
//!   every mapping key of a value to snake_case, and [`case::WireEncodable`]
//!   lets domain types own their own wire serialization while composing with
//!   generic conversion of their container.
//! - **Shape Transforms**: the [`transform`] module holds one hand-written
//!   function per named wire structure, applying field renames, default
//!   coalescing, timestamp coercion, recursive delegation, and enrichment
//!   through an injected user registry.
//! - **Error Handling**: permissive about absent fields by design; errors are
//!   reserved for the typed boundary (decoding, timestamp parsing, registry
//!   faults), defined with `thiserror` in [`error`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wireform::to_snake_case;
//!
//! let body = to_snake_case(&json!({
//!     "durationSeconds": 60,
//!     "channelId": "123",
//! }));
//!
//! assert_eq!(body, json!({"duration_seconds": 60, "channel_id": "123"}));
//! ```

pub mod case;
pub mod error;
pub mod transform;

mod timestamp;

pub use case::{encode_wire, snake_case, to_snake_case, WireEncodable};
pub use error::{Error, Result};
pub use transform::{
    decode_wire, transform_auto_moderation_action, transform_collectibles,
    transform_incidents_data, transform_message_interaction_metadata,
    transform_recurrence_rule, MemoryUserRegistry, UserRegistry,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
