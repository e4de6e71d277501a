//! Shape transforms for named wire structures
//!
//! Where the generic converter in [`crate::case`] renames keys mechanically,
//! the transforms in this module each handle one specific wire structure by
//! hand: every field is named once, absent fields coalesce to explicit
//! `None`s, timestamp strings become instants, nested shapes delegate to
//! their own transform, and actor references are resolved through an
//! injected registry. Shapes evolve independently on the remote API, so each
//! transform stays an independent sibling rather than a configuration of one
//! generic mechanism.
//!
//! # Module Organization
//!
//! - [`types`] - wire (`Api*`) and internal record types
//! - [`registry`] - the enrichment collaborator trait and an in-memory impl
//! - one module per shape: [`auto_moderation`], [`interaction`],
//!   [`scheduled_event`], [`incidents`], [`collectibles`]
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wireform::transform::{decode_wire, transform_collectibles};
//! use wireform::transform::types::ApiCollectibles;
//!
//! # fn example() -> wireform::Result<()> {
//! let wire: ApiCollectibles = decode_wire(json!({}))?;
//! let collectibles = transform_collectibles(wire);
//! assert!(collectibles.nameplate.is_none());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod auto_moderation;
pub mod collectibles;
pub mod incidents;
pub mod interaction;
pub mod registry;
pub mod scheduled_event;
pub mod types;


pub use auto_moderation::transform_auto_moderation_action;
pub use collectibles::transform_collectibles;
pub use incidents::transform_incidents_data;
pub use interaction::transform_message_interaction_metadata;
pub use registry::{MemoryUserRegistry, UserRegistry};
pub use scheduled_event::transform_recurrence_rule;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Decode a raw wire payload into one of the `Api*` record types.
///
/// Transforms themselves never validate; this typed boundary is where a
/// structurally mismatched payload surfaces, as a decode error.
pub fn decode_wire<T: DeserializeOwned>(value: Value) -> Result<T> {
    log::trace!("decoding wire payload into {}", std::any::type_name::<T>());
    Ok(serde_json::from_value(value)?)
}
