//! Message interaction metadata transform
//!
//! The only member of the family that both enriches (the triggering user is
//! resolved through the injected registry) and recurses into its own shape:
//! an interaction may carry the metadata of the interaction that triggered
//! it, which is itself interaction metadata or null. A `None` predecessor is
//! the base case, so the chain always terminates.

use crate::error::Result;

use super::registry::UserRegistry;
use super::types::{ApiMessageInteractionMetadata, MessageInteractionMetadata};

/// Transform wire interaction metadata into its internal variant.
///
/// Registry faults propagate unchanged to the caller.
pub fn transform_message_interaction_metadata<R: UserRegistry + ?Sized>(
    registry: &mut R,
    metadata: ApiMessageInteractionMetadata,
) -> Result<MessageInteractionMetadata> {
    let triggering = match metadata.triggering_interaction_metadata {
        Some(inner) => Some(Box::new(transform_message_interaction_metadata(
            registry, *inner,
        )?)),
        None => None,
    };

    Ok(MessageInteractionMetadata {
        id: metadata.id,
        kind: metadata.kind,
        user: registry.resolve(metadata.user)?,
        authorizing_integration_owners: metadata.authorizing_integration_owners,
        original_response_message_id: metadata.original_response_message_id,
        interacted_message_id: metadata.interacted_message_id,
        triggering_interaction_metadata: triggering,
    })
}
