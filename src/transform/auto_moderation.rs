//! Auto moderation action transform

use super::types::{
    ApiAutoModerationAction, AutoModerationAction, AutoModerationActionMetadata,
};

/// Transform a wire auto moderation action into its internal variant.
///
/// Every metadata field is independently nullable on the wire; absent fields
/// coalesce to `None` so the internal record always carries all three.
pub fn transform_auto_moderation_action(action: ApiAutoModerationAction) -> AutoModerationAction {
    AutoModerationAction {
        kind: action.kind,
        metadata: AutoModerationActionMetadata {
            duration_seconds: action.metadata.duration_seconds,
            channel_id: action.metadata.channel_id,
            custom_message: action.metadata.custom_message,
        },
    }
}
