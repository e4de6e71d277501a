//! Record types for the shape transform family
//!
//! Each named wire structure is represented twice: an `Api*` record matching
//! the snake_case wire form (deserialized with serde defaults so absent and
//! null fields both land as `None`), and an internal record whose serialized
//! form carries camelCase keys with every declared field present as an
//! explicit `null` when empty. Keeping both forms as plain product types lets
//! the compiler enforce that every transform names every field.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::case::WireEncodable;

// ---------------------------------------------------------------------------
// Users (enrichment target)
// ---------------------------------------------------------------------------

/// Wire fragment identifying a user, as embedded in other payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub bot: Option<bool>,
}

/// Internal user entity, produced by a [`UserRegistry`](super::UserRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub bot: bool,
}

impl From<ApiUser> for User {
    fn from(data: ApiUser) -> Self {
        User {
            id: data.id,
            username: data.username,
            global_name: data.global_name,
            bot: data.bot.unwrap_or(false),
        }
    }
}

impl WireEncodable for User {
    /// Users serialize themselves through their camelCase internal form; the
    /// generic converter rewrites the keys when the containing payload is
    /// encoded.
    fn to_wire_value(&self) -> Value {
        json!(self)
    }
}

// ---------------------------------------------------------------------------
// Auto moderation actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAutoModerationAction {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub metadata: ApiAutoModerationActionMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAutoModerationActionMetadata {
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub custom_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoModerationAction {
    #[serde(rename = "type")]
    pub kind: u8,
    pub metadata: AutoModerationActionMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoModerationActionMetadata {
    pub duration_seconds: Option<u32>,
    pub channel_id: Option<String>,
    pub custom_message: Option<String>,
}

// ---------------------------------------------------------------------------
// Message interaction metadata (self-referential)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessageInteractionMetadata {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub user: ApiUser,
    #[serde(default)]
    pub authorizing_integration_owners: HashMap<String, String>,
    #[serde(default)]
    pub original_response_message_id: Option<String>,
    #[serde(default)]
    pub interacted_message_id: Option<String>,
    #[serde(default)]
    pub triggering_interaction_metadata: Option<Box<ApiMessageInteractionMetadata>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInteractionMetadata {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub user: User,
    pub authorizing_integration_owners: HashMap<String, String>,
    pub original_response_message_id: Option<String>,
    pub interacted_message_id: Option<String>,
    pub triggering_interaction_metadata: Option<Box<MessageInteractionMetadata>>,
}

// ---------------------------------------------------------------------------
// Scheduled event recurrence rules (outbound)
// ---------------------------------------------------------------------------

/// Internal options a caller assembles before sending a recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildScheduledEventRecurrenceRuleOptions {
    pub start_at: DateTime<Utc>,
    pub frequency: u8,
    pub interval: u8,
    pub by_weekday: Option<Vec<u8>>,
    pub by_n_weekday: Option<Vec<RecurrenceRuleNWeekday>>,
    pub by_month: Option<Vec<u8>>,
    pub by_month_day: Option<Vec<u8>>,
}

/// A specific occurrence of a weekday within an interval, e.g. the first
/// Monday. Field names are single words, so wire and internal forms agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRuleNWeekday {
    pub n: u8,
    pub day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiGuildScheduledEventRecurrenceRule {
    pub start: String,
    pub frequency: u8,
    pub interval: u8,
    pub by_weekday: Option<Vec<u8>>,
    pub by_n_weekday: Option<Vec<RecurrenceRuleNWeekday>>,
    pub by_month: Option<Vec<u8>>,
    pub by_month_day: Option<Vec<u8>>,
}

// ---------------------------------------------------------------------------
// Incidents data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIncidentsData {
    #[serde(default)]
    pub invites_disabled_until: Option<String>,
    #[serde(default)]
    pub dms_disabled_until: Option<String>,
    #[serde(default)]
    pub dm_spam_detected_at: Option<String>,
    #[serde(default)]
    pub raid_detected_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentActions {
    pub invites_disabled_until: Option<DateTime<Utc>>,
    pub dms_disabled_until: Option<DateTime<Utc>>,
    pub dm_spam_detected_at: Option<DateTime<Utc>>,
    pub raid_detected_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Collectibles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCollectibles {
    #[serde(default)]
    pub nameplate: Option<ApiNameplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiNameplate {
    pub sku_id: String,
    pub asset: String,
    pub label: String,
    pub palette: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collectibles {
    pub nameplate: Option<Nameplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nameplate {
    pub sku_id: String,
    pub asset: String,
    pub label: String,
    pub palette: String,
}
