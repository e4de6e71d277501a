//! Scheduled event recurrence rule transform (outbound)
//!
//! The one outbound member of the family: callers assemble internal options
//! with an absolute `start_at` instant, and the transform produces the wire
//! record with the instant coerced to its ISO-8601 string form. All selection
//! fields pass through verbatim under the wire key names.

use serde_json::{json, Value};

use crate::case::WireEncodable;
use crate::timestamp;

use super::types::{
    ApiGuildScheduledEventRecurrenceRule, GuildScheduledEventRecurrenceRuleOptions,
};

/// Transform internal recurrence rule options into the wire record.
pub fn transform_recurrence_rule(
    rule: &GuildScheduledEventRecurrenceRuleOptions,
) -> ApiGuildScheduledEventRecurrenceRule {
    ApiGuildScheduledEventRecurrenceRule {
        start: timestamp::format(&rule.start_at),
        frequency: rule.frequency,
        interval: rule.interval,
        by_weekday: rule.by_weekday.clone(),
        by_n_weekday: rule.by_n_weekday.clone(),
        by_month: rule.by_month.clone(),
        by_month_day: rule.by_month_day.clone(),
    }
}

impl WireEncodable for GuildScheduledEventRecurrenceRuleOptions {
    /// Recurrence options own their serialization by delegating to the
    /// transform, so they compose with generic conversion of any payload
    /// that embeds them.
    fn to_wire_value(&self) -> Value {
        json!(transform_recurrence_rule(self))
    }
}
