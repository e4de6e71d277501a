//! Incidents data transform

use crate::error::Result;
use crate::timestamp;

use super::types::{ApiIncidentsData, IncidentActions};

/// Transform wire incidents data into its internal variant.
///
/// All four instant fields are independently nullable; present strings must
/// parse as ISO-8601 or the whole transform fails with a timestamp error
/// naming the offending field.
pub fn transform_incidents_data(data: ApiIncidentsData) -> Result<IncidentActions> {
    Ok(IncidentActions {
        invites_disabled_until: timestamp::parse_opt(
            "invites_disabled_until",
            data.invites_disabled_until.as_deref(),
        )?,
        dms_disabled_until: timestamp::parse_opt(
            "dms_disabled_until",
            data.dms_disabled_until.as_deref(),
        )?,
        dm_spam_detected_at: timestamp::parse_opt(
            "dm_spam_detected_at",
            data.dm_spam_detected_at.as_deref(),
        )?,
        raid_detected_at: timestamp::parse_opt(
            "raid_detected_at",
            data.raid_detected_at.as_deref(),
        )?,
    })
}
