use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::envelope::{Envelope, TransportError, decode_envelope};
use crate::domain::{SenderIdentity, SenderTracker};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendersJsonPayload {
    data: Option<Vec<SenderJson>>,
}

/// Scalar fields are optional so that both a missing key and `null` decode to
/// the zero value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SenderJson {
    #[serde(rename = "_id")]
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    tracker: Option<TrackerJson>,
    status: Option<String>,
    active: Option<bool>,
    account: Option<String>,
    user: Option<String>,
    created_on: Option<DateTime<Utc>>,
    last_modified_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackerJson {
    #[serde(rename = "_id")]
    id: Option<String>,
    title: Option<String>,
    auto_approve: Option<bool>,
    status: Option<String>,
    active: Option<bool>,
    created_on: Option<DateTime<Utc>>,
    last_modified_on: Option<DateTime<Utc>>,
}

impl From<TrackerJson> for SenderTracker {
    fn from(value: TrackerJson) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            title: value.title.unwrap_or_default(),
            auto_approve: value.auto_approve.unwrap_or_default(),
            status: value.status.unwrap_or_default(),
            active: value.active.unwrap_or_default(),
            created_on: value.created_on,
            last_modified_on: value.last_modified_on,
        }
    }
}

impl From<SenderJson> for SenderIdentity {
    fn from(value: SenderJson) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            title: value.title.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            status: value.status.unwrap_or_default(),
            active: value.active.unwrap_or_default(),
            account: value.account.unwrap_or_default(),
            owning_user: value.user.unwrap_or_default(),
            created_on: value.created_on,
            last_modified_on: value.last_modified_on,
            tracker: value.tracker.map(SenderTracker::from),
        }
    }
}

impl SendersJsonPayload {
    pub fn into_senders(self) -> Vec<SenderIdentity> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(SenderIdentity::from)
            .collect()
    }
}

pub fn decode_senders_json_response(
    json: &str,
) -> Result<Envelope<SendersJsonPayload>, TransportError> {
    decode_envelope(json)
}
