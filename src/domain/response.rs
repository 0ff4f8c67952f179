use chrono::{DateTime, Utc};

/// A registered name or short code a message can appear to come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdentity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub active: bool,
    pub account: String,
    pub owning_user: String,
    pub created_on: Option<DateTime<Utc>>,
    pub last_modified_on: Option<DateTime<Utc>>,
    pub tracker: Option<SenderTracker>,
}

/// Approval tracker attached to a [`SenderIdentity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderTracker {
    pub id: String,
    pub title: String,
    pub auto_approve: bool,
    pub status: String,
    pub active: bool,
    pub created_on: Option<DateTime<Utc>>,
    pub last_modified_on: Option<DateTime<Utc>>,
}
