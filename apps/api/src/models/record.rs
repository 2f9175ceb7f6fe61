use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted draft or generated-policy snapshot.
///
/// `data` is the raw AnswerSet JSON as the client submitted it — drafts may
/// be mid-wizard and are stored opaquely, never re-validated on save.
/// Wire names are camelCase like the rest of the API; serde renames do not
/// affect the `FromRow` column mapping.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: Value,
    pub policy_content: Option<String>,
    pub generated_at: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub const RECORD_TYPE_DRAFT: &str = "draft";
pub const RECORD_TYPE_POLICY: &str = "policy";
