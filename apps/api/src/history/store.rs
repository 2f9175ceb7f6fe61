//! sqlx queries for the `policy_records` table.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::record::PolicyRecordRow;

pub async fn insert_record(
    pool: &PgPool,
    user_id: Uuid,
    record_type: &str,
    data: Value,
    policy_content: Option<String>,
    generated_at: Option<String>,
) -> Result<PolicyRecordRow, sqlx::Error> {
    sqlx::query_as::<_, PolicyRecordRow>(
        "INSERT INTO policy_records \
             (id, user_id, record_type, data, policy_content, generated_at, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, NOW()) \
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(record_type)
    .bind(data)
    .bind(policy_content)
    .bind(generated_at)
    .fetch_one(pool)
    .await
}

/// The most recent draft snapshot for a user, if any.
pub async fn latest_draft(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<PolicyRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, PolicyRecordRow>(
        "SELECT * FROM policy_records \
         WHERE user_id = $1 AND record_type = 'draft' \
         ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// All records for a user, newest first.
pub async fn list_records(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<PolicyRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, PolicyRecordRow>(
        "SELECT * FROM policy_records WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_record(
    pool: &PgPool,
    user_id: Uuid,
    record_id: Uuid,
) -> Result<Option<PolicyRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, PolicyRecordRow>(
        "SELECT * FROM policy_records WHERE id = $1 AND user_id = $2",
    )
    .bind(record_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was actually deleted.
pub async fn delete_record(
    pool: &PgPool,
    user_id: Uuid,
    record_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM policy_records WHERE id = $1 AND user_id = $2")
        .bind(record_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
