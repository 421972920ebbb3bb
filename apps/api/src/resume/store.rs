//! Resume persistence. All queries are scoped to the owning user except the
//! public lookup, which only matches resumes flagged `public`.

use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{ResumeRow, ResumeSummaryRow};

/// Fields a caller may change. `None` leaves the stored value as is.
#[derive(Debug, Default)]
pub struct ResumePatch {
    pub title: Option<String>,
    /// Shallow-merged into the stored record.
    pub data: Option<Value>,
    pub template: Option<String>,
    pub accent_color: Option<String>,
    pub public: Option<bool>,
}

pub struct NewResume<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub data: &'a Value,
    pub template: &'a str,
    pub accent_color: &'a str,
}

pub async fn insert_resume(pool: &PgPool, resume: NewResume<'_>) -> Result<ResumeRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, title, data, template, accent_color)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resume.user_id)
    .bind(resume.title)
    .bind(resume.data)
    .bind(resume.template)
    .bind(resume.accent_color)
    .fetch_one(pool)
    .await?;

    info!("Created resume {} for user {}", row.id, row.user_id);
    Ok(row)
}

pub async fn list_resumes(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResumeSummaryRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeSummaryRow>(
        r#"
        SELECT id, title, template, public, updated_at
        FROM resumes
        WHERE user_id = $1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_owned(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_public(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND public")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_resume(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    patch: ResumePatch,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes SET
            title        = COALESCE($3, title),
            data         = COALESCE(data || $4, data),
            template     = COALESCE($5, template),
            accent_color = COALESCE($6, accent_color),
            public       = COALESCE($7, public),
            updated_at   = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(patch.title)
    .bind(patch.data)
    .bind(patch.template)
    .bind(patch.accent_color)
    .bind(patch.public)
    .fetch_optional(pool)
    .await
}

pub async fn delete_resume(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
