use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::ingest::category::JOB_DESCRIPTIONS_TABLE;
use crate::models::document::{JobDescriptionRecord, ResumeRecord};

// Table names come from compile-time constants in `category`, never from
// caller input, so interpolating them into SQL is safe.

/// Whether a record with this file name already exists in the table.
pub async fn exists_in(pool: &PgPool, table: &str, file_name: &str) -> Result<bool, sqlx::Error> {
    let count: i64 =
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE file_name = $1"))
            .bind(file_name)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

/// Whole-row upsert keyed on file_name. A second submission replaces every
/// derived field in place; the original row id survives. The UNIQUE
/// constraint makes the write atomic — no check-then-act on the record.
pub async fn upsert_resume(
    pool: &PgPool,
    table: &str,
    record: &ResumeRecord,
) -> Result<(), sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO {table}
            (id, file_name, storage_url, full_text, technical_skills,
             years_of_experience, embeddings, uploaded_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (file_name) DO UPDATE SET
            storage_url = EXCLUDED.storage_url,
            full_text = EXCLUDED.full_text,
            technical_skills = EXCLUDED.technical_skills,
            years_of_experience = EXCLUDED.years_of_experience,
            embeddings = EXCLUDED.embeddings,
            uploaded_at = EXCLUDED.uploaded_at
        "#
    );

    sqlx::query(&sql)
        .bind(Uuid::new_v4())
        .bind(&record.file_name)
        .bind(&record.storage_url)
        .bind(&record.full_text)
        .bind(&record.technical_skills)
        .bind(&record.years_of_experience)
        .bind(&record.embeddings)
        .bind(record.uploaded_at)
        .execute(pool)
        .await?;

    info!("Upserted resume record '{}' into {table}", record.file_name);
    Ok(())
}

pub async fn upsert_job_description(
    pool: &PgPool,
    record: &JobDescriptionRecord,
) -> Result<(), sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO {JOB_DESCRIPTIONS_TABLE}
            (id, file_name, storage_url, content, uploaded_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (file_name) DO UPDATE SET
            storage_url = EXCLUDED.storage_url,
            content = EXCLUDED.content,
            uploaded_at = EXCLUDED.uploaded_at
        "#
    );

    sqlx::query(&sql)
        .bind(Uuid::new_v4())
        .bind(&record.file_name)
        .bind(&record.storage_url)
        .bind(&record.content)
        .bind(record.uploaded_at)
        .execute(pool)
        .await?;

    info!(
        "Upserted job description record '{}'",
        record.file_name
    );
    Ok(())
}
