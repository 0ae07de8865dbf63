//! Response Store — append-only persistence of interview responses.
//!
//! `AppState` holds an `Arc<dyn ResponseStore>`; production uses
//! `PgResponseStore`. There is deliberately no update or delete path.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::response::{InterviewResponseRow, NewInterviewResponse};

#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Inserts one record. `created_at` is assigned by the store.
    async fn append(&self, record: NewInterviewResponse) -> Result<InterviewResponseRow, AppError>;

    /// All records for `email`, oldest first. An empty vec is a normal outcome.
    async fn list_by_candidate(&self, email: &str) -> Result<Vec<InterviewResponseRow>, AppError>;

    /// Round-trips the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct PgResponseStore {
    pool: PgPool,
}

impl PgResponseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseStore for PgResponseStore {
    async fn append(&self, record: NewInterviewResponse) -> Result<InterviewResponseRow, AppError> {
        let row = sqlx::query_as::<_, InterviewResponseRow>(
            r#"
            INSERT INTO interview_responses
                (id, candidate_email, interview_type, task_title, response,
                 time_spent_seconds, metadata)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.candidate_email)
        .bind(record.interview_type)
        .bind(&record.task_title)
        .bind(&record.response)
        .bind(record.time_spent_seconds)
        .bind(Value::Object(record.metadata))
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Stored {} response {} for {}",
            row.interview_type, row.id, row.candidate_email
        );
        Ok(row)
    }

    async fn list_by_candidate(&self, email: &str) -> Result<Vec<InterviewResponseRow>, AppError> {
        Ok(sqlx::query_as::<_, InterviewResponseRow>(
            r#"
            SELECT *
            FROM interview_responses
            WHERE candidate_email = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
