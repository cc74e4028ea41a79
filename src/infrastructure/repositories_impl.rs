use crate::domain::entities::{Feedback, NewFeedback};
use crate::domain::repositories::{FeedbackRepository, StoreError};
use crate::domain::value_objects::FeedbackId;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use typed_builder::TypedBuilder;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS feedback (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    text TEXT NOT NULL
)";

#[derive(Clone, TypedBuilder)]
pub struct FeedbackRepositoryImpl {
    pool: SqlitePool,
}

impl FeedbackRepositoryImpl {
    /// Creates the `feedback` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(StoreError::query("CREATE TABLE feedback"))?;
        tracing::info!("feedback table is ready");
        Ok(())
    }
}

impl FeedbackRepository for FeedbackRepositoryImpl {
    async fn add_feedback(&self, feedback: NewFeedback) -> Result<Feedback, StoreError> {
        let row = sqlx::query(
            "INSERT INTO feedback (title, text) VALUES (?, ?) RETURNING id, title, text",
        )
        .bind(feedback.title())
        .bind(feedback.text())
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::query("INSERT feedback"))?;

        to_feedback(&row).map_err(StoreError::query("INSERT feedback"))
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError> {
        let rows = sqlx::query("SELECT id, title, text FROM feedback")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::query("SELECT feedback"))?;

        rows.iter()
            .map(to_feedback)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::query("SELECT feedback"))
    }

    async fn delete_feedback_by_id(&self, id: FeedbackId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(StoreError::query("DELETE feedback"))?;

        Ok(result.rows_affected())
    }
}

fn to_feedback(row: &SqliteRow) -> Result<Feedback, sqlx::Error> {
    Ok(Feedback::builder()
        .id(FeedbackId::from(row.try_get::<i64, _>("id")?))
        .title(row.try_get::<String, _>("title")?)
        .text(row.try_get::<String, _>("text")?)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database;

    async fn repo() -> FeedbackRepositoryImpl {
        let pool = database::connect("sqlite::memory:", 1).await.unwrap();
        let repo = FeedbackRepositoryImpl::builder().pool(pool).build();
        repo.ensure_schema().await.unwrap();
        repo
    }

    fn new_feedback(title: &str, text: &str) -> NewFeedback {
        NewFeedback::builder()
            .title(title.to_string())
            .text(text.to_string())
            .build()
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let repo = repo().await;
        repo.ensure_schema().await.unwrap();
        assert!(repo.list_feedback().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_feedback_returns_generated_id() {
        let repo = repo().await;

        let first = repo
            .add_feedback(new_feedback("Test Feedback", "Test text"))
            .await
            .unwrap();
        let second = repo.add_feedback(new_feedback("Other", "More")).await.unwrap();

        assert_eq!(first.id(), FeedbackId::from(1));
        assert_eq!(first.title(), "Test Feedback");
        assert_eq!(first.text(), "Test text");
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_list_feedback_returns_all_rows() {
        let repo = repo().await;
        let a = repo.add_feedback(new_feedback("a", "1")).await.unwrap();
        let b = repo.add_feedback(new_feedback("b", "2")).await.unwrap();

        let all = repo.list_feedback().await.unwrap();

        assert_eq!(all.len(), 2);
        assert!(all.contains(&a));
        assert!(all.contains(&b));
    }

    #[tokio::test]
    async fn test_delete_feedback_by_id_reports_count() {
        let repo = repo().await;
        let created = repo.add_feedback(new_feedback("a", "1")).await.unwrap();

        assert_eq!(repo.delete_feedback_by_id(created.id()).await.unwrap(), 1);
        assert_eq!(repo.delete_feedback_by_id(created.id()).await.unwrap(), 0);
        assert_eq!(repo.delete_feedback_by_id(FeedbackId::from(999)).await.unwrap(), 0);
        assert!(repo.list_feedback().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;
        let first = repo.add_feedback(new_feedback("a", "1")).await.unwrap();
        repo.delete_feedback_by_id(first.id()).await.unwrap();

        let second = repo.add_feedback(new_feedback("b", "2")).await.unwrap();

        assert!(second.id().value() > first.id().value());
    }

    #[tokio::test]
    async fn test_queries_fail_without_table() {
        let pool = database::connect("sqlite::memory:", 1).await.unwrap();
        let repo = FeedbackRepositoryImpl::builder().pool(pool).build();

        assert!(matches!(
            repo.list_feedback().await,
            Err(StoreError::Query { operation: "SELECT feedback", .. })
        ));
        assert!(repo.add_feedback(new_feedback("a", "1")).await.is_err());
        assert!(repo.delete_feedback_by_id(FeedbackId::from(1)).await.is_err());
    }
}
