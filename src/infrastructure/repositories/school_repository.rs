use crate::infrastructure::db::DbPool;
use crate::{
    domain::school::School,
    error::{AppError, AppResult},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct SchoolRepository {
    pool: Arc<DbPool>,
}

impl SchoolRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Get all schools, oldest first
    pub async fn find_all(&self) -> AppResult<Vec<School>> {
        let pool = self.pool.as_ref();
        let schools = sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, created_at
            FROM schools
            ORDER BY created_at
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(schools)
    }

    /// Get a school by ID
    pub async fn find_by_id(&self, school_id: Uuid) -> AppResult<Option<School>> {
        let pool = self.pool.as_ref();
        let school = sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, created_at
            FROM schools
            WHERE id = $1
            "#,
        )
        .bind(school_id)
        .fetch_optional(pool)
        .await?;

        Ok(school)
    }

    /// Check if a school with this name already exists
    pub async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM schools
                WHERE name = $1
            )
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Insert a new school
    pub async fn create(&self, id: Uuid, name: &str) -> AppResult<School> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO schools (id, name, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::ResourceFound(format!(
                        "School with name {} already exists",
                        name
                    ));
                }
            }
            AppError::Database(e)
        })?;

        Ok(School {
            id,
            name: name.to_string(),
            created_at: now,
        })
    }

    /// Rename a school
    pub async fn update_name(&self, school_id: Uuid, name: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();

        sqlx::query(
            r#"
            UPDATE schools
            SET name = $2
            WHERE id = $1
            "#,
        )
        .bind(school_id)
        .bind(name)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete a school
    pub async fn delete(&self, school_id: Uuid) -> AppResult<()> {
        let pool = self.pool.as_ref();

        sqlx::query(
            r#"
            DELETE FROM schools
            WHERE id = $1
            "#,
        )
        .bind(school_id)
        .execute(pool)
        .await?;

        Ok(())
    }
}
