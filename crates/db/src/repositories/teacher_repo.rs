//! Repository for the `teachers` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::teacher::{CreateTeacher, Teacher};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, email, phone_number";

/// Provides CRUD operations for teachers.
pub struct TeacherRepo;

impl TeacherRepo {
    /// List all teachers ordered case-insensitively by name, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Teacher>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teachers ORDER BY lower(name) ASC, name ASC, id ASC"
        );
        sqlx::query_as::<_, Teacher>(&query).fetch_all(pool).await
    }

    /// Find a teacher by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE id = $1");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new teacher, returning the created entity.
    pub async fn create(pool: &PgPool, input: CreateTeacher) -> Result<Teacher, sqlx::Error> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO teachers (name, age, email, phone_number)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.email)
        .bind(&input.phone_number)
        .fetch_one(pool)
        .await?;
        Ok(input.into_entity(id))
    }

    /// Replace every mutable field of a teacher.
    ///
    /// Returns `false` if no row with `teacher.id` exists.
    pub async fn update(pool: &PgPool, teacher: &Teacher) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE teachers SET
                name = $2,
                age = $3,
                email = $4,
                phone_number = $5
             WHERE id = $1",
        )
        .bind(teacher.id)
        .bind(&teacher.name)
        .bind(teacher.age)
        .bind(&teacher.email)
        .bind(&teacher.phone_number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a teacher by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
