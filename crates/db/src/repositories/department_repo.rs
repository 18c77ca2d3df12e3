//! Repository for the `departments` table.
//!
//! Every row stores the folded [`name_key`] next to the name as supplied.
//! Writes run the duplicate-name check and the write in one transaction.
//! The `uq_departments_name_key` index on the stored key backs the check,
//! so two concurrent creates with the same name cannot both commit.

use campus_core::naming::name_key;
use campus_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::department::{CreateDepartment, Department};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Result of an update guarded by the name-uniqueness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// No department has the requested id.
    NotFound,
    /// Another department already uses the normalized name.
    DuplicateName,
}

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List all departments ordered by folded name, then name, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM departments ORDER BY name_key ASC, name ASC, id ASC"
        );
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    /// Find a department by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any department matches `name` once both sides are trimmed
    /// and lowercased.
    pub async fn exists_by_name<'e, E: PgExecutor<'e>>(
        executor: E,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM departments WHERE name_key = $1)",
        )
            .bind(name_key(name))
            .fetch_one(executor)
            .await
    }

    /// Same as [`Self::exists_by_name`] but ignores the row with id `exclude`.
    pub async fn exists_by_name_excluding<'e, E: PgExecutor<'e>>(
        executor: E,
        name: &str,
        exclude: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM departments WHERE name_key = $1 AND id <> $2)",
        )
            .bind(name_key(name))
            .bind(exclude)
            .fetch_one(executor)
            .await
    }

    /// Insert a new department unless the name is already taken.
    ///
    /// Returns `None` when another department has the same normalized name.
    /// The name is stored exactly as supplied.
    pub async fn create(
        pool: &PgPool,
        input: CreateDepartment,
    ) -> Result<Option<Department>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if Self::exists_by_name(&mut *tx, &input.name).await? {
            return Ok(None);
        }

        let inserted = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO departments (name, name_key) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.name)
        .bind(name_key(&input.name))
        .fetch_one(&mut *tx)
        .await;

        let id = match inserted {
            Ok(id) => id,
            Err(err) if is_unique_violation(&err) => return Ok(None),
            Err(err) => return Err(err),
        };

        tx.commit().await?;
        Ok(Some(input.into_entity(id)))
    }

    /// Replace the mutable fields of an existing department.
    pub async fn update(
        pool: &PgPool,
        department: &Department,
    ) -> Result<WriteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM departments WHERE id = $1 FOR UPDATE",
        )
        .bind(department.id)
        .fetch_optional(&mut *tx)
        .await?;
        if locked.is_none() {
            return Ok(WriteOutcome::NotFound);
        }

        if Self::exists_by_name_excluding(&mut *tx, &department.name, department.id).await? {
            return Ok(WriteOutcome::DuplicateName);
        }

        let updated =
            sqlx::query("UPDATE departments SET name = $2, name_key = $3 WHERE id = $1")
                .bind(department.id)
                .bind(&department.name)
                .bind(name_key(&department.name))
                .execute(&mut *tx)
                .await;

        match updated {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => return Ok(WriteOutcome::DuplicateName),
            Err(err) => return Err(err),
        }

        tx.commit().await?;
        Ok(WriteOutcome::Written)
    }

    /// Permanently delete a department by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
