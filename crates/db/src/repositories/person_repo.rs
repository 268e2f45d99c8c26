//! Repository for the `person` table.

use sentra_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::person::{CreatePerson, Person, PersonChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, full_name, created_at, picture";

/// Provides CRUD operations for person records.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO person (name, full_name, created_at, picture)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.full_name)
            .bind(input.created_at)
            .bind(&input.picture)
            .fetch_one(pool)
            .await
    }

    /// Find a person by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM person WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a person by name. Backs the duplicate-name fast path; the
    /// `uq_person_name` constraint is the real guard under concurrency.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM person WHERE name = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all persons in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM person ORDER BY id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Total number of person rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM person")
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update as a single UPDATE statement covering exactly
    /// the `Some` fields in `changes`.
    ///
    /// Returns `None` if no row with the given `id` exists. Callers must
    /// reject an empty change set before calling; an empty SET clause is
    /// not valid SQL.
    pub async fn update_fields(
        pool: &PgPool,
        id: DbId,
        changes: &PersonChanges,
    ) -> Result<Option<Person>, sqlx::Error> {
        debug_assert!(!changes.is_empty());

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE person SET ");
        let mut set = qb.separated(", ");
        if let Some(name) = &changes.name {
            set.push("name = ").push_bind_unseparated(name);
        }
        if let Some(full_name) = &changes.full_name {
            set.push("full_name = ").push_bind_unseparated(full_name);
        }
        if let Some(picture) = &changes.picture {
            set.push("picture = ").push_bind_unseparated(picture);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        qb.build_query_as::<Person>().fetch_optional(pool).await
    }

    /// Delete a person by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
