//! Repository for the `ip_camera` table.

use sentra_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::ip_camera::{CreateIpCamera, IpCamera, IpCameraChanges};

const COLUMNS: &str = "id, name, ip_address";

/// Provides CRUD operations for IP camera records.
pub struct IpCameraRepo;

impl IpCameraRepo {
    /// Insert a new camera, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateIpCamera) -> Result<IpCamera, sqlx::Error> {
        let query = format!(
            "INSERT INTO ip_camera (name, ip_address)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IpCamera>(&query)
            .bind(&input.name)
            .bind(&input.ip_address)
            .fetch_one(pool)
            .await
    }

    /// Find a camera by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<IpCamera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ip_camera WHERE id = $1");
        sqlx::query_as::<_, IpCamera>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a camera by address. Backs the duplicate-address fast path; the
    /// `uq_ip_camera_ip_address` constraint is the real guard under
    /// concurrency.
    pub async fn find_by_address(
        pool: &PgPool,
        ip_address: &str,
    ) -> Result<Option<IpCamera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ip_camera WHERE ip_address = $1");
        sqlx::query_as::<_, IpCamera>(&query)
            .bind(ip_address)
            .fetch_optional(pool)
            .await
    }

    /// List all cameras in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<IpCamera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ip_camera ORDER BY id");
        sqlx::query_as::<_, IpCamera>(&query).fetch_all(pool).await
    }

    /// Apply a partial update as a single UPDATE statement covering exactly
    /// the `Some` fields in `changes`. Returns `None` if no row matches.
    /// Callers must reject an empty change set first.
    pub async fn update_fields(
        pool: &PgPool,
        id: DbId,
        changes: &IpCameraChanges,
    ) -> Result<Option<IpCamera>, sqlx::Error> {
        debug_assert!(!changes.is_empty());

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE ip_camera SET ");
        let mut set = qb.separated(", ");
        if let Some(name) = &changes.name {
            set.push("name = ").push_bind_unseparated(name);
        }
        if let Some(ip_address) = &changes.ip_address {
            set.push("ip_address = ").push_bind_unseparated(ip_address);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));

        qb.build_query_as::<IpCamera>().fetch_optional(pool).await
    }

    /// Delete a camera by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ip_camera WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
