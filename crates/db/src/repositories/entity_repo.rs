//! Generic soft-delete CRUD over an entity descriptor.
//!
//! Each table implements [`Entity`] once (table name, column list, which
//! fields an insert/update writes and how to bind them); [`EntityRepo`]
//! supplies the queries. Every read and write filters on
//! `deleted_at IS NULL`, so a soft-deleted row behaves exactly like a
//! missing one. Nothing here ever issues a hard `DELETE`.

use std::marker::PhantomData;

use flowpilot_core::pagination::Page;
use flowpilot_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};
use validator::Validate;

/// A `query_as` builder for entity `E`, as handed to the bind hooks.
pub type PgQueryAs<'q, E> = QueryAs<'q, Postgres, E, PgArguments>;

/// Static description of one soft-deletable table.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Insert payload.
    type Create: DeserializeOwned + Validate + Send + Sync + 'static;
    /// Partial update payload; `None` fields are left untouched.
    type Update: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Name used in error messages, e.g. `"Project"`.
    const NAME: &'static str;
    const TABLE: &'static str;
    /// Columns returned by every query.
    const COLUMNS: &'static str;
    /// Columns written on insert, in the order [`Entity::bind_create`] binds them.
    const INSERT_COLUMNS: &'static str;
    /// `SET` assignments for an update. `$1` is the id; fields start at `$2`
    /// and must be wrapped in `COALESCE` so unbound (`NULL`) fields keep
    /// their current value.
    const UPDATE_SET: &'static str;

    fn id(&self) -> DbId;

    fn bind_create<'q>(query: PgQueryAs<'q, Self>, input: &'q Self::Create)
        -> PgQueryAs<'q, Self>;

    fn bind_update<'q>(query: PgQueryAs<'q, Self>, input: &'q Self::Update)
        -> PgQueryAs<'q, Self>;
}

/// An entity owned by a parent row through a foreign key.
pub trait ChildEntity: Entity {
    type Parent: Entity;

    /// Foreign key column referencing `Parent::TABLE`.
    const PARENT_COLUMN: &'static str;

    /// Parent id carried by an insert payload.
    fn parent_of(input: &Self::Create) -> DbId;
}

/// Provides soft-delete CRUD for any [`Entity`].
pub struct EntityRepo<E>(PhantomData<fn() -> E>);

impl<E: Entity> EntityRepo<E> {
    /// Insert a new row, returning it with generated id and timestamps.
    pub async fn create(pool: &PgPool, input: &E::Create) -> Result<E, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} ({columns}) VALUES ({values}) RETURNING {returning}",
            table = E::TABLE,
            columns = E::INSERT_COLUMNS,
            values = placeholders(E::INSERT_COLUMNS),
            returning = E::COLUMNS,
        );
        E::bind_create(sqlx::query_as::<_, E>(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Find a live row by id. Soft-deleted rows are not returned.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
            E::COLUMNS,
            E::TABLE
        );
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a live row with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1 AND deleted_at IS NULL)",
            E::TABLE
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List live rows in insertion order.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL
             ORDER BY id ASC
             OFFSET $1 LIMIT $2",
            E::COLUMNS,
            E::TABLE
        );
        sqlx::query_as::<_, E>(&query)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &E::Update,
    ) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET {}, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            E::TABLE,
            E::UPDATE_SET,
            E::COLUMNS
        );
        E::bind_update(sqlx::query_as::<_, E>(&query).bind(id), input)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a row by id. Returns `true` if a live row was marked deleted.
    ///
    /// A second call on the same id returns `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
            E::TABLE
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

impl<E: ChildEntity> EntityRepo<E> {
    /// List live rows belonging to `parent_id`, in insertion order.
    ///
    /// The parent itself is not checked: an unknown or soft-deleted parent
    /// simply has no live children to return (or keeps returning the ones
    /// that were never deleted).
    pub async fn list_by_parent(
        pool: &PgPool,
        parent_id: DbId,
        page: Page,
    ) -> Result<Vec<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1 AND deleted_at IS NULL
             ORDER BY id ASC
             OFFSET $2 LIMIT $3",
            E::COLUMNS,
            E::TABLE,
            E::PARENT_COLUMN
        );
        sqlx::query_as::<_, E>(&query)
            .bind(parent_id)
            .bind(page.skip)
            .bind(page.limit)
            .fetch_all(pool)
            .await
    }
}

/// `$1, $2, ...` with one placeholder per comma-separated column.
fn placeholders(columns: &str) -> String {
    (1..=columns.split(',').count())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}
