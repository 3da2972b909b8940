//! Repository for the `processes` table.

use gridform_core::grid;
use gridform_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use gridform_core::types::DbId;
use sqlx::PgPool;

use crate::models::process::{CreateProcess, Process, ProcessSummary, UpdateProcess};

/// Column list shared across full-row queries to avoid repetition.
const COLUMNS: &str =
    "id, process_name, description, grid_data, created_at, updated_at, is_active";

/// Column list for summary queries. `grid_count` is the stored array
/// length, 0 when the document is empty or absent.
const SUMMARY_COLUMNS: &str = "\
    id, process_name, description, \
    COALESCE(jsonb_array_length(grid_data), 0)::bigint AS grid_count, \
    created_at, is_active";

/// Provides CRUD and search operations for processes.
pub struct ProcessRepo;

impl ProcessRepo {
    /// Insert a new process, returning the created row.
    ///
    /// Grid items are serialized to a JSONB array; an omitted list
    /// stores as `[]`.
    pub async fn create(pool: &PgPool, input: &CreateProcess) -> Result<Process, sqlx::Error> {
        let query = format!(
            "INSERT INTO processes (process_name, description, grid_data)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(&input.process_name)
            .bind(&input.description)
            .bind(grid::items_to_value(&input.grid_data))
            .fetch_one(pool)
            .await
    }

    /// List process summaries, newest first.
    ///
    /// With `active_only` set, soft-deleted rows are filtered out.
    /// Limit and offset are clamped to sane bounds.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ProcessSummary>, sqlx::Error> {
        let limit_val = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset_val = clamp_offset(offset);
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM processes
             WHERE is_active = TRUE OR $1 = FALSE
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProcessSummary>(&query)
            .bind(active_only)
            .bind(limit_val)
            .bind(offset_val)
            .fetch_all(pool)
            .await
    }

    /// Find a process by its internal ID.
    ///
    /// Direct lookup includes soft-deleted rows; historical records
    /// stay retrievable by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Process>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes WHERE id = $1");
        sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a process by name. Includes soft-deleted rows, like
    /// [`Self::find_by_id`].
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Process>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes WHERE process_name = $1 LIMIT 1");
        sqlx::query_as::<_, Process>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Update a process. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed on every successful update.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProcess,
    ) -> Result<Option<Process>, sqlx::Error> {
        let grid_doc = input.grid_data.as_deref().map(grid::items_to_value);
        let query = format!(
            "UPDATE processes SET
                process_name = COALESCE($2, process_name),
                description  = COALESCE($3, description),
                grid_data    = COALESCE($4, grid_data),
                is_active    = COALESCE($5, is_active),
                updated_at   = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .bind(&input.process_name)
            .bind(&input.description)
            .bind(grid_doc)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a process by ID. Returns `true` if the row exists.
    ///
    /// No activity guard: soft-deleting an already-inactive row still
    /// succeeds, since the row is present and ends up inactive.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE processes SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a process by ID. Returns `true` if a row was
    /// removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM processes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Search summaries by case-insensitive substring against the name,
    /// the description, or the textual form of the grid document.
    ///
    /// The filter keeps the precedence the service has always shipped:
    /// `(name OR description) OR (grid text AND active)`. A name or
    /// description match can therefore surface inactive rows. Pinned by
    /// tests; change it deliberately or not at all.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<ProcessSummary>, sqlx::Error> {
        let pattern = format!("%{term}%");
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM processes
             WHERE (process_name ILIKE $1 OR description ILIKE $1)
                OR (grid_data::text ILIKE $1 AND is_active = TRUE)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ProcessSummary>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }
}
