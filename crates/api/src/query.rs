//! Shared query parameter types for API handlers.

use gridform_core::types::DbId;
use serde::Deserialize;

/// Pagination and activity filter for `GET /processes/`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    /// Defaults to true: soft-deleted rows are hidden unless asked for.
    pub active_only: Option<bool>,
}

/// Identifying parameters for `GET /processes/fetch`.
///
/// At least one must be supplied; `process_id` wins when both are.
#[derive(Debug, Deserialize)]
pub struct FetchParams {
    pub process_id: Option<DbId>,
    pub process_name: Option<String>,
}

/// Deletion mode for `DELETE /processes/{process_id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    /// Defaults to true: flip `is_active` instead of removing the row.
    pub soft_delete: Option<bool>,
}
