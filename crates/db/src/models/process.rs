//! Process entity model and DTOs.

use gridform_core::grid::{self, GridItem};
use gridform_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A process row from the `processes` table.
///
/// `grid_data` stays as the raw JSONB document here; convert to
/// [`ProcessDetail`] to decode it.
#[derive(Debug, Clone, FromRow)]
pub struct Process {
    pub id: DbId,
    pub process_name: String,
    pub description: Option<String>,
    pub grid_data: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_active: bool,
}

/// Full response shape with the grid document decoded.
///
/// Decoding is lenient: malformed stored elements become placeholder
/// items (see [`gridform_core::grid::items_from_value`]), so a bad
/// element never fails the whole response.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessDetail {
    pub id: DbId,
    pub process_name: String,
    pub description: Option<String>,
    pub grid_data: Vec<GridItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_active: bool,
}

impl From<Process> for ProcessDetail {
    fn from(row: Process) -> Self {
        Self {
            grid_data: grid::items_from_value(&row.grid_data),
            id: row.id,
            process_name: row.process_name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
            is_active: row.is_active,
        }
    }
}

/// Summary row for list and search responses.
///
/// `grid_count` is computed in SQL from the stored array length.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProcessSummary {
    pub id: DbId,
    pub process_name: String,
    pub description: Option<String>,
    pub grid_count: i64,
    pub created_at: Timestamp,
    pub is_active: bool,
}

/// DTO for creating a new process.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProcess {
    pub process_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub grid_data: Vec<GridItem>,
}

/// DTO for partially updating a process. All fields are optional;
/// absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProcess {
    pub process_name: Option<String>,
    pub description: Option<String>,
    pub grid_data: Option<Vec<GridItem>>,
    pub is_active: Option<bool>,
}

impl UpdateProcess {
    /// True when no field is supplied. Such an update is rejected at
    /// the boundary before any database round trip.
    pub fn is_empty(&self) -> bool {
        self.process_name.is_none()
            && self.description.is_none()
            && self.grid_data.is_none()
            && self.is_active.is_none()
    }
}
