//! Data Transfer Objects for the HTTP API.
//!
//! Most payloads are the core types themselves since they already derive
//! Serialize/Deserialize; this module adds the request/response envelopes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing types that are already serializable
pub use crate::api::{
    BlockId, DayId, Scene, SceneNumber, SceneStatus, SceneSummary, ShootingDay,
};
pub use crate::engine::{DragSource, DropOutcome, DropTarget, SceneImport};
pub use crate::services::Table;

use crate::engine::{LocationFilter, PoolFilter};

/// Request body for merging scenes from the script subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportScenesRequest {
    pub scenes: Vec<SceneImport>,
}

/// Response for the scene import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportScenesResponse {
    /// Number of scene records received.
    pub imported: usize,
}

/// Request body for a manual status edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatusRequest {
    pub status: SceneStatus,
}

/// Request body for placing a scene into a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignSceneRequest {
    pub day_id: DayId,
    pub block_id: BlockId,
}

/// Request body for a drag-and-drop dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropRequest {
    pub source: DragSource,
    pub target: DropTarget,
}

/// Request body for creating a shooting day.
///
/// `today` anchors the first day when the board is empty; subsequent days
/// follow the last existing date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDayRequest {
    pub today: NaiveDate,
}

/// Response for day creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDayResponse {
    pub day: ShootingDay,
}

/// Request body for a day date edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDayDateRequest {
    pub date: NaiveDate,
}

/// Request body for inserting a schedule block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBlockRequest {
    /// Time-slot label ("9:30 AM").
    pub time: String,
    /// Insert after this block; defaults to just before the end-of-day
    /// sentinel.
    #[serde(default)]
    pub after: Option<BlockId>,
}

/// Response for block insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBlockResponse {
    pub block_id: BlockId,
    pub day: ShootingDay,
}

/// Query parameters for the available pool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PoolQuery {
    /// Comma-separated status list ("not_scheduled,pickups"). Defaults to
    /// `not_scheduled`.
    #[serde(default)]
    pub statuses: Option<String>,
    /// Parent location substring filter.
    #[serde(default)]
    pub location: Option<String>,
    /// Comma-separated sub-location substrings.
    #[serde(default)]
    pub sublocations: Option<String>,
}

impl PoolQuery {
    /// Convert query parameters into an engine filter.
    pub fn into_filter(self) -> Result<PoolFilter, String> {
        let statuses = match self.statuses {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    serde_json::from_value(serde_json::Value::String(s.to_string()))
                        .map_err(|_| format!("unknown scene status: {}", s))
                })
                .collect::<Result<Vec<SceneStatus>, String>>()?,
            None => vec![SceneStatus::NotScheduled],
        };

        let location = self.location.map(|parent| LocationFilter {
            parent,
            sublocations: self
                .sublocations
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        });

        Ok(PoolFilter { statuses, location })
    }
}

/// Request body for a remote-change notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteChangeRequest {
    pub table: Table,
}

/// Full board snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    pub scenes: Vec<Scene>,
    pub days: Vec<ShootingDay>,
}

/// Sync status surfaced to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatusResponse {
    /// Most recent persistence failure, cleared on the next success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_error: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub repository: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_query_defaults_to_not_scheduled() {
        let filter = PoolQuery::default().into_filter().unwrap();
        assert_eq!(filter.statuses, vec![SceneStatus::NotScheduled]);
        assert!(filter.location.is_none());
    }

    #[test]
    fn test_pool_query_parses_statuses_and_location() {
        let query = PoolQuery {
            statuses: Some("not_scheduled, pickups".to_string()),
            location: Some("WAREHOUSE".to_string()),
            sublocations: Some("FLOOR,OFFICE".to_string()),
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(
            filter.statuses,
            vec![SceneStatus::NotScheduled, SceneStatus::Pickups]
        );
        let location = filter.location.unwrap();
        assert_eq!(location.parent, "WAREHOUSE");
        assert_eq!(location.sublocations, vec!["FLOOR", "OFFICE"]);
    }

    #[test]
    fn test_pool_query_rejects_unknown_status() {
        let query = PoolQuery {
            statuses: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());
    }
}
