use pessoas_core::SchemaVersion;

use std::fmt;

use serde::Serialize;

/// What the person dialog was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DialogMode {
    Create,
    Edit { id: i64, version: SchemaVersion },
}

/// The single write a save performs.
///
/// Migrations create the merged record in the other collection and then
/// delete the original. The two steps are not atomic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum SaveAction {
    CreateV1,
    CreateV2,
    UpdateV1 { id: i64 },
    UpdateV2 { id: i64 },
    MigrateUp { from_v1_id: i64 },
    MigrateDown { from_v2_id: i64 },
}

impl SaveAction {
    /// Route a save by dialog mode and the include-address toggle.
    pub fn decide(mode: DialogMode, include_address: bool) -> Self {
        match (mode, include_address) {
            (DialogMode::Create, false) => Self::CreateV1,
            (DialogMode::Create, true) => Self::CreateV2,
            (DialogMode::Edit { id, version: SchemaVersion::V1 }, false) => Self::UpdateV1 { id },
            (DialogMode::Edit { id, version: SchemaVersion::V1 }, true) => {
                Self::MigrateUp { from_v1_id: id }
            }
            (DialogMode::Edit { id, version: SchemaVersion::V2 }, true) => Self::UpdateV2 { id },
            (DialogMode::Edit { id, version: SchemaVersion::V2 }, false) => {
                Self::MigrateDown { from_v2_id: id }
            }
        }
    }

    /// Collection the saved record ends up in.
    pub fn target_version(&self) -> SchemaVersion {
        match self {
            Self::CreateV1 | Self::UpdateV1 { .. } | Self::MigrateDown { .. } => SchemaVersion::V1,
            Self::CreateV2 | Self::UpdateV2 { .. } | Self::MigrateUp { .. } => SchemaVersion::V2,
        }
    }

    pub fn is_migration(&self) -> bool {
        matches!(self, Self::MigrateUp { .. } | Self::MigrateDown { .. })
    }
}

impl fmt::Display for SaveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateV1 => write!(f, "create in v1"),
            Self::CreateV2 => write!(f, "create in v2"),
            Self::UpdateV1 { id } => write!(f, "update v1 record {id}"),
            Self::UpdateV2 { id } => write!(f, "update v2 record {id}"),
            Self::MigrateUp { from_v1_id } => write!(f, "migrate v1 record {from_v1_id} to v2"),
            Self::MigrateDown { from_v2_id } => write!(f, "migrate v2 record {from_v2_id} to v1"),
        }
    }
}
