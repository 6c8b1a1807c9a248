use crate::{DialogMode, SaveAction};

use pessoas_core::SchemaVersion;

#[test]
fn test_save_routing_table() {
    let v1 = DialogMode::Edit {
        id: 4,
        version: SchemaVersion::V1,
    };
    let v2 = DialogMode::Edit {
        id: 9,
        version: SchemaVersion::V2,
    };

    let cases = [
        (DialogMode::Create, false, SaveAction::CreateV1),
        (DialogMode::Create, true, SaveAction::CreateV2),
        (v1, false, SaveAction::UpdateV1 { id: 4 }),
        (v1, true, SaveAction::MigrateUp { from_v1_id: 4 }),
        (v2, true, SaveAction::UpdateV2 { id: 9 }),
        (v2, false, SaveAction::MigrateDown { from_v2_id: 9 }),
    ];

    for (mode, include_address, expected) in cases {
        assert_eq!(
            SaveAction::decide(mode, include_address),
            expected,
            "mode {mode:?}, include_address {include_address}"
        );
    }
}

#[test]
fn given_actions_when_target_version_then_matches_address_toggle() {
    assert_eq!(SaveAction::CreateV1.target_version(), SchemaVersion::V1);
    assert_eq!(SaveAction::CreateV2.target_version(), SchemaVersion::V2);
    assert_eq!(
        SaveAction::MigrateUp { from_v1_id: 1 }.target_version(),
        SchemaVersion::V2
    );
    assert_eq!(
        SaveAction::MigrateDown { from_v2_id: 1 }.target_version(),
        SchemaVersion::V1
    );
}

#[test]
fn test_only_cross_version_saves_are_migrations() {
    assert!(SaveAction::MigrateUp { from_v1_id: 1 }.is_migration());
    assert!(SaveAction::MigrateDown { from_v2_id: 1 }.is_migration());
    assert!(!SaveAction::UpdateV1 { id: 1 }.is_migration());
    assert!(!SaveAction::CreateV2.is_migration());
}
