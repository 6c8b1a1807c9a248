use crate::SchemaVersion;

use std::str::FromStr;

#[test]
fn test_schema_version_as_str() {
    assert_eq!(SchemaVersion::V1.as_str(), "v1");
    assert_eq!(SchemaVersion::V2.as_str(), "v2");
}

#[test]
fn test_schema_version_from_str() {
    assert_eq!(SchemaVersion::from_str("v1").unwrap(), SchemaVersion::V1);
    assert_eq!(SchemaVersion::from_str("V2").unwrap(), SchemaVersion::V2);
    assert!(SchemaVersion::from_str("v3").is_err());
}

#[test]
fn test_schema_version_default() {
    assert_eq!(SchemaVersion::default(), SchemaVersion::V1);
}

#[test]
fn test_schema_version_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&SchemaVersion::V2).unwrap(), "\"v2\"");
}
