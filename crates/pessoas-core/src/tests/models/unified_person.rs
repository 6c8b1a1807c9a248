use crate::tests::models::{v1_record, v2_record};
use crate::{Address, SchemaVersion, UnifiedPerson};

#[test]
fn given_v1_record_when_unified_then_tagged_v1_without_address() {
    let unified = UnifiedPerson::from(v1_record(1, "Ana", 1));

    assert_eq!(unified.version, SchemaVersion::V1);
    assert!(unified.endereco.is_none());
    assert!(!unified.has_address());
}

#[test]
fn given_v2_record_when_unified_then_tagged_v2_with_address() {
    let unified = UnifiedPerson::from(v2_record(2, "Bia", 2, Address::default()));

    assert_eq!(unified.version, SchemaVersion::V2);
    assert!(unified.endereco.is_some());
    assert!(!unified.has_address());
}

#[test]
fn given_unified_v1_when_serialized_then_no_endereco_key() {
    let value = serde_json::to_value(UnifiedPerson::from(v1_record(1, "Ana", 1))).unwrap();

    assert!(value.get("endereco").is_none());
    assert_eq!(value["version"], "v1");
    assert_eq!(value["nome"], "Ana");
}

#[test]
fn test_matches_name_case_insensitive() {
    let unified = UnifiedPerson::from(v1_record(1, "Ana Souza", 1));
    assert!(unified.matches("souza"));
    assert!(unified.matches("ANA"));
    assert!(!unified.matches("carla"));
}

#[test]
fn test_matches_email() {
    let mut record = v1_record(1, "Ana", 1);
    record.person.email = Some("Ana.Souza@Example.com".into());
    let unified = UnifiedPerson::from(record);

    assert!(unified.matches("example.COM"));
}

#[test]
fn test_matches_cpf_formatted_or_raw() {
    let unified = UnifiedPerson::from(v1_record(1, "Ana", 1));
    assert!(unified.matches("456789"));
    assert!(unified.matches("123.456"));
    assert!(!unified.matches("999"));
}

#[test]
fn test_blank_query_matches_everything() {
    let unified = UnifiedPerson::from(v1_record(1, "Ana", 1));
    assert!(unified.matches(""));
    assert!(unified.matches("   "));
}
