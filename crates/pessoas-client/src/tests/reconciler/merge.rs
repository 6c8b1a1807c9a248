use crate::merge_collections;
use crate::tests::{v1_record, v2_record};

use pessoas_core::SchemaVersion;

#[test]
fn given_two_v1_and_three_v2_when_merged_then_five_sorted_newest_first() {
    let v1 = vec![v1_record(1, "Ana", 3), v1_record(2, "Bia", 10)];
    let v2 = vec![
        v2_record(1, "Caio", 7),
        v2_record(2, "Davi", 1),
        v2_record(3, "Eva", 15),
    ];

    let merged = merge_collections(v1, v2);

    assert_eq!(merged.len(), 5);
    assert!(
        merged
            .windows(2)
            .all(|pair| pair[0].data_cadastro >= pair[1].data_cadastro)
    );
    let names: Vec<&str> = merged.iter().map(|p| p.person.nome.as_str()).collect();
    assert_eq!(names, vec!["Eva", "Bia", "Caio", "Ana", "Davi"]);
}

#[test]
fn given_merged_list_then_only_v2_entries_carry_address() {
    let merged = merge_collections(
        vec![v1_record(1, "Ana", 3), v1_record(2, "Bia", 10)],
        vec![v2_record(1, "Caio", 7), v2_record(2, "Davi", 1)],
    );

    for person in &merged {
        match person.version {
            SchemaVersion::V1 => assert!(person.endereco.is_none()),
            SchemaVersion::V2 => assert!(person.endereco.is_some()),
        }
    }
}

#[test]
fn given_same_id_in_both_collections_when_merged_then_both_kept() {
    let merged = merge_collections(vec![v1_record(5, "Ana", 2)], vec![v2_record(5, "Ana", 2)]);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].version, SchemaVersion::V1);
    assert_eq!(merged[1].version, SchemaVersion::V2);
}

#[test]
fn given_empty_collections_when_merged_then_empty() {
    assert!(merge_collections(Vec::new(), Vec::new()).is_empty());
}
