use pessoas_core::{PersonRecord, PersonV2Record, UnifiedPerson};

/// Tag both collections and combine them, newest `dataCadastro` first.
///
/// The sort is stable: records registered at the same instant keep v1 before
/// v2 and server order within each collection.
pub fn merge_collections(v1: Vec<PersonRecord>, v2: Vec<PersonV2Record>) -> Vec<UnifiedPerson> {
    let mut merged: Vec<UnifiedPerson> = Vec::with_capacity(v1.len() + v2.len());
    merged.extend(v1.into_iter().map(UnifiedPerson::from));
    merged.extend(v2.into_iter().map(UnifiedPerson::from));
    merged.sort_by(|a, b| b.data_cadastro.cmp(&a.data_cadastro));
    merged
}
