use crate::ClientError;

use pessoas_core::{SchemaVersion, ValidationErrors};
use pessoas_session::SessionError;

use std::path::PathBuf;

#[test]
fn given_api_error_when_user_message_then_message_and_code() {
    let err = ClientError::api(422, "CPF inválido");

    assert_eq!(err.user_message(), "CPF inválido (422)");
    assert_eq!(err.status_code(), Some(422));
}

#[test]
fn given_validation_error_when_user_message_then_fields_listed() {
    let mut errors = ValidationErrors::new();
    errors.push("nome", "Name is required");
    errors.push("cpf", "CPF must have 11 digits");

    let err = ClientError::validation(errors);

    assert_eq!(
        err.user_message(),
        "nome: Name is required; cpf: CPF must have 11 digits"
    );
    assert_eq!(err.status_code(), None);
}

#[test]
fn given_migration_failure_when_user_message_then_both_records_named() {
    let err = ClientError::migration_incomplete(
        SchemaVersion::V2,
        Some(10),
        SchemaVersion::V1,
        4,
        ClientError::api(500, "boom"),
    );

    let text = err.user_message();
    assert!(text.contains("v2 as record 10"));
    assert!(text.contains("v1 record 4"));
    assert!(text.contains("boom (500)"));
}

#[test]
fn given_migration_failure_when_source_inspected_then_delete_error_kept() {
    let err = ClientError::migration_incomplete(
        SchemaVersion::V1,
        None,
        SchemaVersion::V2,
        8,
        ClientError::api(404, "gone"),
    );

    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert!(source.is_some_and(|text| text.contains("gone")));
}

#[test]
fn given_session_error_when_converted_then_session_variant() {
    let err: ClientError = SessionError::corrupted(PathBuf::from("session.json"), "bad json").into();

    assert!(matches!(err, ClientError::Session { .. }));
}

#[test]
fn given_not_found_when_displayed_then_names_version() {
    let err = ClientError::not_found(7, SchemaVersion::V2);

    assert_eq!(err.user_message(), "Person 7 not found in v2");
}
