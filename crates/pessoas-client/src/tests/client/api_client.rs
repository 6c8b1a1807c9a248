use crate::ClientError;
use crate::client::api_client::{error_from_response, parse_success_body};

use pessoas_core::PersonRecord;

use reqwest::StatusCode;
use serde_json::Value;

#[test]
fn given_structured_404_when_parsed_then_message_and_code_kept() {
    let body = br#"{"error":{"message":"not found","statusCode":404}}"#;

    let err = error_from_response(StatusCode::NOT_FOUND, body);

    let text = err.user_message();
    assert!(text.contains("not found"));
    assert!(text.contains("404"));
    assert_eq!(err.status_code(), Some(404));
}

#[test]
fn given_unparseable_500_when_parsed_then_status_line_used() {
    let err = error_from_response(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");

    match &err {
        ClientError::Api {
            status_code,
            message,
            ..
        } => {
            assert_eq!(*status_code, 500);
            assert_eq!(message, "Error: Internal Server Error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(!err.user_message().contains("oops"));
}

#[test]
fn given_error_body_without_code_when_parsed_then_http_status_used() {
    let body = br#"{"error":{"message":"CPF already registered"}}"#;

    let err = error_from_response(StatusCode::CONFLICT, body);

    assert_eq!(err.user_message(), "CPF already registered (409)");
}

#[test]
fn given_empty_error_body_when_parsed_then_status_line_used() {
    let err = error_from_response(StatusCode::UNAUTHORIZED, b"");

    assert_eq!(err.user_message(), "Error: Unauthorized (401)");
}

#[test]
fn given_empty_success_body_when_parsed_then_none() {
    assert!(parse_success_body::<Value>(b"").is_none());
    assert!(parse_success_body::<Value>(b"  \n").is_none());
}

#[test]
fn given_non_json_success_body_when_parsed_then_none() {
    assert!(parse_success_body::<Vec<PersonRecord>>(b"OK").is_none());
}

#[test]
fn given_record_body_when_parsed_then_record_returned() {
    let body = br#"{
        "id": 3,
        "nome": "Ana",
        "cpf": "12345678900",
        "dataNascimento": "1990-05-01T00:00:00Z",
        "dataCadastro": "2024-06-01T10:00:00Z",
        "dataAtualizacao": "2024-06-01T10:00:00Z"
    }"#;

    let record: PersonRecord = parse_success_body(body).unwrap();

    assert_eq!(record.id, 3);
    assert_eq!(record.person.nome, "Ana");
}
