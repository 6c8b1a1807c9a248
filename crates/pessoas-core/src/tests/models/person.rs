use crate::{ApiErrorBody, PersonRecord, PersonV2Payload, PersonV2Record};

use serde_json::json;

#[test]
fn given_v1_json_when_deserialized_then_fields_and_timestamps_parsed() {
    let record: PersonRecord = serde_json::from_value(json!({
        "id": 7,
        "nome": "Maria",
        "cpf": "12345678900",
        "email": "maria@example.com",
        "dataNascimento": "1990-05-01T00:00:00",
        "dataCadastro": "2024-03-01T10:00:00",
        "dataAtualizacao": "2024-03-02T10:00:00Z"
    }))
    .unwrap();

    assert_eq!(record.id, 7);
    assert_eq!(record.person.email.as_deref(), Some("maria@example.com"));
    assert!(record.person.sexo.is_none());
    assert!(record.data_atualizacao > record.data_cadastro);
}

#[test]
fn given_v2_json_without_address_when_deserialized_then_address_is_blank() {
    let record: PersonV2Record = serde_json::from_value(json!({
        "id": 3,
        "nome": "João",
        "cpf": "98765432100",
        "dataNascimento": "1985-01-20",
        "dataCadastro": "2024-03-01T10:00:00Z",
        "dataAtualizacao": "2024-03-01T10:00:00Z"
    }))
    .unwrap();

    assert!(record.endereco.is_blank());
}

#[test]
fn given_v2_json_with_partial_address_when_deserialized_then_missing_fields_empty() {
    let record: PersonV2Record = serde_json::from_value(json!({
        "id": 3,
        "nome": "João",
        "cpf": "98765432100",
        "dataNascimento": "1985-01-20",
        "endereco": { "rua": "Rua A", "cidade": null },
        "dataCadastro": "2024-03-01T10:00:00Z",
        "dataAtualizacao": "2024-03-01T10:00:00Z"
    }))
    .unwrap();

    assert_eq!(record.endereco.rua, "Rua A");
    assert_eq!(record.endereco.cidade, "");
    assert_eq!(record.endereco.cep, "");
}

#[test]
fn given_v2_payload_when_serialized_then_flat_with_nested_address() {
    let payload = PersonV2Payload {
        person: super::payload("Maria", "12345678900"),
        endereco: crate::Address {
            rua: "Rua A".into(),
            numero: "10".into(),
            cidade: "Recife".into(),
            estado: "PE".into(),
            cep: "50000000".into(),
        },
    };

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["nome"], "Maria");
    assert_eq!(value["dataNascimento"], "1990-05-01T00:00:00Z");
    assert_eq!(value["endereco"]["cep"], "50000000");
    assert!(value.get("email").is_none());
}

#[test]
fn test_api_error_body_uses_body_status_code() {
    let body: ApiErrorBody =
        serde_json::from_value(json!({"error": {"message": "not found", "statusCode": 404}}))
            .unwrap();
    assert_eq!(body.into_parts(400), Some(("not found".to_string(), 404)));
}

#[test]
fn test_api_error_body_falls_back_to_http_status() {
    let body: ApiErrorBody =
        serde_json::from_value(json!({"error": {"message": "conflict"}})).unwrap();
    assert_eq!(body.into_parts(409), Some(("conflict".to_string(), 409)));
}

#[test]
fn test_api_error_body_without_message_is_unusable() {
    let body: ApiErrorBody =
        serde_json::from_value(json!({"error": {"statusCode": 500}})).unwrap();
    assert_eq!(body.into_parts(500), None);
}

#[test]
fn test_api_error_body_accepts_string_status_code() {
    let body: ApiErrorBody =
        serde_json::from_value(json!({"error": {"message": "x", "statusCode": "404"}})).unwrap();
    assert_eq!(body.into_parts(500), Some(("x".to_string(), 404)));
}

#[test]
fn test_api_error_body_keeps_message_when_status_code_unusable() {
    for code in [json!("not-a-code"), json!(null), json!(70000), json!({"nested": 1})] {
        let body: ApiErrorBody =
            serde_json::from_value(json!({"error": {"message": "x", "statusCode": code}}))
                .unwrap();
        assert_eq!(body.into_parts(502), Some(("x".to_string(), 502)));
    }
}
