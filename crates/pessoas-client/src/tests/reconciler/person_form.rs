use crate::PersonForm;
use crate::tests::{unified_v1, unified_v2};

use pessoas_core::{Address, UnifiedPerson};

fn filled_form() -> PersonForm {
    let mut form = PersonForm::blank();
    form.nome = "  Ana Souza ".to_string();
    form.data_nascimento = "1990-05-01".to_string();
    form.set_cpf("12345678900");
    form
}

#[test]
fn given_v1_record_when_staged_then_cpf_punctuated_and_address_off() {
    let form = PersonForm::from_person(&unified_v1(1));

    assert_eq!(form.cpf(), "123.456.789-00");
    assert_eq!(form.data_nascimento, "1988-02-29");
    assert!(!form.include_address);
}

#[test]
fn given_v2_record_when_staged_then_cep_punctuated_and_address_on() {
    let form = PersonForm::from_person(&unified_v2(1));

    assert!(form.include_address);
    assert_eq!(form.address().cep, "50000-123");
}

#[test]
fn given_v2_record_with_blank_address_when_staged_then_address_off() {
    let mut person: UnifiedPerson = unified_v2(1);
    person.endereco = Some(Address::default());

    let form = PersonForm::from_person(&person);

    assert!(!form.include_address);
}

#[test]
fn given_punctuated_form_when_payload_built_then_digits_only() {
    let mut form = filled_form();
    form.include_address = true;
    form.set_address(Address {
        rua: "Rua A".to_string(),
        numero: "1".to_string(),
        cidade: "Olinda".to_string(),
        estado: "PE".to_string(),
        cep: "53000-000".to_string(),
    });

    let payload = form.to_v2_payload().unwrap();

    assert_eq!(payload.person.cpf, "12345678900");
    assert_eq!(payload.person.nome, "Ana Souza");
    assert_eq!(payload.endereco.cep, "53000000");
}

#[test]
fn given_blank_optional_fields_when_payload_built_then_omitted() {
    let mut form = filled_form();
    form.email = "   ".to_string();

    let payload = form.to_payload().unwrap();

    assert_eq!(payload.email, None);
    assert_eq!(payload.sexo, None);
    assert_eq!(payload.data_nascimento.to_wire(), "1990-05-01T00:00:00Z");
}

#[test]
fn given_incomplete_form_when_validated_then_every_failing_field_reported() {
    let mut form = PersonForm::blank();
    form.set_cpf("123");
    form.email = "not-an-email".to_string();

    let errors = form.validate().unwrap_err();

    assert!(errors.get("nome").is_some());
    assert!(errors.get("cpf").is_some());
    assert!(errors.get("dataNascimento").is_some());
    assert!(errors.get("email").is_some());
    assert!(errors.get("endereco.rua").is_none());
}

#[test]
fn given_address_toggle_on_when_address_missing_then_address_fields_reported() {
    let mut form = filled_form();
    form.include_address = true;
    form.set_cep("1234");

    let errors = form.validate().unwrap_err();

    assert!(errors.get("endereco.rua").is_some());
    assert!(errors.get("endereco.cep").is_some());
    assert!(errors.get("nome").is_none());
}

#[test]
fn given_address_toggle_off_when_address_partial_then_v1_payload_valid() {
    let mut form = filled_form();
    form.address_mut().rua = "Rua sem número".to_string();

    assert!(form.to_payload().is_ok());
}

#[test]
fn given_overlong_cpf_when_set_then_truncated() {
    let mut form = PersonForm::blank();
    form.set_cpf("123456789001234");

    assert_eq!(form.cpf(), "123.456.789-00");
}
