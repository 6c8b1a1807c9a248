mod reconciler;

use pessoas_core::{Address, BirthDate, PersonPayload, PersonRecord, PersonV2Record, UnifiedPerson};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub(crate) fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, 9, 30, 0).unwrap()
}

pub(crate) fn payload(nome: &str) -> PersonPayload {
    PersonPayload {
        nome: nome.to_string(),
        sexo: Some("F".to_string()),
        email: Some(format!("{}@example.com", nome.to_lowercase())),
        data_nascimento: BirthDate::new(NaiveDate::from_ymd_opt(1988, 2, 29).unwrap()),
        naturalidade: Some("Recife".to_string()),
        nacionalidade: Some("Brasileira".to_string()),
        cpf: "12345678900".to_string(),
    }
}

pub(crate) fn address() -> Address {
    Address {
        rua: "Rua das Flores".to_string(),
        numero: "42".to_string(),
        cidade: "Recife".to_string(),
        estado: "PE".to_string(),
        cep: "50000123".to_string(),
    }
}

pub(crate) fn v1_record(id: i64, nome: &str, day: u32) -> PersonRecord {
    PersonRecord {
        id,
        person: payload(nome),
        data_cadastro: at(day),
        data_atualizacao: at(day),
    }
}

pub(crate) fn v2_record(id: i64, nome: &str, day: u32) -> PersonV2Record {
    PersonV2Record {
        id,
        person: payload(nome),
        endereco: address(),
        data_cadastro: at(day),
        data_atualizacao: at(day),
    }
}

pub(crate) fn unified_v1(id: i64) -> UnifiedPerson {
    UnifiedPerson::from(v1_record(id, "Ana", 1))
}

pub(crate) fn unified_v2(id: i64) -> UnifiedPerson {
    UnifiedPerson::from(v2_record(id, "Bia", 2))
}
