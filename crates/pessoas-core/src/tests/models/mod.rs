mod birth_date;
mod person;
mod schema_version;
mod unified_person;

use crate::{Address, BirthDate, PersonPayload, PersonRecord, PersonV2Record};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub(crate) fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

pub(crate) fn payload(nome: &str, cpf: &str) -> PersonPayload {
    PersonPayload {
        nome: nome.to_string(),
        sexo: None,
        email: None,
        data_nascimento: BirthDate::new(NaiveDate::from_ymd_opt(1990, 5, 1).unwrap()),
        naturalidade: None,
        nacionalidade: None,
        cpf: cpf.to_string(),
    }
}

pub(crate) fn v1_record(id: i64, nome: &str, day: u32) -> PersonRecord {
    PersonRecord {
        id,
        person: payload(nome, "12345678900"),
        data_cadastro: at(day),
        data_atualizacao: at(day),
    }
}

pub(crate) fn v2_record(id: i64, nome: &str, day: u32, endereco: Address) -> PersonV2Record {
    PersonV2Record {
        id,
        person: payload(nome, "98765432100"),
        endereco,
        data_cadastro: at(day),
        data_atualizacao: at(day),
    }
}
