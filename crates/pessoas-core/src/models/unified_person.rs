use crate::models::timestamp;
use crate::{
    Address, PersonPayload, PersonRecord, PersonV2Record, SchemaVersion, strip_non_digits,
};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the merged person list.
///
/// Read-only projection over both schema versions, used for display and as
/// the seed of an edit. Invariant: `endereco` is `None` exactly when
/// `version` is `V1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedPerson {
    pub id: i64,
    #[serde(flatten)]
    pub person: PersonPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<Address>,
    #[serde(with = "timestamp")]
    pub data_cadastro: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub data_atualizacao: DateTime<Utc>,
    pub version: SchemaVersion,
}

impl From<PersonRecord> for UnifiedPerson {
    fn from(record: PersonRecord) -> Self {
        Self {
            id: record.id,
            person: record.person,
            endereco: None,
            data_cadastro: record.data_cadastro,
            data_atualizacao: record.data_atualizacao,
            version: SchemaVersion::V1,
        }
    }
}

impl From<PersonV2Record> for UnifiedPerson {
    fn from(record: PersonV2Record) -> Self {
        Self {
            id: record.id,
            person: record.person,
            endereco: Some(record.endereco),
            data_cadastro: record.data_cadastro,
            data_atualizacao: record.data_atualizacao,
            version: SchemaVersion::V2,
        }
    }
}

impl UnifiedPerson {
    /// True when the record carries a non-blank address.
    pub fn has_address(&self) -> bool {
        self.endereco.as_ref().is_some_and(|address| !address.is_blank())
    }

    /// Search filter: case-insensitive on name and e-mail, digits on CPF.
    /// A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }

        let lowered = query.to_lowercase();
        if self.person.nome.to_lowercase().contains(&lowered) {
            return true;
        }

        if self
            .person
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(&lowered))
        {
            return true;
        }

        if self.person.cpf.contains(query) {
            return true;
        }

        let digits = strip_non_digits(query);
        !digits.is_empty() && strip_non_digits(&self.person.cpf).contains(&digits)
    }
}
