//! Person schema v1: personal data without an address.

use crate::BirthDate;
use crate::models::timestamp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields sent on create/update. Shared by both schema versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub data_nascimento: BirthDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naturalidade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nacionalidade: Option<String>,
    /// Eleven digits, no punctuation
    pub cpf: String,
}

/// A v1 person as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: i64,
    #[serde(flatten)]
    pub person: PersonPayload,
    #[serde(with = "timestamp")]
    pub data_cadastro: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub data_atualizacao: DateTime<Utc>,
}
