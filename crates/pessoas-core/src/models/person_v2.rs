//! Person schema v2: v1 fields plus a mandatory address.

use crate::models::address::address_or_default;
use crate::models::timestamp;
use crate::{Address, PersonPayload};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonV2Payload {
    #[serde(flatten)]
    pub person: PersonPayload,
    #[serde(default, deserialize_with = "address_or_default")]
    pub endereco: Address,
}

/// A v2 person as returned by the server. `endereco` is never absent after
/// deserialization; a missing object becomes an all-empty address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonV2Record {
    pub id: i64,
    #[serde(flatten)]
    pub person: PersonPayload,
    #[serde(default, deserialize_with = "address_or_default")]
    pub endereco: Address,
    #[serde(with = "timestamp")]
    pub data_cadastro: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub data_atualizacao: DateTime<Utc>,
}
