use crate::models::timestamp::string_or_empty;

use serde::{Deserialize, Deserializer, Serialize};

/// Postal address carried only by v2 person records.
///
/// Sub-fields the server omits (or sends as `null`) become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub rua: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub numero: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub cidade: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub estado: String,
    /// Eight digits, no punctuation
    #[serde(default, deserialize_with = "string_or_empty")]
    pub cep: String,
}

impl Address {
    /// True when every field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        [&self.rua, &self.numero, &self.cidade, &self.estado, &self.cep]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

/// Deserialize an address that may be missing or `null` into a default one.
pub(crate) fn address_or_default<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Address>::deserialize(deserializer).map(Option::unwrap_or_default)
}
