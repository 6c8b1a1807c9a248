use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Error envelope returned by the API: `{"error": {"message", "statusCode"}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    /// Numeric or numeric string; anything else reads as absent.
    #[serde(default, deserialize_with = "lenient_status_code")]
    pub status_code: Option<u16>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatusCode {
    Number(u64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_status_code<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = match RawStatusCode::deserialize(deserializer)? {
        RawStatusCode::Number(code) => u16::try_from(code).ok(),
        RawStatusCode::Text(text) => text.trim().parse().ok(),
        RawStatusCode::Other(_) => None,
    };
    Ok(code)
}

impl ApiErrorBody {
    /// Message and code when the envelope carries a usable message.
    ///
    /// A missing or zero `statusCode` falls back to `http_status`.
    pub fn into_parts(self, http_status: u16) -> Option<(String, u16)> {
        let message = self.error.message.filter(|m| !m.is_empty())?;
        let code = self
            .error
            .status_code
            .filter(|code| *code != 0)
            .unwrap_or(http_status);
        Some((message, code))
    }
}
