use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile stored next to the token under the `user_info` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl UserInfo {
    /// True while `now` is strictly before the expiry.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
