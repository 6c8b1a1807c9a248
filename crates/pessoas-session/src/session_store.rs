use crate::{KeyValueStore, SessionError, SessionResult, TOKEN_KEY, USER_INFO_KEY, UserInfo};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{info, warn};

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Owns the session: bearer token plus user profile.
///
/// Logout removes only the two session keys; anything else the client keeps
/// in the same store is left untouched.
pub struct SessionStore {
    store: Box<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Store token and profile in one write, replacing any prior session.
    pub fn set_session(
        &self,
        token: &str,
        username: &str,
        email: &str,
        expires_at: DateTime<Utc>,
    ) -> SessionResult<()> {
        let user_info = UserInfo {
            username: username.to_string(),
            email: email.to_string(),
            expires_at,
        };
        let user_json = serde_json::to_string(&user_info)?;

        self.store
            .set_all(&[(TOKEN_KEY, token), (USER_INFO_KEY, &user_json)])?;

        info!("Session stored for {username} (expires {expires_at})");
        Ok(())
    }

    /// Read one session key. A corrupted store holds no session; the next
    /// `set_session` replaces it.
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        match self.store.get(key) {
            Err(SessionError::Corrupted { path, message, .. }) => {
                warn!("Ignoring corrupted session store at {path:?}: {message}");
                Ok(None)
            }
            other => other,
        }
    }

    pub fn token(&self) -> SessionResult<Option<String>> {
        self.read(TOKEN_KEY)
    }

    /// Stored profile. An unreadable profile counts as absent.
    pub fn user_info(&self) -> SessionResult<Option<UserInfo>> {
        let Some(raw) = self.read(USER_INFO_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<UserInfo>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Ignoring unreadable user profile: {e}");
                Ok(None)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }

    /// True iff a token and a profile exist and the profile expires after `now`.
    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        let check = || -> SessionResult<bool> {
            if self.token()?.is_none_or(|token| token.is_empty()) {
                return Ok(false);
            }
            Ok(self.user_info()?.is_some_and(|user| user.is_valid_at(now)))
        };

        check().unwrap_or_else(|e| {
            warn!("Session check failed: {e}");
            false
        })
    }

    pub fn clear_session(&self) -> SessionResult<()> {
        self.store.remove_all(&[TOKEN_KEY, USER_INFO_KEY])?;
        info!("Session cleared");
        Ok(())
    }

    /// `{"Authorization": "Bearer <token>"}` when a token is stored, else empty.
    pub fn auth_header(&self) -> SessionResult<HashMap<&'static str, String>> {
        let mut headers = HashMap::new();
        if let Some(token) = self.token()?.filter(|token| !token.is_empty()) {
            headers.insert(AUTHORIZATION_HEADER, format!("Bearer {token}"));
        }
        Ok(headers)
    }
}
