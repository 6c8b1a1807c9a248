use crate::{ClientError, ClientResult};

use pessoas_core::{ApiErrorBody, AuthResponse, Credentials, Registration};
use pessoas_session::SessionStore;

use std::sync::Arc;

use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const AUTH_LOGIN_PATH: &str = "/api/Auth/login";
pub const AUTH_REGISTER_PATH: &str = "/api/Auth/register";

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for the person registry REST API.
///
/// Every request carries `Content-Type: application/json` plus the bearer
/// header from the shared [`SessionStore`]. Requests are sent once: no
/// retry, no timeout beyond the transport defaults.
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    session: Arc<SessionStore>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:5000")
    /// * `session` - Session store shared with the rest of the application
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Build a request with JSON content type and the current auth header
    fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        for (name, value) in self.session.auth_header()? {
            req = req.header(name, value);
        }

        Ok(req)
    }

    /// Send a request without a body.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> ClientResult<Option<T>> {
        let req = self.request(method, path)?;
        self.execute(req).await
    }

    /// Send a request with a JSON-encoded body.
    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        let payload = serde_json::to_vec(body)?;
        let req = self.request(method, path)?.body(payload);
        self.execute(req).await
    }

    /// Execute request and normalize the response.
    ///
    /// 2xx: the body parsed as JSON, or `None` when it is empty or not JSON.
    /// Anything else: an API error built from the error envelope, or from the
    /// status line when the envelope is missing.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<Option<T>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("{} response with {} byte body", status, body.len());

        if status.is_success() {
            return Ok(parse_success_body(&body));
        }

        Err(error_from_response(status, &body))
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Log in and store the resulting session.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        let response: Option<AuthResponse> = self
            .send_json(Method::POST, AUTH_LOGIN_PATH, credentials)
            .await?;

        let auth = response
            .filter(|auth| !auth.token.is_empty())
            .ok_or_else(|| ClientError::unexpected_response("Login response carried no token"))?;

        self.session
            .set_session(&auth.token, &auth.username, &auth.email, auth.expires_at)?;

        info!("Logged in as {}", auth.username);
        Ok(auth)
    }

    /// Register a new account. Does not log in.
    pub async fn register(&self, registration: &Registration) -> ClientResult<Option<AuthResponse>> {
        let response = self
            .send_json(Method::POST, AUTH_REGISTER_PATH, registration)
            .await?;

        info!("Registered account {}", registration.username);
        Ok(response)
    }

    /// Drop the local session. No request is sent.
    pub fn logout(&self) -> ClientResult<()> {
        self.session.clear_session()?;
        Ok(())
    }

    /// Fail fast when there is no live session.
    #[track_caller]
    pub fn require_session(&self) -> ClientResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::not_authenticated())
        }
    }
}

pub(crate) fn parse_success_body<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Treating unparseable success body as empty: {e}");
            None
        }
    }
}

pub(crate) fn error_from_response(status: StatusCode, body: &[u8]) -> ClientError {
    let http_status = status.as_u16();

    match serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.into_parts(http_status))
    {
        Some((message, status_code)) => ClientError::api(status_code, message),
        None => ClientError::api(http_status, status_line_message(status)),
    }
}

fn status_line_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Error: {reason}"),
        None => format!("Error: {}", status.as_u16()),
    }
}
