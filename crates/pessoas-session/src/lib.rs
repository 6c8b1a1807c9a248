//! Client-side session persistence.
//!
//! A [`SessionStore`] is constructed once per process and shared by
//! reference with the API client and the front end. It keeps the bearer
//! token and user profile in a [`KeyValueStore`], the client's persistent
//! storage.

mod error;
mod file_store;
mod key_value_store;
mod memory_store;
mod session_store;
mod user_info;


pub use error::{Result as SessionResult, SessionError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use session_store::{AUTHORIZATION_HEADER, SessionStore};
pub use user_info::UserInfo;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key of the JSON user profile.
pub const USER_INFO_KEY: &str = "user_info";
