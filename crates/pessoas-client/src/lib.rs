//! pessoas-client library
//!
//! HTTP gateway for the person and auth endpoints, and the reconciler that
//! presents the two person schema versions as one collection.

pub(crate) mod client;
pub(crate) mod reconciler;

#[cfg(test)]
mod tests;

pub use client::{
    ApiClient, ClientError, ClientResult, PersonResource, PersonSchema, V1, V2,
    api_client::{AUTH_LOGIN_PATH, AUTH_REGISTER_PATH},
};
pub use reconciler::{
    dialog::{DialogState, PersonDialog, SaveRequest},
    merge::merge_collections,
    notification::{Notification, Severity},
    person_directory::{ActionOutcome, PersonDirectory},
    person_form::PersonForm,
    save_action::{DialogMode, SaveAction},
};
