//! Domain model for the person registry client.
//!
//! Wire types for both person schema versions, the unified view used for
//! display and edit staging, CPF/CEP masks and local form validation.

pub mod error;
pub mod mask;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use mask::{CEP_DIGITS, CPF_DIGITS, format_cep, format_cpf, strip_non_digits};
pub use models::address::Address;
pub use models::api_error_body::{ApiErrorBody, ApiErrorDetail};
pub use models::auth::{AuthResponse, Credentials, Registration};
pub use models::birth_date::BirthDate;
pub use models::person::{PersonPayload, PersonRecord};
pub use models::person_v2::{PersonV2Payload, PersonV2Record};
pub use models::schema_version::SchemaVersion;
pub use models::unified_person::UnifiedPerson;
pub use validation::{FieldError, ValidationErrors};

const MIN_PASSWORD_LENGTH: usize = 6;
