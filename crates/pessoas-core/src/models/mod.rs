pub mod address;
pub mod api_error_body;
pub mod auth;
pub mod birth_date;
pub mod person;
pub mod person_v2;
pub mod schema_version;
pub mod timestamp;
pub mod unified_person;
