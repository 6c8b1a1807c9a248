pub(crate) mod api_client;
pub(crate) mod error;
pub(crate) mod person_resource;
pub(crate) mod person_schema;

pub use api_client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use person_resource::PersonResource;
pub use person_schema::{PersonSchema, V1, V2};
