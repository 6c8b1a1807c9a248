use pessoas_core::{
    PersonPayload, PersonRecord, PersonV2Payload, PersonV2Record, SchemaVersion, UnifiedPerson,
};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Ties a schema version to its wire types and collection path.
pub trait PersonSchema: Send + Sync + 'static {
    type Payload: Serialize + Send + Sync;
    type Record: DeserializeOwned + Into<UnifiedPerson> + Send;

    const VERSION: SchemaVersion;
    const PATH: &'static str;
}

/// Person without address, `/api/v1/Person`.
pub struct V1;

/// Person with address, `/api/v2/PersonV2`.
pub struct V2;

impl PersonSchema for V1 {
    type Payload = PersonPayload;
    type Record = PersonRecord;

    const VERSION: SchemaVersion = SchemaVersion::V1;
    const PATH: &'static str = "/api/v1/Person";
}

impl PersonSchema for V2 {
    type Payload = PersonV2Payload;
    type Record = PersonV2Record;

    const VERSION: SchemaVersion = SchemaVersion::V2;
    const PATH: &'static str = "/api/v2/PersonV2";
}
