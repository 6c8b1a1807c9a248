use crate::{ApiClient, ClientResult, PersonSchema};

use std::marker::PhantomData;

use log::debug;
use reqwest::Method;
use serde_json::Value;

/// CRUD over one person collection. One generic client serves both schema
/// versions; only the payload types and path differ.
pub struct PersonResource<S: PersonSchema> {
    api: ApiClient,
    _schema: PhantomData<fn() -> S>,
}

impl<S: PersonSchema> Clone for PersonResource<S> {
    fn clone(&self) -> Self {
        Self::new(self.api.clone())
    }
}

impl<S: PersonSchema> PersonResource<S> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _schema: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", S::PATH, id)
    }

    /// List every record. An empty success body yields an empty list.
    pub async fn list(&self) -> ClientResult<Vec<S::Record>> {
        let records: Option<Vec<S::Record>> = self.api.send(Method::GET, S::PATH).await?;
        let records = records.unwrap_or_default();
        debug!("Listed {} {} records", records.len(), S::VERSION);
        Ok(records)
    }

    /// `None` when the server answered 2xx without a usable body.
    pub async fn get(&self, id: i64) -> ClientResult<Option<S::Record>> {
        self.api.send(Method::GET, &Self::item_path(id)).await
    }

    pub async fn create(&self, payload: &S::Payload) -> ClientResult<Option<S::Record>> {
        self.api.send_json(Method::POST, S::PATH, payload).await
    }

    pub async fn update(&self, id: i64, payload: &S::Payload) -> ClientResult<Option<S::Record>> {
        self.api
            .send_json(Method::PUT, &Self::item_path(id), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let _: Option<Value> = self.api.send(Method::DELETE, &Self::item_path(id)).await?;
        Ok(())
    }
}
