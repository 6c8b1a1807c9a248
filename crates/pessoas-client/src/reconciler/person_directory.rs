use crate::{
    ApiClient, ClientError, ClientResult, Notification, PersonDialog, PersonResource, SaveAction,
    SaveRequest, V1, V2, merge_collections,
};

use pessoas_core::{SchemaVersion, UnifiedPerson};

use std::sync::{Arc, RwLock};

use log::{debug, info, warn};

/// The single logical person collection over the v1 and v2 endpoints.
///
/// Holds the last merged snapshot. The snapshot is replaced as a whole after
/// every fetch or save cycle; readers keep whichever `Arc` they already hold.
pub struct PersonDirectory {
    v1: PersonResource<V1>,
    v2: PersonResource<V2>,
    snapshot: RwLock<Arc<Vec<UnifiedPerson>>>,
}

/// Result of a user action: the value it produced, if any, and the
/// notification to show.
#[derive(Debug, Clone)]
pub struct ActionOutcome<T> {
    pub succeeded: bool,
    pub value: Option<T>,
    pub notification: Notification,
}

impl<T> ActionOutcome<T> {
    fn done(value: Option<T>, notification: Notification) -> Self {
        Self {
            succeeded: true,
            value,
            notification,
        }
    }

    fn failed(notification: Notification) -> Self {
        Self {
            succeeded: false,
            value: None,
            notification,
        }
    }
}

impl PersonDirectory {
    pub fn new(api: ApiClient) -> Self {
        Self {
            v1: PersonResource::new(api.clone()),
            v2: PersonResource::new(api),
            snapshot: RwLock::new(Arc::new(Vec::new())),
        }
    }

    pub fn v1(&self) -> &PersonResource<V1> {
        &self.v1
    }

    pub fn v2(&self) -> &PersonResource<V2> {
        &self.v2
    }

    pub fn snapshot(&self) -> Arc<Vec<UnifiedPerson>> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(|e| e.into_inner()))
    }

    fn replace_snapshot(&self, people: Vec<UnifiedPerson>) -> Arc<Vec<UnifiedPerson>> {
        let people = Arc::new(people);
        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = Arc::clone(&people);
        people
    }

    /// Fetch both collections concurrently and merge them once both settle.
    pub async fn fetch_all(&self) -> ClientResult<Vec<UnifiedPerson>> {
        let (v1, v2) = tokio::join!(self.v1.list(), self.v2.list());
        let merged = merge_collections(v1?, v2?);
        debug!("Merged {} people", merged.len());
        Ok(merged)
    }

    /// Fetch, merge and replace the snapshot. On failure the previous
    /// snapshot stays.
    pub async fn refresh(&self) -> ClientResult<Arc<Vec<UnifiedPerson>>> {
        let merged = self.fetch_all().await?;
        Ok(self.replace_snapshot(merged))
    }

    /// Snapshot entries matching the search filter.
    pub fn search(&self, query: &str) -> Vec<UnifiedPerson> {
        self.snapshot()
            .iter()
            .filter(|person| person.matches(query))
            .cloned()
            .collect()
    }

    /// Snapshot entry by id and version.
    pub fn cached(&self, id: i64, version: SchemaVersion) -> Option<UnifiedPerson> {
        self.snapshot()
            .iter()
            .find(|person| person.id == id && person.version == version)
            .cloned()
    }

    /// Fetch one record from the collection of `version`.
    pub async fn get(&self, id: i64, version: SchemaVersion) -> ClientResult<UnifiedPerson> {
        let person = match version {
            SchemaVersion::V1 => self.v1.get(id).await?.map(UnifiedPerson::from),
            SchemaVersion::V2 => self.v2.get(id).await?.map(UnifiedPerson::from),
        };
        person.ok_or_else(|| ClientError::not_found(id, version))
    }

    /// Execute a save. Migrations never roll back: when the delete of the
    /// source record fails, the created record is kept and reported.
    pub async fn save(&self, request: &SaveRequest) -> ClientResult<Option<UnifiedPerson>> {
        let form = &request.form;
        info!("Saving person: {}", request.action);

        match request.action {
            SaveAction::CreateV1 => {
                let payload = form.to_payload().map_err(ClientError::validation)?;
                Ok(self.v1.create(&payload).await?.map(UnifiedPerson::from))
            }
            SaveAction::CreateV2 => {
                let payload = form.to_v2_payload().map_err(ClientError::validation)?;
                Ok(self.v2.create(&payload).await?.map(UnifiedPerson::from))
            }
            SaveAction::UpdateV1 { id } => {
                let payload = form.to_payload().map_err(ClientError::validation)?;
                Ok(self.v1.update(id, &payload).await?.map(UnifiedPerson::from))
            }
            SaveAction::UpdateV2 { id } => {
                let payload = form.to_v2_payload().map_err(ClientError::validation)?;
                Ok(self.v2.update(id, &payload).await?.map(UnifiedPerson::from))
            }
            SaveAction::MigrateUp { from_v1_id } => {
                let payload = form.to_v2_payload().map_err(ClientError::validation)?;
                let created = self.v2.create(&payload).await?.map(UnifiedPerson::from);
                self.finish_migration(created, SchemaVersion::V1, from_v1_id)
                    .await
            }
            SaveAction::MigrateDown { from_v2_id } => {
                let payload = form.to_payload().map_err(ClientError::validation)?;
                let created = self.v1.create(&payload).await?.map(UnifiedPerson::from);
                self.finish_migration(created, SchemaVersion::V2, from_v2_id)
                    .await
            }
        }
    }

    async fn finish_migration(
        &self,
        created: Option<UnifiedPerson>,
        source_version: SchemaVersion,
        source_id: i64,
    ) -> ClientResult<Option<UnifiedPerson>> {
        let created_version = match source_version {
            SchemaVersion::V1 => SchemaVersion::V2,
            SchemaVersion::V2 => SchemaVersion::V1,
        };

        if let Err(e) = self.delete(source_id, source_version).await {
            warn!(
                "Created {created_version} record but could not delete {source_version} \
                 record {source_id}"
            );
            return Err(ClientError::migration_incomplete(
                created_version,
                created.as_ref().map(|person| person.id),
                source_version,
                source_id,
                e,
            ));
        }

        Ok(created)
    }

    /// Delete from the collection of `version`.
    pub async fn delete(&self, id: i64, version: SchemaVersion) -> ClientResult<()> {
        match version {
            SchemaVersion::V1 => self.v1.delete(id).await,
            SchemaVersion::V2 => self.v2.delete(id).await,
        }
    }

    /// Save the dialog's form and reload the list.
    ///
    /// Validation failures keep the dialog open; every other outcome closes
    /// it. The result is always reported as a notification.
    pub async fn submit(&self, dialog: &mut PersonDialog) -> ActionOutcome<UnifiedPerson> {
        const CONTEXT: &str = "Could not save person";

        let request = match dialog.begin_save() {
            Ok(request) => request,
            Err(e) => return ActionOutcome::failed(Notification::from_error(CONTEXT, &e)),
        };

        let result = self.save(&request).await;
        dialog.finish();

        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                if matches!(e, ClientError::MigrationIncomplete { .. }) {
                    self.refresh_quietly().await;
                }
                return ActionOutcome::failed(Notification::from_error(CONTEXT, &e));
            }
        };

        let message = match request.action {
            SaveAction::CreateV1 | SaveAction::CreateV2 => "Person created",
            SaveAction::UpdateV1 { .. } | SaveAction::UpdateV2 { .. } => "Person updated",
            SaveAction::MigrateUp { .. } => "Person updated and moved to v2",
            SaveAction::MigrateDown { .. } => "Person updated and moved to v1",
        };

        ActionOutcome::done(saved, self.reload_after(message).await)
    }

    /// Delete a record and reload the list.
    pub async fn remove(&self, id: i64, version: SchemaVersion) -> ActionOutcome<()> {
        if let Err(e) = self.delete(id, version).await {
            return ActionOutcome::failed(Notification::from_error("Could not delete person", &e));
        }

        info!("Deleted {version} person {id}");
        ActionOutcome::done(None, self.reload_after("Person deleted").await)
    }

    async fn reload_after(&self, message: &str) -> Notification {
        match self.refresh().await {
            Ok(_) => Notification::success(message),
            Err(e) => {
                warn!("Reload after action failed: {e}");
                Notification::warning(format!(
                    "{message}, but the list could not be reloaded: {}",
                    e.user_message()
                ))
            }
        }
    }

    async fn refresh_quietly(&self) {
        if let Err(e) = self.refresh().await {
            warn!("Reload after action failed: {e}");
        }
    }
}
