//! # Generic Actor Server
//!
//! `ResourceActor<T>` owns every `T` in an in-memory store and serves requests one at a time.
//! Because the loop never interleaves two requests, a read-modify-write performed inside a hook
//! is exclusive with respect to every other request for the same resource type.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// 1. `ResourceActor::new` returns the actor and its cloneable client.
/// 2. `actor.run(context)` injects dependencies and is spawned on a Tokio task.
/// 3. The loop ends once every client clone has been dropped.
///
/// Ids are allocated from a `u32` counter starting at 1 and never reused, even when a create
/// is rejected.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and a client whose channel holds up to `buffer_size` pending requests.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until the channel closes.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(params, &context, entity_type).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.update(id, update, &context, entity_type).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(id, &context, entity_type).await);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.action(id, action, &context, entity_type).await);
                }
                ResourceRequest::Query { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, matched = items.len(), "Query");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &'static str,
    ) -> Result<T::Id, FrameworkError> {
        debug!(entity_type, ?params, "Create");
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params)
            .map_err(|e| rejected(entity_type, &id, "create", e))?;
        item.on_create(context)
            .await
            .map_err(|e| rejected(entity_type, &id, "on_create", e))?;

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
        entity_type: &'static str,
    ) -> Result<T, FrameworkError> {
        debug!(entity_type, %id, ?update, "Update");
        let mut draft = self.working_copy(&id, entity_type)?;
        draft
            .on_update(update, context)
            .await
            .map_err(|e| rejected(entity_type, &id, "update", e))?;

        self.store.insert(id.clone(), draft.clone());
        info!(entity_type, %id, "Updated");
        Ok(draft)
    }

    async fn delete(
        &mut self,
        id: T::Id,
        context: &T::Context,
        entity_type: &'static str,
    ) -> Result<(), FrameworkError> {
        debug!(entity_type, %id, "Delete");
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| not_found(entity_type, &id))?;
        item.on_delete(context)
            .await
            .map_err(|e| rejected(entity_type, &id, "on_delete", e))?;

        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
        entity_type: &'static str,
    ) -> Result<T::ActionResult, FrameworkError> {
        debug!(entity_type, %id, ?action, "Action");
        let mut draft = self.working_copy(&id, entity_type)?;
        let result = draft
            .handle_action(action, context)
            .await
            .map_err(|e| rejected(entity_type, &id, "action", e))?;

        self.store.insert(id.clone(), draft);
        info!(entity_type, %id, "Action ok");
        Ok(result)
    }

    fn working_copy(&self, id: &T::Id, entity_type: &'static str) -> Result<T, FrameworkError> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(entity_type, id))
    }
}

/// Short type name for log fields ("Cart" rather than "yummy_delivery::model::cart::Cart").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}

fn not_found<I: std::fmt::Display>(entity_type: &'static str, id: &I) -> FrameworkError {
    warn!(entity_type, %id, "Not found");
    FrameworkError::NotFound(id.to_string())
}

fn rejected<I, E>(entity_type: &'static str, id: &I, stage: &'static str, error: E) -> FrameworkError
where
    I: std::fmt::Display,
    E: std::error::Error + Send + Sync + 'static,
{
    warn!(entity_type, %id, stage, error = %error, "Rejected");
    FrameworkError::entity(error)
}
