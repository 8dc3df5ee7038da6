use crate::modules::users::adapters::outbound::user_store::{UserStore, UserStoreError};
use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::shared::infrastructure::event_bus::EventBus;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] UserStoreError),
}

pub struct CreateUserHandler<TStore, TEventBus>
where
    TStore: UserStore + 'static,
    TEventBus: EventBus<UserEvent> + 'static,
{
    store: Arc<TStore>,
    event_bus: Arc<TEventBus>,
}

impl<TStore, TEventBus> CreateUserHandler<TStore, TEventBus>
where
    TStore: UserStore + 'static,
    TEventBus: EventBus<UserEvent> + 'static,
{
    pub fn new(store: Arc<TStore>, event_bus: Arc<TEventBus>) -> Self {
        Self { store, event_bus }
    }

    /// Appends the user, then announces it on the `userAdded` topic.
    /// Nothing is published when the store rejects the command.
    pub async fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        let user = self.store.create(command).await?;
        let event = UserEvent::user_added(user.clone());
        let delivered = self.event_bus.publish(event.topic(), event).await;
        tracing::debug!(user_id = %user.id, delivered, "published userAdded");
        Ok(user)
    }
}
