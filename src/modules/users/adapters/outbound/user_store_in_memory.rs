// In memory user store.
//
// Purpose
// - Hold the authoritative, ordered list of users for the lifetime of the process.
//
// Responsibilities
// - Serve lookups by linear scan in insertion order.
// - Apply create, update and delete under a single write lock per call.

use crate::modules::users::adapters::outbound::user_store::{UserStore, UserStoreError};
use crate::modules::users::core::user::{User, seed_users};
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::modules::users::use_cases::create_user::decide::decide_create;
use crate::modules::users::use_cases::create_user::decision::Decision;
use crate::modules::users::use_cases::update_user::command::UpdateUser;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    async fn list_all(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn create(&self, command: CreateUser) -> Result<User, UserStoreError> {
        let mut guard = self.users.write().await;
        match decide_create(&guard, command) {
            Decision::Accepted { user } => {
                guard.push(user.clone());
                tracing::debug!(user_id = %user.id, "created user");
                Ok(user)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "rejected user creation");
                Err(UserStoreError::Validation(reason))
            }
        }
    }

    async fn update(&self, command: UpdateUser) -> Option<User> {
        let mut guard = self.users.write().await;
        let user = guard.iter_mut().find(|u| u.id == command.id)?;
        if let Some(name) = command.replacement_name() {
            user.name = name.to_string();
        }
        if let Some(age) = command.replacement_age() {
            user.age = age;
        }
        tracing::debug!(user_id = %user.id, "updated user");
        Some(user.clone())
    }

    async fn delete(&self, id: &str) -> User {
        let mut guard = self.users.write().await;
        match guard.iter().position(|u| u.id == id) {
            Some(index) => {
                let deleted = guard.remove(index);
                tracing::info!(?deleted, "deleted user");
                deleted
            }
            None => {
                tracing::info!(user_id = id, "user not found for deletion");
                User::default()
            }
        }
    }
}
