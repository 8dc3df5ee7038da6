use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::modules::users::use_cases::create_user::decision::DecideError;
use crate::modules::users::use_cases::update_user::command::UpdateUser;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("Name and age are required!")]
    Validation(#[source] DecideError),
}

/// Owner of the user collection. Lookups miss with `None`; `delete` misses
/// with the placeholder record.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Option<User>;
    async fn list_all(&self) -> Vec<User>;
    async fn create(&self, command: CreateUser) -> Result<User, UserStoreError>;
    async fn update(&self, command: UpdateUser) -> Option<User>;
    async fn delete(&self, id: &str) -> User;
}
