use crate::modules::users::core::user::User;

pub const USER_ADDED_TOPIC: &str = "userAdded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// A record was appended to the store. `user` is `None` only when a
    /// publisher sends an empty payload; subscribers then see the placeholder.
    UserAdded { user: Option<User> },
}

impl UserEvent {
    pub fn user_added(user: User) -> Self {
        Self::UserAdded { user: Some(user) }
    }

    pub fn topic(&self) -> &'static str {
        match self {
            Self::UserAdded { .. } => USER_ADDED_TOPIC,
        }
    }

    pub fn into_user(self) -> User {
        match self {
            Self::UserAdded { user } => user.unwrap_or_default(),
        }
    }
}
