use async_graphql::{ID, SimpleObject};

use crate::modules::users::core::user::User;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "User")]
pub struct GqlUser {
    pub id: ID,
    pub name: String,
    pub age: i32,
}

impl From<User> for GqlUser {
    fn from(u: User) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            age: u.age,
        }
    }
}
