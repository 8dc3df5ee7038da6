use serde::{Deserialize, Serialize};

/// A user record as held by the store.
///
/// `User::default()` is the placeholder record: empty id and name, age zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i32,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self == &Self::default()
    }
}

/// Records present on every boot.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("1", "Anh Quân", 21),
        User::new("2", "Anh Quân 2", 22),
    ]
}
