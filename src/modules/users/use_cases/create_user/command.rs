#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub name: String,
    pub age: i32,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
