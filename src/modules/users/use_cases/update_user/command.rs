/// Replacement values for an existing user. A field is only overwritten when
/// it is present and truthy: a non-empty name, a non-zero age.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUser {
    pub id: String,
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl UpdateUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn replacement_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn replacement_age(&self) -> Option<i32> {
        self.age.filter(|age| *age != 0)
    }
}
