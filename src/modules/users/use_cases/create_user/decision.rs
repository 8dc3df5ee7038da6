use crate::modules::users::core::user::User;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("name is required")]
    NameRequired,

    // Zero is rejected along with a missing age.
    #[error("age is required")]
    AgeRequired,
}

pub enum Decision {
    Accepted { user: User },
    Rejected { reason: DecideError },
}
