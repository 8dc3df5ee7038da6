use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::create_user::{
    command::CreateUser,
    decision::{DecideError, Decision},
};

pub fn decide_create(users: &[User], command: CreateUser) -> Decision {
    if command.name.is_empty() {
        return Decision::Rejected {
            reason: DecideError::NameRequired,
        };
    }
    if command.age == 0 {
        return Decision::Rejected {
            reason: DecideError::AgeRequired,
        };
    }
    Decision::Accepted {
        user: User {
            id: next_id(users),
            name: command.name,
            age: command.age,
        },
    }
}

/// `count + 1`, stepping upward past any id still held by a current record.
fn next_id(users: &[User]) -> String {
    let mut candidate = users.len() + 1;
    while users.iter().any(|u| u.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
