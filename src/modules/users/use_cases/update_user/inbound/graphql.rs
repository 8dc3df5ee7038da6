use async_graphql::{Context, ID, Object};

use crate::modules::users::adapters::inbound::graphql::GqlUser;
use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::use_cases::update_user::command::UpdateUser;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateUserMutation;

#[Object]
impl UpdateUserMutation {
    async fn update_user(
        &self,
        context: &Context<'_>,
        id: ID,
        name: Option<String>,
        age: Option<i32>,
    ) -> Option<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateUser {
            id: id.0,
            name,
            age,
        };
        state.users.update(command).await.map(Into::into)
    }
}
