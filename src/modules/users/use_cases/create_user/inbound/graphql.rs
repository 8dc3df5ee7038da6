use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::users::adapters::inbound::graphql::GqlUser;
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateUserMutation;

#[Object]
impl CreateUserMutation {
    async fn create_user(
        &self,
        context: &Context<'_>,
        name: String,
        age: i32,
    ) -> GqlResult<Option<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        let user = state
            .create_user_handler
            .handle(CreateUser { name, age })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(Some(user.into()))
    }
}
