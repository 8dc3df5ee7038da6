use async_graphql::{Context, ID, Object};

use crate::modules::users::adapters::inbound::graphql::GqlUser;
use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetUserQuery;

#[Object]
impl GetUserQuery {
    async fn get_user(&self, context: &Context<'_>, id: ID) -> Option<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        state.users.find_by_id(id.as_str()).await.map(Into::into)
    }
}
