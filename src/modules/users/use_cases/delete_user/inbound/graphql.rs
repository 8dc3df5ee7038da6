use async_graphql::{Context, ID, Object};

use crate::modules::users::adapters::inbound::graphql::GqlUser;
use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteUserMutation;

#[Object]
impl DeleteUserMutation {
    /// Returns the removed user, or an empty user when `id` is unknown.
    async fn delete_user(&self, context: &Context<'_>, id: ID) -> Option<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        Some(state.users.delete(id.as_str()).await.into())
    }
}
