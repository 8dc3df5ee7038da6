use async_graphql::{Context, Object};

use crate::modules::users::adapters::inbound::graphql::GqlUser;
use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListUsersQuery;

#[Object]
impl ListUsersQuery {
    /// All users in insertion order.
    async fn get_all_users(&self, context: &Context<'_>) -> Option<Vec<Option<GqlUser>>> {
        let state = context.data_unchecked::<AppState>();
        let users = state.users.list_all().await;
        Some(users.into_iter().map(|u| Some(u.into())).collect())
    }
}
