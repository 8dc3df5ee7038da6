use async_graphql::{MergedObject, MergedSubscription, Schema};

use crate::modules::users::use_cases::create_user::inbound::graphql::CreateUserMutation;
use crate::modules::users::use_cases::delete_user::inbound::graphql::DeleteUserMutation;
use crate::modules::users::use_cases::get_user::inbound::graphql::GetUserQuery;
use crate::modules::users::use_cases::list_users::inbound::graphql::ListUsersQuery;
use crate::modules::users::use_cases::update_user::inbound::graphql::UpdateUserMutation;
use crate::modules::users::use_cases::user_added::inbound::graphql::UserAddedSubscription;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(GetUserQuery, ListUsersQuery);

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(CreateUserMutation, UpdateUserMutation, DeleteUserMutation);

#[derive(MergedSubscription, Default)]
#[graphql(name = "Subscription")]
pub struct SubscriptionRoot(UserAddedSubscription);

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot::default(),
    )
    .data(state)
    .finish()
}
