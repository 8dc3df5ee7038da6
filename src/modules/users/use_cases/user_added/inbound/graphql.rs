use async_graphql::{Context, Subscription};
use futures_util::{Stream, StreamExt};

use crate::modules::users::adapters::inbound::graphql::GqlUser;
use crate::modules::users::core::events::{USER_ADDED_TOPIC, UserEvent};
use crate::shared::infrastructure::event_bus::EventBus;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UserAddedSubscription;

#[Subscription]
impl UserAddedSubscription {
    /// Users created after the subscription started.
    async fn user_added(&self, context: &Context<'_>) -> impl Stream<Item = Option<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        state
            .event_bus
            .subscribe(USER_ADDED_TOPIC)
            .await
            .map(|event: UserEvent| Some(GqlUser::from(event.into_user())))
    }
}
