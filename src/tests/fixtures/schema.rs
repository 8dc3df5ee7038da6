use crate::modules::users::core::events::USER_ADDED_TOPIC;
use crate::shell::graphql::{AppSchema, AppState, build_schema};
use std::time::Duration;

pub fn make_test_schema() -> (AppSchema, AppState) {
    let state = AppState::seeded(16);
    (build_schema(state.clone()), state)
}

/// Runs `query` and returns the whole response envelope as JSON.
pub async fn execute_json(schema: &AppSchema, query: &str) -> serde_json::Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).unwrap()
}

/// Subscriptions attach lazily, on the first poll of the response stream.
pub async fn wait_for_user_added_subscribers(state: &AppState, expected: usize) {
    for _ in 0..200 {
        if state.event_bus.subscriber_count(USER_ADDED_TOPIC).await == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("expected {expected} userAdded subscribers");
}
