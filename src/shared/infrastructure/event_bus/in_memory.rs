use crate::shared::infrastructure::event_bus::{EventBus, EventStream};
use futures_util::StreamExt;
use std::collections::HashMap;
use tokio::sync::{RwLock, broadcast};
use tokio_stream::wrappers::{BroadcastStream, errors::BroadcastStreamRecvError};

pub const DEFAULT_CAPACITY: usize = 100;

/// One broadcast channel per topic, created on first subscription.
pub struct InMemoryEventBus<Message> {
    topics: RwLock<HashMap<String, broadcast::Sender<Message>>>,
    capacity: usize,
}

impl<Message> Default for InMemoryEventBus<Message>
where
    Message: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> InMemoryEventBus<Message>
where
    Message: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` bounds how far a slow subscriber may fall behind before it
    /// starts skipping messages. Clamped to at least one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub async fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .read()
            .await
            .get(topic)
            .map_or(0, |sender| sender.receiver_count())
    }
}

#[async_trait::async_trait]
impl<Message> EventBus<Message> for InMemoryEventBus<Message>
where
    Message: Clone + Send + Sync + 'static,
{
    async fn publish(&self, topic: &str, message: Message) -> usize {
        let topics = self.topics.read().await;
        match topics.get(topic) {
            Some(sender) => sender.send(message).unwrap_or(0),
            None => 0,
        }
    }

    async fn subscribe(&self, topic: &str) -> EventStream<Message> {
        let receiver = {
            let mut topics = self.topics.write().await;
            topics
                .entry(topic.to_string())
                .or_insert_with(|| broadcast::channel(self.capacity).0)
                .subscribe()
        };
        let topic = topic.to_string();
        BroadcastStream::new(receiver)
            .filter_map(move |item| {
                let message = match item {
                    Ok(message) => Some(message),
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        tracing::warn!(topic = %topic, skipped, "subscriber lagged behind");
                        None
                    }
                };
                async move { message }
            })
            .boxed()
    }
}
