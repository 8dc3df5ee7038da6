use async_trait::async_trait;
use futures_util::stream::BoxStream;

/// Messages published on a topic after the subscription was made. The stream
/// never ends on its own; dropping it detaches the subscriber.
pub type EventStream<Message> = BoxStream<'static, Message>;

#[async_trait]
pub trait EventBus<Message: Clone + Send + Sync + 'static>: Send + Sync {
    /// Returns how many subscribers received the message. Zero is not an
    /// error: without subscribers the message is dropped.
    async fn publish(&self, topic: &str, message: Message) -> usize;
    async fn subscribe(&self, topic: &str) -> EventStream<Message>;
}

pub mod in_memory;
