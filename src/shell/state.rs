use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::modules::users::core::events::UserEvent;
use crate::modules::users::use_cases::create_user::handler::CreateUserHandler;
use crate::shared::infrastructure::event_bus::in_memory::InMemoryEventBus;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub create_user_handler: Arc<CreateUserHandler<InMemoryUserStore, InMemoryEventBus<UserEvent>>>,
    pub event_bus: Arc<InMemoryEventBus<UserEvent>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryUserStore>, event_bus: Arc<InMemoryEventBus<UserEvent>>) -> Self {
        let create_user_handler = Arc::new(CreateUserHandler::new(store.clone(), event_bus.clone()));
        Self {
            users: store,
            create_user_handler,
            event_bus,
        }
    }

    /// State as it is on boot: the seed users and an idle event bus.
    pub fn seeded(event_bus_capacity: usize) -> Self {
        Self::new(
            Arc::new(InMemoryUserStore::seeded()),
            Arc::new(InMemoryEventBus::with_capacity(event_bus_capacity)),
        )
    }
}
