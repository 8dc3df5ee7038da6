pub mod shared {
    pub mod infrastructure {
        pub mod event_bus;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod events;
            pub mod user;
        }
        pub mod use_cases {
            pub mod get_user {
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod list_users {
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod create_user {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod update_user {
                pub mod command;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod delete_user {
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod user_added {
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod user_store;
                pub mod user_store_in_memory;
            }
        }
    }
}

pub mod shell;
