pub mod shared {
    pub mod core {
        pub mod dates;
        pub mod event_id;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod fixtures;
            pub mod responses;
            pub mod slots;
        }
        pub mod use_cases {
            pub mod record_events {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
