// Crate entry point. Declares the modules so tests and the binary can import them.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod errors;
            pub mod event;
            pub mod pagination;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
