pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod identity;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod table_store;
    }
}

pub mod modules {
    pub mod users {
        pub mod use_cases {
            pub mod get_current_user_id;
            pub mod get_display_name;
            pub mod set_display_name;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
    }
    pub mod rooms {
        pub mod core {
            pub mod invite_code;
            pub mod views;
        }
        pub mod use_cases {
            pub mod cancel_join_request;
            pub mod create_room;
            pub mod get_current_room;
            pub mod get_pending_join_request;
            pub mod get_room_join_requests;
            pub mod get_room_members;
            pub mod join_room;
            pub mod request_join_room;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
    }
    pub mod expenses {
        pub mod core {
            pub mod split;
            pub mod views;
        }
        pub mod use_cases {
            pub mod create_expense;
            pub mod get_expense_splits;
            pub mod get_expenses;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
    }
}

pub mod shell;
