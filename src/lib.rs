pub mod shared {
    pub mod core {
        pub mod group_locks;
        pub mod grouping;
    }
    pub mod infrastructure {
        pub mod entry_store;
        pub mod user_directory;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod entry;
            pub mod errors;
            pub mod input;
            pub mod work_date;
        }
        pub mod use_cases {
            pub mod reconcile_weekly_submission {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_horizon {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod get_rollup {
                pub mod filter;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod list_entries_by_range {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod amend_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod ticket_description {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
