pub mod shared {
    pub mod infrastructure {
        pub mod build_store;
    }
}

pub mod modules {
    pub mod builds {
        pub mod core {
            pub mod apply_patch;
            pub mod build;
        }
        pub mod use_cases {
            pub mod create_build {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod read_build {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replace_build {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod patch_build {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_build {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
            }
        }
    }
}

pub mod shell;
