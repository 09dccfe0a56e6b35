pub mod application {
    pub mod product {
        pub mod category_stats;
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod stats;
        pub mod validator;
        pub mod value_objects;
        pub mod use_cases {
            pub mod category_stats;
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
}
