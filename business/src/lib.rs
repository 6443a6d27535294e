pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod delete;
        pub mod get;
        pub mod remove_item;
    }
    pub mod product {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update_qty;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod contents;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod delete;
            pub mod get;
            pub mod remove_item;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update_qty;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
