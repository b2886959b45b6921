//! Public API types

// Re-export public types from each route

pub mod oauth {
    pub use crate::api::routes::oauth::public::*;
}

pub mod webhook {
    pub use crate::api::routes::webhook::public::*;
}
