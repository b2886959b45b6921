pub mod public;
pub mod routes;
mod server;
pub use server::{app, serve};
pub mod state;
pub use state::AppState;
