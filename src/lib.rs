pub mod api;
pub mod auth;
pub mod calendar;
pub mod chat;
pub mod cli;
pub mod core;
pub mod google;
