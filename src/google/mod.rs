pub mod gcal;
pub mod oauth;
