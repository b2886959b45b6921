pub mod store;

pub use store::{Credential, CredentialStore};
