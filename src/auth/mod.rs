mod basic;
mod credentials;
mod policy;

pub use basic::{BasicCredentials, parse_basic_header};
pub use credentials::CredentialStore;
pub use policy::{Access, PRODUCTOS_PATH, required_access};

/// Realm advertised in the `WWW-Authenticate` challenge of every 401.
pub const AUTH_REALM: &str = "productos-api";
