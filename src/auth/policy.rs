use http::Method;

use crate::models::UserRole;

pub const PRODUCTOS_PATH: &str = "/api/productos";

/// Which principals may reach a given method and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    AnyOf(&'static [UserRole]),
}

impl Access {
    pub fn allows(&self, role: UserRole) -> bool {
        match self {
            Access::Authenticated => true,
            Access::AnyOf(roles) => roles.contains(&role),
        }
    }
}

const READERS: &[UserRole] = &[UserRole::User, UserRole::Admin];
const WRITERS: &[UserRole] = &[UserRole::Admin];

/// Matches `/api/productos` and anything below it, like an Ant `/**` pattern.
fn is_productos_path(path: &str) -> bool {
    match path.strip_prefix(PRODUCTOS_PATH) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn required_access(method: &Method, path: &str) -> Access {
    if !is_productos_path(path) {
        return Access::Authenticated;
    }

    match *method {
        Method::GET => Access::AnyOf(READERS),
        Method::POST | Method::PUT | Method::DELETE => Access::AnyOf(WRITERS),
        _ => Access::Authenticated,
    }
}
