mod producto;
mod user;

pub use producto::*;
pub use user::*;
