//! Authentication module
//!
//! Provides JWT session tokens, the bearer-token guard and password
//! verification for bcrypt and argon2 hashes.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{authenticate, require_auth, Identity};
pub use password::PasswordService;
