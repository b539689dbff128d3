//! Infrastructure layer.

pub mod access;
pub mod database;

pub use self::access::RoleGrants;
pub use self::database::Database;
#[cfg(feature = "postgres")]
pub use self::database::{postgres, Postgres};
