//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod access;
pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

#[cfg(doc)]
use infra::Database;

pub use self::{access::Access, command::Command, query::Query};

/// Domain service.
///
/// Executes [`Command`]s and [`Query`]s against the [`Database`] `Db`,
/// consulting the access resolver `Acl` before every mutation.
#[derive(Clone, Copy, Debug)]
pub struct Service<Db, Acl> {
    /// [`Database`] of this [`Service`].
    database: Db,

    /// Access resolver of this [`Service`].
    acl: Acl,
}

impl<Db, Acl> Service<Db, Acl> {
    /// Creates a new [`Service`] with the provided collaborators.
    pub fn new(database: Db, acl: Acl) -> Self {
        Self { database, acl }
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns the access resolver of this [`Service`].
    #[must_use]
    pub fn acl(&self) -> &Acl {
        &self.acl
    }
}
