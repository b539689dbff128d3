//! Access control contract of the [`Service`].
//!
//! [`Service`]: crate::Service

use derive_more::{Display, Error as StdError};

use crate::domain::user;

/// Access decision maker of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Access;

/// Operation checking whether the [`Actor`] is granted the [`Permission`].
///
/// The implementor answers with `bool`: `true` grants the gated mutation,
/// `false` rejects it.
#[derive(Clone, Debug)]
pub struct Granted {
    /// [`Actor`] performing the gated mutation.
    pub actor: Actor,

    /// [`Permission`] the mutation requires.
    pub permission: Permission,
}

/// Authenticated originator of a [`Service`] mutation.
///
/// [`Service`]: crate::Service
#[derive(Clone, Debug)]
pub struct Actor {
    /// ID of the [`User`] behind this [`Actor`].
    ///
    /// [`User`]: crate::domain::user
    pub id: user::Id,

    /// [`Role`]s assigned to this [`Actor`].
    ///
    /// [`Role`]: user::Role
    pub roles: Vec<user::Role>,
}

impl Actor {
    /// Returns whether this [`Actor`] has the [`Admin`] [`Role`].
    ///
    /// [`Admin`]: user::Role::Admin
    /// [`Role`]: user::Role
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&user::Role::Admin)
    }
}

/// Permission gating a group of [`Service`] mutations.
///
/// [`Service`]: crate::Service
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Permission {
    /// Creating [`Offer`]s of any kind.
    ///
    /// [`Offer`]: crate::domain::Offer
    CreateOffer,

    /// Updating existing [`Offer`]s, including their status.
    ///
    /// [`Offer`]: crate::domain::Offer
    UpdateOffer,

    /// Deleting [`Offer`]s.
    ///
    /// [`Offer`]: crate::domain::Offer
    DeleteOffer,

    /// Managing [`LeasingVariant`]s of an [`Offer`].
    ///
    /// [`LeasingVariant`]: crate::domain::LeasingVariant
    /// [`Offer`]: crate::domain::Offer
    ManageLeasingVariants,

    /// Managing [`ColorVariant`]s of an [`Offer`].
    ///
    /// [`ColorVariant`]: crate::domain::ColorVariant
    /// [`Offer`]: crate::domain::Offer
    ManageColorVariants,

    /// Managing [`OptionalEquipment`] of an [`Offer`].
    ///
    /// [`OptionalEquipment`]: crate::domain::OptionalEquipment
    /// [`Offer`]: crate::domain::Offer
    ManageOptionalEquipment,

    /// Managing [`Calculation`]s of an [`Offer`].
    ///
    /// [`Calculation`]: crate::domain::Calculation
    /// [`Offer`]: crate::domain::Offer
    ManageCalculations,
}

/// Error of an [`Access`] decision.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Permission lookup failed.
    #[display("permission lookup failed: {_0}")]
    Lookup(#[error(not(source))] String),
}

#[cfg(test)]
mod spec {
    use std::error::Error as _;

    use super::Error;

    #[test]
    fn lookup_error_displays_reason() {
        let err = Error::Lookup("backend unavailable".into());

        assert_eq!(
            err.to_string(),
            "permission lookup failed: backend unavailable",
        );
        assert!(err.source().is_none());
    }
}
