//! [`LeasingVariant`] read model definition.
//!
//! [`LeasingVariant`]: crate::domain::LeasingVariant

#[cfg(doc)]
use crate::domain::{LeasingVariant, Offer};

/// Projection clearing the `is_default` flag of every [`LeasingVariant`] of
/// an [`Offer`].
///
/// Updating by this projection is how a new default is set: clear all, then
/// set one.
#[derive(Clone, Copy, Debug)]
pub struct NoDefault;

/// Projection clearing the `is_best_offer` flag of every [`LeasingVariant`]
/// of an [`Offer`].
#[derive(Clone, Copy, Debug)]
pub struct NoBestOffer;
