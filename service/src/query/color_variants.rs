//! [`Query`] collection related to [`ColorVariant`]s.

use common::operations::By;

use crate::domain::{offer, ColorVariant};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all [`ColorVariant`]s of an [`Offer`].
///
/// The default one comes first, then the rest in creation order.
///
/// [`Offer`]: crate::domain::Offer
pub type ByOffer = DatabaseQuery<By<Vec<ColorVariant>, offer::Id>>;
