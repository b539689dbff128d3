//! [`Query`] collection related to [`LeasingVariant`]s.

use common::operations::By;

use crate::domain::{offer, LeasingVariant};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all [`LeasingVariant`]s of an [`Offer`].
///
/// The default one comes first, then the best offer, then the rest ordered by
/// ascending price with VAT.
///
/// [`Offer`]: crate::domain::Offer
pub type ByOffer = DatabaseQuery<By<Vec<LeasingVariant>, offer::Id>>;
