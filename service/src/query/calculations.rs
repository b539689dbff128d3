//! [`Query`] collection related to [`Calculation`]s.
//!
//! [`Calculation`]: crate::domain::Calculation

use common::operations::By;

use crate::{domain::offer, read::calculation::WithFeatures};
#[cfg(doc)]
use crate::{domain::Calculation, Query};

use super::DatabaseQuery;

/// Queries all [`Calculation`]s of an [`Offer`] with their features, newest
/// first.
///
/// [`Offer`]: crate::domain::Offer
pub type ByOffer = DatabaseQuery<By<Vec<WithFeatures>, offer::Id>>;
