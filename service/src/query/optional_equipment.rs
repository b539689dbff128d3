//! [`Query`] collection related to [`OptionalEquipment`].

use common::operations::By;

use crate::{
    domain::{offer, OptionalEquipment},
    read::optional_equipment::Available,
};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all [`OptionalEquipment`] of an [`Offer`].
///
/// [`Offer`]: crate::domain::Offer
pub type ByOffer = DatabaseQuery<By<Vec<OptionalEquipment>, offer::Id>>;

/// Queries the currently orderable [`OptionalEquipment`] of an [`Offer`].
///
/// [`Offer`]: crate::domain::Offer
pub type AvailableByOffer =
    DatabaseQuery<By<Vec<Available<OptionalEquipment>>, offer::Id>>;
