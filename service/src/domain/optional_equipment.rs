//! [`OptionalEquipment`] definitions.

use common::{define_kind, unit, DateTimeOf, Money};

use crate::domain::{catalog::equipment_item, offer};
#[cfg(doc)]
use crate::domain::offer::{Offer, OperationalLeasing};

/// Optional equipment item orderable with an [`OperationalLeasing`]
/// [`Offer`].
///
/// The `(offer_id, equipment_item_id)` pair is unique. Any number of items
/// may be selected by default at the same time.
#[derive(Clone, Debug)]
pub struct OptionalEquipment {
    /// ID of this [`OptionalEquipment`].
    pub id: Id,

    /// ID of the [`Offer`] this [`OptionalEquipment`] belongs to.
    pub offer_id: offer::Id,

    /// ID of the catalog equipment item being offered.
    pub equipment_item_id: equipment_item::Id,

    /// Additional price of this [`OptionalEquipment`].
    pub additional_price: Money,

    /// [`PricePeriod`] the `additional_price` is charged over.
    pub price_period: PricePeriod,

    /// Indicator whether this [`OptionalEquipment`] is pre-selected in the
    /// configurator.
    pub is_default_selected: bool,

    /// Indicator whether this [`OptionalEquipment`] is currently orderable.
    pub is_available: bool,

    /// [`DateTime`] when this [`OptionalEquipment`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

common::define_id! {
    #[doc = "ID of an [`OptionalEquipment`]."]
    Id
}

define_kind! {
    #[doc = "Period the additional price of an [`OptionalEquipment`] is \
             charged over."]
    enum PricePeriod {
        #[doc = "Price is charged once."]
        OneTime = 1,

        #[doc = "Price is added to the monthly payment."]
        Monthly = 2,
    }
}

/// [`DateTime`] when an [`OptionalEquipment`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(OptionalEquipment, unit::Creation)>;
