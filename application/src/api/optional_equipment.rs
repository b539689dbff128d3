//! [`OptionalEquipment`]-related definitions.

use common::{DateTime, Money};
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{
    api::{catalog, offer},
    Context,
};

/// Equipment item orderable with an `Offer` for an additional price.
#[derive(Clone, Debug, From)]
pub struct OptionalEquipment(domain::OptionalEquipment);

/// Equipment item orderable with an `Offer` for an additional price.
#[graphql_object(context = Context)]
impl OptionalEquipment {
    /// Unique identifier of this `OptionalEquipment`.
    fn id(&self) -> Id {
        self.0.id.into()
    }

    /// `Offer` this `OptionalEquipment` belongs to.
    fn offer_id(&self) -> offer::Id {
        self.0.offer_id.into()
    }

    /// Catalog item this `OptionalEquipment` offers.
    fn equipment_item_id(&self) -> catalog::EquipmentItemId {
        self.0.equipment_item_id.into()
    }

    /// Additional price of this `OptionalEquipment`.
    fn additional_price(&self) -> Money {
        self.0.additional_price
    }

    /// Period the additional price is charged over.
    fn price_period(&self) -> PricePeriod {
        self.0.price_period.into()
    }

    /// Indicator whether this `OptionalEquipment` is selected by default.
    fn is_default_selected(&self) -> bool {
        self.0.is_default_selected
    }

    /// Indicator whether this `OptionalEquipment` is currently orderable.
    fn is_available(&self) -> bool {
        self.0.is_available
    }

    /// `DateTime` when this `OptionalEquipment` was created.
    fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of an `OptionalEquipment`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::optional_equipment::Id)]
#[into(domain::optional_equipment::Id)]
#[graphql(name = "OptionalEquipmentId", transparent)]
pub struct Id(Uuid);

/// Period the additional price of an `OptionalEquipment` is charged over.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "PricePeriod")]
pub enum PricePeriod {
    /// Price is charged once.
    OneTime,

    /// Price is added to the monthly payment.
    Monthly,
}

impl From<domain::optional_equipment::PricePeriod> for PricePeriod {
    fn from(period: domain::optional_equipment::PricePeriod) -> Self {
        use domain::optional_equipment::PricePeriod as P;

        match period {
            P::OneTime => Self::OneTime,
            P::Monthly => Self::Monthly,
        }
    }
}

impl From<PricePeriod> for domain::optional_equipment::PricePeriod {
    fn from(period: PricePeriod) -> Self {
        match period {
            PricePeriod::OneTime => Self::OneTime,
            PricePeriod::Monthly => Self::Monthly,
        }
    }
}
