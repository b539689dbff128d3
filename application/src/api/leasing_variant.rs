//! [`LeasingVariant`]-related definitions.

use common::{DateTime, Money, Percent};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLObject, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{
    api::{catalog, offer, scalar},
    Context,
};

/// Concrete leasing terms of an operational leasing `Offer`.
#[derive(Clone, Debug, From)]
pub struct LeasingVariant(domain::LeasingVariant);

/// Concrete leasing terms of an operational leasing `Offer`.
#[graphql_object(context = Context)]
impl LeasingVariant {
    /// Unique identifier of this `LeasingVariant`.
    fn id(&self) -> Id {
        self.0.id.into()
    }

    /// `Offer` this `LeasingVariant` belongs to.
    fn offer_id(&self) -> offer::Id {
        self.0.offer_id.into()
    }

    /// URL slug of this `LeasingVariant`, unique per `Offer`.
    fn slug(&self) -> Slug {
        self.0.slug.clone().into()
    }

    /// Leasing duration, in months.
    fn duration(&self) -> i32 {
        i32::from(i16::from(self.0.duration))
    }

    /// Annual mileage limit, in kilometers.
    fn annual_mileage_limit(&self) -> i32 {
        self.0.annual_mileage_limit.into()
    }

    /// VAT rate applied to the prices.
    fn vat_rate(&self) -> Percent {
        self.0.vat_rate
    }

    /// Monthly price with VAT included.
    fn price_with_vat(&self) -> Money {
        self.0.price_with_vat
    }

    /// Monthly price without VAT.
    fn price_without_vat(&self) -> Money {
        self.0.price_without_vat
    }

    /// Monthly price with VAT before a discount.
    fn original_price_with_vat(&self) -> Option<Money> {
        self.0.original_price_with_vat
    }

    /// Monthly price without VAT before a discount.
    fn original_price_without_vat(&self) -> Option<Money> {
        self.0.original_price_without_vat
    }

    /// One-time down payment.
    fn down_payment(&self) -> Option<Money> {
        self.0.down_payment
    }

    /// Refundable deposit.
    fn deposit(&self) -> Option<Money> {
        self.0.deposit
    }

    /// One-time setup fee.
    fn setup_fee(&self) -> Option<Money> {
        self.0.setup_fee
    }

    /// `DateTime` this `LeasingVariant` is valid from.
    fn valid_from(&self) -> Option<DateTime> {
        self.0.valid_from.map(|d| d.coerce())
    }

    /// `DateTime` this `LeasingVariant` is valid until.
    fn valid_until(&self) -> Option<DateTime> {
        self.0.valid_until.map(|d| d.coerce())
    }

    /// Services included in the monthly price.
    fn services(&self) -> IncludedServices {
        self.0.services.into()
    }

    /// Tolerated vehicle wear on return.
    fn wear_tolerance(&self) -> Option<Percent> {
        self.0.wear_tolerance
    }

    /// Mileage overrun not billed on return, in kilometers.
    fn free_mileage_buffer(&self) -> Option<i32> {
        self.0.free_mileage_buffer.map(Into::into)
    }

    /// Indicator whether this `LeasingVariant` is active.
    fn is_active(&self) -> bool {
        self.0.is_active
    }

    /// Indicator whether this `LeasingVariant` is the default one of its
    /// `Offer`.
    fn is_default(&self) -> bool {
        self.0.is_default
    }

    /// Indicator whether this `LeasingVariant` is the best offer of its
    /// `Offer`.
    fn is_best_offer(&self) -> bool {
        self.0.is_best_offer
    }

    /// Leasing company providing these terms.
    fn leasing_company_id(&self) -> Option<catalog::LeasingCompanyId> {
        self.0.leasing_company_id.map(Into::into)
    }

    /// `DateTime` when this `LeasingVariant` was created.
    fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `LeasingVariant`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::leasing_variant::Id)]
#[into(domain::leasing_variant::Id)]
#[graphql(name = "LeasingVariantId", transparent)]
pub struct Id(Uuid);

/// URL slug of a `LeasingVariant`, unique per `Offer`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "LeasingVariantSlug",
    with = scalar::Via::<domain::leasing_variant::Slug>,
)]
pub struct Slug(domain::leasing_variant::Slug);

/// Services included in the monthly price of a `LeasingVariant`.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "IncludedServices")]
pub struct IncludedServices {
    /// Winter tyres and their seasonal change.
    pub winter_tyres: bool,

    /// Regular servicing and maintenance.
    pub servicing: bool,

    /// Accident and liability insurance.
    pub insurance: bool,

    /// Road assistance.
    pub road_assistance: bool,

    /// Replacement vehicle during repairs.
    pub replacement_vehicle: bool,

    /// Highway toll sticker.
    pub highway_toll: bool,
}

impl From<domain::leasing_variant::IncludedServices> for IncludedServices {
    fn from(services: domain::leasing_variant::IncludedServices) -> Self {
        let domain::leasing_variant::IncludedServices {
            winter_tyres,
            servicing,
            insurance,
            road_assistance,
            replacement_vehicle,
            highway_toll,
        } = services;

        Self {
            winter_tyres,
            servicing,
            insurance,
            road_assistance,
            replacement_vehicle,
            highway_toll,
        }
    }
}

/// Services included in the monthly price of a `LeasingVariant`.
#[derive(Clone, Copy, Debug, Default, juniper::GraphQLInputObject)]
#[graphql(name = "IncludedServicesInput")]
pub struct IncludedServicesInput {
    /// Winter tyres and their seasonal change.
    #[graphql(default)]
    pub winter_tyres: bool,

    /// Regular servicing and maintenance.
    #[graphql(default)]
    pub servicing: bool,

    /// Accident and liability insurance.
    #[graphql(default)]
    pub insurance: bool,

    /// Road assistance.
    #[graphql(default)]
    pub road_assistance: bool,

    /// Replacement vehicle during repairs.
    #[graphql(default)]
    pub replacement_vehicle: bool,

    /// Highway toll sticker.
    #[graphql(default)]
    pub highway_toll: bool,
}

impl From<IncludedServicesInput> for domain::leasing_variant::IncludedServices {
    fn from(services: IncludedServicesInput) -> Self {
        let IncludedServicesInput {
            winter_tyres,
            servicing,
            insurance,
            road_assistance,
            replacement_vehicle,
            highway_toll,
        } = services;

        Self {
            winter_tyres,
            servicing,
            insurance,
            road_assistance,
            replacement_vehicle,
            highway_toll,
        }
    }
}
