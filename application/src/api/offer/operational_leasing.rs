//! [`OperationalLeasing`] `Offer` definitions.

use common::{DateTime, Money};
use derive_more::From;
use juniper::graphql_object;
use service::domain;

use crate::{
    api::{catalog, offer::OfferValue},
    Context,
};

use super::{Description, Id, Note, PublicId, Slug};

/// `Offer` of a vehicle on operational leasing.
#[derive(Clone, Debug, From)]
pub struct OperationalLeasing(domain::offer::OperationalLeasing);

/// `Offer` of a vehicle on operational leasing.
///
/// Always publicly visible.
#[graphql_object(
    name = "OperationalLeasingOffer",
    context = Context,
    impl = OfferValue,
)]
impl OperationalLeasing {
    /// Unique identifier of this `Offer`.
    fn id(&self) -> Id {
        self.0.id.into()
    }

    /// URL slug of this `Offer`.
    fn slug(&self) -> Option<Slug> {
        self.0.slug.clone().map(Into::into)
    }

    /// Identifier of this `Offer` in the legacy system.
    fn public_id(&self) -> Option<PublicId> {
        self.0.public_id.clone().map(Into::into)
    }

    /// Model generation this `Offer` is about.
    fn generation_id(&self) -> catalog::GenerationId {
        self.0.generation_id.into()
    }

    /// Vehicle brand of this `Offer`.
    fn brand_id(&self) -> Option<catalog::BrandId> {
        self.0.brand_id.map(Into::into)
    }

    /// Vehicle model of this `Offer`.
    fn model_id(&self) -> Option<catalog::ModelId> {
        self.0.model_id.map(Into::into)
    }

    /// Engine this `Offer` is configured with.
    fn engine_id(&self) -> Option<catalog::EngineId> {
        self.0.engine_id.map(Into::into)
    }

    /// Main image file of this `Offer`.
    fn file_id(&self) -> Option<catalog::FileId> {
        self.0.file_id.map(Into::into)
    }

    /// Total price of the offered vehicle.
    fn total_price(&self) -> Money {
        self.0.total_price.money()
    }

    /// Description of this `Offer`.
    fn description(&self) -> Option<Description> {
        self.0.description.clone().map(Into::into)
    }

    /// Internal note about this `Offer`.
    fn note(&self) -> Option<Note> {
        self.0.note.clone().map(Into::into)
    }

    /// Indicator whether this `Offer` is publicly visible.
    fn is_public(&self) -> bool {
        self.0.is_public
    }

    /// Indicator whether this `Offer` is active.
    fn is_active(&self) -> bool {
        self.0.is_active
    }

    /// Indicator whether this `Offer` is promoted.
    fn is_promoted(&self) -> bool {
        self.0.is_promoted
    }

    /// Indicator whether this `Offer` is featured on the landing page.
    fn is_featured(&self) -> bool {
        self.0.is_featured
    }

    /// Indicator whether this `Offer` is discounted.
    fn is_discounted(&self) -> bool {
        self.0.is_discounted
    }

    /// Indicative leasing duration, in months.
    fn duration_months(&self) -> Option<i32> {
        self.0.duration_months.map(|d| i32::from(i16::from(d)))
    }

    /// Indicative monthly payment.
    fn monthly_payment(&self) -> Option<Money> {
        self.0.monthly_payment
    }

    /// Indicative annual mileage limit, in kilometers.
    fn annual_mileage_limit(&self) -> Option<i32> {
        self.0.annual_mileage_limit.map(Into::into)
    }

    /// `DateTime` when this `Offer` was created.
    fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }

    /// `DateTime` when this `Offer` was last updated.
    fn updated_at(&self) -> DateTime {
        self.0.updated_at.coerce()
    }
}
