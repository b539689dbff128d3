//! [`Offer`]-related definitions.

mod direct_purchase;
mod individual;
mod operational_leasing;

use common::Money;
use derive_more::{AsRef, Display, From, Into};
use juniper::{GraphQLEnum, GraphQLInterface, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{
    api::{catalog, scalar},
    Context,
};

pub use self::{
    direct_purchase::DirectPurchase,
    individual::{Individual, Status},
    operational_leasing::OperationalLeasing,
};

/// Commercial offer of a vehicle.
///
/// An `Offer` is either an operational leasing offer, a direct purchase
/// offer, or an individual quote. Its kind is fixed on creation.
#[derive(Clone, Debug, GraphQLInterface)]
#[graphql(
    context = Context,
    for = [DirectPurchase, Individual, OperationalLeasing],
)]
pub struct Offer {
    /// Unique identifier of the `Offer`.
    id: Id,

    /// URL slug of the `Offer`.
    slug: Option<Slug>,

    /// Identifier of the `Offer` in the legacy system.
    public_id: Option<PublicId>,

    /// Model generation the `Offer` is about.
    generation_id: catalog::GenerationId,

    /// Total price of the offered vehicle.
    total_price: Money,

    /// Description of the `Offer`.
    description: Option<Description>,

    /// Indicator whether the `Offer` is publicly visible.
    is_public: bool,

    /// Indicator whether the `Offer` is active.
    is_active: bool,

    /// `DateTime` when the `Offer` was created.
    created_at: common::DateTime,

    /// `DateTime` when the `Offer` was last updated.
    updated_at: common::DateTime,
}

impl From<domain::Offer> for OfferValue {
    fn from(offer: domain::Offer) -> Self {
        use domain::Offer as O;

        match offer {
            O::OperationalLeasing(o) => Self::OperationalLeasing(o.into()),
            O::DirectPurchase(o) => Self::DirectPurchase(o.into()),
            O::Individual(o) => Self::Individual(o.into()),
        }
    }
}

/// Unique identifier of an `Offer`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::offer::Id)]
#[into(domain::offer::Id)]
#[graphql(name = "OfferId", transparent)]
pub struct Id(Uuid);

/// URL slug of an `Offer`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "OfferSlug", with = scalar::Via::<domain::offer::Slug>)]
pub struct Slug(domain::offer::Slug);

/// Identifier of an `Offer` in the legacy system.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "OfferPublicId",
    with = scalar::Via::<domain::offer::PublicId>,
)]
pub struct PublicId(domain::offer::PublicId);

/// Description of an `Offer`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "OfferDescription",
    with = scalar::Via::<domain::offer::Description>,
)]
pub struct Description(domain::offer::Description);

/// Internal note attached to an `Offer`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "OfferNote", with = scalar::Via::<domain::offer::Note>)]
pub struct Note(domain::offer::Note);

/// Kind of an `Offer`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "OfferKind")]
pub enum Kind {
    /// Operational leasing `Offer`.
    OperationalLeasing,

    /// Direct purchase `Offer`.
    DirectPurchase,

    /// Individual quote.
    Individual,
}

impl From<Kind> for domain::offer::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::OperationalLeasing => Self::OperationalLeasing,
            Kind::DirectPurchase => Self::DirectPurchase,
            Kind::Individual => Self::Individual,
        }
    }
}

impl From<domain::offer::Kind> for Kind {
    fn from(kind: domain::offer::Kind) -> Self {
        use domain::offer::Kind as K;

        match kind {
            K::OperationalLeasing => Self::OperationalLeasing,
            K::DirectPurchase => Self::DirectPurchase,
            K::Individual => Self::Individual,
        }
    }
}
