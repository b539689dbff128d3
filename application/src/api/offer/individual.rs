//! [`Individual`] `Offer` definitions.

use common::{DateTime, Money};
use derive_more::From;
use juniper::{graphql_object, GraphQLEnum};
use service::domain::{self, offer::individual};

use crate::{
    api::{catalog, offer::OfferValue, user},
    Context,
};

use super::{Description, Id, Note, PublicId, Slug};

/// Individual `Offer` quote prepared for a particular customer.
#[derive(Clone, Debug, From)]
pub struct Individual(domain::offer::Individual);

/// Individual `Offer` quote prepared for a particular customer.
///
/// Never publicly visible.
#[graphql_object(
    name = "IndividualOffer",
    context = Context,
    impl = OfferValue,
)]
impl Individual {
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
    ///
    /// Always `false` for individual quotes.
    fn is_public(&self) -> bool {
        self.0.is_public
    }

    /// Indicator whether this `Offer` is active.
    fn is_active(&self) -> bool {
        self.0.is_active
    }

    /// Customer this quote is prepared for.
    fn customer_id(&self) -> catalog::CustomerId {
        self.0.customer_id.into()
    }

    /// Back-office `User` working on this quote.
    fn assignee_id(&self) -> Option<user::Id> {
        self.0.assignee_id.map(Into::into)
    }

    /// Processing status of this quote.
    fn status(&self) -> Status {
        self.0.status.into()
    }

    /// Internal notes on the processing of this quote.
    fn internal_notes(&self) -> Option<Note> {
        self.0.internal_notes.clone().map(Into::into)
    }

    /// `DateTime` the customer should be responded by.
    fn response_deadline(&self) -> Option<DateTime> {
        self.0.response_deadline.map(|d| d.coerce())
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

/// Processing status of an individual `Offer` quote.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "IndividualOfferStatus")]
pub enum Status {
    /// Quote was requested, nobody is working on it yet.
    New,

    /// Quote is being worked on.
    InProgress,

    /// Quote awaits a response from the customer.
    WaitingForCustomer,

    /// Quote was completed.
    Completed,

    /// Quote was cancelled.
    Cancelled,
}

impl From<individual::Status> for Status {
    fn from(status: individual::Status) -> Self {
        use individual::Status as S;

        match status {
            S::New => Self::New,
            S::InProgress => Self::InProgress,
            S::WaitingForCustomer => Self::WaitingForCustomer,
            S::Completed => Self::Completed,
            S::Cancelled => Self::Cancelled,
        }
    }
}

impl From<Status> for individual::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::New => Self::New,
            Status::InProgress => Self::InProgress,
            Status::WaitingForCustomer => Self::WaitingForCustomer,
            Status::Completed => Self::Completed,
            Status::Cancelled => Self::Cancelled,
        }
    }
}
