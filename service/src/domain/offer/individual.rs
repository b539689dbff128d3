//! [`Individual`] [`Offer`] definition.

use common::{define_kind, DateTimeOf};

use crate::domain::{
    catalog::{brand, customer, engine, file, generation, model},
    user,
};

use super::{
    CreationDateTime, Description, Id, ModificationDateTime, Note, Offer,
    PublicId, Slug, TotalPrice,
};

/// An individual [`Offer`] quote prepared for a particular customer.
///
/// Never publicly visible.
#[derive(Clone, Debug)]
pub struct Individual {
    /// ID of this [`Offer`].
    pub id: Id,

    /// URL [`Slug`] of this [`Offer`].
    pub slug: Option<Slug>,

    /// ID of this [`Offer`] in the legacy system.
    pub public_id: Option<PublicId>,

    /// ID of the model generation this [`Offer`] is about.
    pub generation_id: generation::Id,

    /// ID of the vehicle brand, denormalized for filtering.
    pub brand_id: Option<brand::Id>,

    /// ID of the vehicle model, denormalized for filtering.
    pub model_id: Option<model::Id>,

    /// ID of the engine this [`Offer`] is configured with.
    pub engine_id: Option<engine::Id>,

    /// ID of the main image file of this [`Offer`].
    pub file_id: Option<file::Id>,

    /// [`TotalPrice`] of the offered vehicle.
    pub total_price: TotalPrice,

    /// [`Description`] of this [`Offer`].
    pub description: Option<Description>,

    /// Internal [`Note`] about this [`Offer`].
    pub note: Option<Note>,

    /// Indicator whether this [`Offer`] is publicly visible.
    ///
    /// Always `false` for this kind.
    pub is_public: bool,

    /// Indicator whether this [`Offer`] is active.
    pub is_active: bool,

    /// Indicator whether this [`Offer`] is promoted.
    pub is_promoted: bool,

    /// Indicator whether this [`Offer`] is featured on the landing page.
    pub is_featured: bool,

    /// Indicator whether this [`Offer`] is discounted.
    pub is_discounted: bool,

    /// ID of the customer this quote is prepared for.
    pub customer_id: customer::Id,

    /// ID of the back-office user working on this quote.
    pub assignee_id: Option<user::Id>,

    /// Processing [`Status`] of this quote.
    pub status: Status,

    /// Internal notes on the processing of this quote.
    pub internal_notes: Option<Note>,

    /// [`DateTime`] the customer should be responded by.
    ///
    /// [`DateTime`]: common::DateTime
    pub response_deadline: Option<ResponseDeadline>,

    /// [`DateTime`] when this [`Offer`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Offer`] was last updated.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: ModificationDateTime,
}

define_kind! {
    #[doc = "Processing status of an [`Individual`] [`Offer`].\n\n\
             Any [`Status`] may replace any other one."]
    enum Status {
        #[doc = "Quote was requested, nobody is working on it yet."]
        New = 1,

        #[doc = "Quote is being worked on."]
        InProgress = 2,

        #[doc = "Quote awaits a response from the customer."]
        WaitingForCustomer = 3,

        #[doc = "Quote was completed."]
        Completed = 4,

        #[doc = "Quote was cancelled."]
        Cancelled = 5,
    }
}

/// Marker of a [`DateTime`] the customer should be responded by.
///
/// [`DateTime`]: common::DateTime
#[derive(Clone, Copy, Debug)]
pub struct Response;

/// [`DateTime`] the customer of an [`Individual`] [`Offer`] should be
/// responded by.
///
/// [`DateTime`]: common::DateTime
pub type ResponseDeadline = DateTimeOf<(Offer, Response)>;
