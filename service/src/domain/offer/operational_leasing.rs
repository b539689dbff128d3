//! [`OperationalLeasing`] [`Offer`] definition.

use common::Money;

use crate::domain::{
    catalog::{brand, engine, file, generation, model},
    leasing_variant::{DurationMonths, MileageLimit},
};

use super::{
    CreationDateTime, Description, Id, ModificationDateTime, Note, PublicId,
    Slug, TotalPrice,
};
#[cfg(doc)]
use crate::domain::{LeasingVariant, Offer};

/// An [`Offer`] of a vehicle for operational leasing.
///
/// Always publicly visible. Carries indicative leasing terms of its own, and
/// the concrete terms as child [`LeasingVariant`]s.
#[derive(Clone, Debug)]
pub struct OperationalLeasing {
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
    /// Always `true` for this kind.
    pub is_public: bool,

    /// Indicator whether this [`Offer`] is active.
    pub is_active: bool,

    /// Indicator whether this [`Offer`] is promoted.
    pub is_promoted: bool,

    /// Indicator whether this [`Offer`] is featured on the landing page.
    pub is_featured: bool,

    /// Indicator whether this [`Offer`] is discounted.
    pub is_discounted: bool,

    /// Indicative leasing duration, in months.
    pub duration_months: Option<DurationMonths>,

    /// Indicative monthly payment.
    pub monthly_payment: Option<Money>,

    /// Indicative annual mileage limit, in kilometers.
    pub annual_mileage_limit: Option<MileageLimit>,

    /// [`DateTime`] when this [`Offer`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Offer`] was last updated.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: ModificationDateTime,
}
