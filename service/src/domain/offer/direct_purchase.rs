//! [`DirectPurchase`] [`Offer`] definition.

use std::str::FromStr;

use common::Money;
use derive_more::{Display, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use crate::domain::catalog::{brand, engine, file, generation, model};

use super::{
    CreationDateTime, Description, Id, ModificationDateTime, Note, PublicId,
    Slug, TotalPrice,
};
#[cfg(doc)]
use crate::domain::Offer;

/// An [`Offer`] of a vehicle for a direct purchase.
///
/// Always publicly visible.
#[derive(Clone, Debug)]
pub struct DirectPurchase {
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

    /// Discount applied to the [`TotalPrice`].
    pub discount: Option<Money>,

    /// Warranty length offered with the purchase.
    pub warranty_years: Option<WarrantyYears>,

    /// [`DateTime`] when this [`Offer`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Offer`] was last updated.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: ModificationDateTime,
}

/// Warranty length of a [`DirectPurchase`] [`Offer`], in years.
#[derive(Clone, Copy, Debug, Display, Eq, Into, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct WarrantyYears(i16);

impl WarrantyYears {
    /// Creates new [`WarrantyYears`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `years` are in bounds.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(years: i16) -> Self {
        Self(years)
    }

    /// Creates new [`WarrantyYears`] if the given `years` are in bounds.
    #[must_use]
    pub fn new(years: i16) -> Option<Self> {
        Self::check(years).then_some(Self(years))
    }

    /// Checks whether the given `years` are valid [`WarrantyYears`].
    fn check(years: i16) -> bool {
        (1..=10).contains(&years)
    }
}

impl FromStr for WarrantyYears {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i16>()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `WarrantyYears`")
    }
}

#[cfg(test)]
mod spec {
    use super::WarrantyYears;

    #[test]
    fn warranty_years_bounds() {
        assert!(WarrantyYears::new(1).is_some());
        assert!(WarrantyYears::new(10).is_some());
        assert!(WarrantyYears::new(0).is_none());
        assert!(WarrantyYears::new(11).is_none());
    }
}
