//! [`LeasingVariant`] definitions.

use std::str::FromStr;

use common::{unit, DateTimeOf, Money, Percent};
use derive_more::{AsRef, Display, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use crate::domain::{catalog::leasing_company, offer};
#[cfg(doc)]
use crate::domain::offer::{Offer, OperationalLeasing};

/// Concrete leasing terms of an [`OperationalLeasing`] [`Offer`].
///
/// An [`Offer`] owns zero or more [`LeasingVariant`]s, at most one of them
/// being the default one and at most one being the best offer.
#[derive(Clone, Debug)]
pub struct LeasingVariant {
    /// ID of this [`LeasingVariant`].
    pub id: Id,

    /// ID of the [`Offer`] this [`LeasingVariant`] belongs to.
    pub offer_id: offer::Id,

    /// URL [`Slug`] of this [`LeasingVariant`], unique per [`Offer`].
    pub slug: Slug,

    /// Leasing duration, in months.
    pub duration: DurationMonths,

    /// Annual mileage limit, in kilometers.
    pub annual_mileage_limit: MileageLimit,

    /// VAT rate applied to the prices.
    pub vat_rate: Percent,

    /// Monthly price with VAT included.
    pub price_with_vat: Money,

    /// Monthly price without VAT.
    pub price_without_vat: Money,

    /// Monthly price with VAT before a discount, if any.
    pub original_price_with_vat: Option<Money>,

    /// Monthly price without VAT before a discount, if any.
    pub original_price_without_vat: Option<Money>,

    /// One-time down payment.
    pub down_payment: Option<Money>,

    /// Refundable deposit.
    pub deposit: Option<Money>,

    /// One-time setup fee.
    pub setup_fee: Option<Money>,

    /// [`DateTime`] this [`LeasingVariant`] is valid from.
    ///
    /// [`DateTime`]: common::DateTime
    pub valid_from: Option<ValidityDateTime>,

    /// [`DateTime`] this [`LeasingVariant`] is valid until.
    ///
    /// [`DateTime`]: common::DateTime
    pub valid_until: Option<ValidityDateTime>,

    /// Services included in the monthly price.
    pub services: IncludedServices,

    /// Tolerated vehicle wear on return.
    pub wear_tolerance: Option<Percent>,

    /// Mileage overrun not billed on return, in kilometers.
    pub free_mileage_buffer: Option<MileageLimit>,

    /// Indicator whether this [`LeasingVariant`] is active.
    pub is_active: bool,

    /// Indicator whether this [`LeasingVariant`] is the default one of its
    /// [`Offer`].
    pub is_default: bool,

    /// Indicator whether this [`LeasingVariant`] is the best offer of its
    /// [`Offer`].
    pub is_best_offer: bool,

    /// ID of the leasing company providing these terms.
    pub leasing_company_id: Option<leasing_company::Id>,

    /// [`DateTime`] when this [`LeasingVariant`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

common::define_id! {
    #[doc = "ID of a [`LeasingVariant`]."]
    Id
}

/// URL slug of a [`LeasingVariant`], unique per [`Offer`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Slug(String);

impl Slug {
    /// Creates a new [`Slug`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `slug` is valid.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Creates a new [`Slug`] if the given `slug` is valid.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        Self::check(&slug).then_some(Self(slug))
    }

    /// Checks whether the given `slug` is a valid [`Slug`].
    fn check(slug: impl AsRef<str>) -> bool {
        let slug = slug.as_ref();
        !slug.is_empty()
            && slug.len() <= 160
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl FromStr for Slug {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Slug`")
    }
}

/// Leasing duration of a [`LeasingVariant`], in months.
#[derive(Clone, Copy, Debug, Display, Eq, Into, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct DurationMonths(i16);

impl DurationMonths {
    /// Creates a new [`DurationMonths`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `months` are in bounds.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(months: i16) -> Self {
        Self(months)
    }

    /// Creates a new [`DurationMonths`] if the given `months` are in bounds.
    #[must_use]
    pub fn new(months: i16) -> Option<Self> {
        Self::check(months).then_some(Self(months))
    }

    /// Checks whether the given `months` are a valid [`DurationMonths`].
    fn check(months: i16) -> bool {
        (12..=60).contains(&months)
    }
}

impl FromStr for DurationMonths {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i16>()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `DurationMonths`")
    }
}

/// Annual mileage limit of a [`LeasingVariant`], in kilometers.
#[derive(Clone, Copy, Debug, Display, Eq, Into, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct MileageLimit(i32);

impl MileageLimit {
    /// Creates a new [`MileageLimit`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `kilometers` are in bounds.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(kilometers: i32) -> Self {
        Self(kilometers)
    }

    /// Creates a new [`MileageLimit`] if the given `kilometers` are in
    /// bounds.
    #[must_use]
    pub fn new(kilometers: i32) -> Option<Self> {
        Self::check(kilometers).then_some(Self(kilometers))
    }

    /// Checks whether the given `kilometers` are a valid [`MileageLimit`].
    fn check(kilometers: i32) -> bool {
        (5_000..=100_000).contains(&kilometers)
    }
}

impl FromStr for MileageLimit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `MileageLimit`")
    }
}

/// Services included in the monthly price of a [`LeasingVariant`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
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

/// Marker of a [`DateTime`] bounding the validity of a [`LeasingVariant`].
///
/// [`DateTime`]: common::DateTime
#[derive(Clone, Copy, Debug)]
pub struct Validity;

/// [`DateTime`] bounding the validity of a [`LeasingVariant`].
///
/// [`DateTime`]: common::DateTime
pub type ValidityDateTime = DateTimeOf<(LeasingVariant, Validity)>;

/// [`DateTime`] when a [`LeasingVariant`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(LeasingVariant, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{DurationMonths, MileageLimit, Slug};

    #[test]
    fn duration_bounds() {
        assert!(DurationMonths::new(12).is_some());
        assert!(DurationMonths::new(60).is_some());
        assert!(DurationMonths::new(11).is_none());
        assert!(DurationMonths::new(61).is_none());
    }

    #[test]
    fn mileage_bounds() {
        assert!(MileageLimit::new(5_000).is_some());
        assert!(MileageLimit::new(100_000).is_some());
        assert!(MileageLimit::new(4_999).is_none());
        assert!(MileageLimit::new(100_001).is_none());
    }

    #[test]
    fn slug_validation() {
        assert!(Slug::new("48m-15000km").is_some());
        assert!(Slug::new("").is_none());
        assert!(Slug::new("No-Caps").is_none());
    }
}
