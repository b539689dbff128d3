//! [`Offer`] definitions.

pub mod direct_purchase;
pub mod individual;
pub mod operational_leasing;

use std::str::FromStr;

use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{AsRef, Display};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use crate::domain::catalog::generation;

pub use self::{
    direct_purchase::DirectPurchase, individual::Individual,
    operational_leasing::OperationalLeasing,
};

/// Commercial offer of a vehicle.
///
/// An [`Offer`] is one of three products: an [`OperationalLeasing`] offer, a
/// [`DirectPurchase`] offer, or an [`Individual`] quote. The [`Kind`] is
/// fixed at creation and never changes.
#[derive(Clone, Debug, derive_more::From)]
pub enum Offer {
    #[doc(hidden)]
    OperationalLeasing(OperationalLeasing),
    #[doc(hidden)]
    DirectPurchase(DirectPurchase),
    #[doc(hidden)]
    Individual(Individual),
}

impl Offer {
    /// Returns ID of this [`Offer`].
    #[must_use]
    pub fn id(&self) -> Id {
        match self {
            Self::OperationalLeasing(o) => o.id,
            Self::DirectPurchase(o) => o.id,
            Self::Individual(o) => o.id,
        }
    }

    /// Returns [`Kind`] of this [`Offer`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::OperationalLeasing(_) => Kind::OperationalLeasing,
            Self::DirectPurchase(_) => Kind::DirectPurchase,
            Self::Individual(_) => Kind::Individual,
        }
    }

    /// Returns [`Slug`] of this [`Offer`], if any.
    #[must_use]
    pub fn slug(&self) -> Option<&Slug> {
        match self {
            Self::OperationalLeasing(o) => o.slug.as_ref(),
            Self::DirectPurchase(o) => o.slug.as_ref(),
            Self::Individual(o) => o.slug.as_ref(),
        }
    }

    /// Returns [`PublicId`] of this [`Offer`], if any.
    #[must_use]
    pub fn public_id(&self) -> Option<&PublicId> {
        match self {
            Self::OperationalLeasing(o) => o.public_id.as_ref(),
            Self::DirectPurchase(o) => o.public_id.as_ref(),
            Self::Individual(o) => o.public_id.as_ref(),
        }
    }

    /// Returns ID of the model generation this [`Offer`] is about.
    #[must_use]
    pub fn generation_id(&self) -> generation::Id {
        match self {
            Self::OperationalLeasing(o) => o.generation_id,
            Self::DirectPurchase(o) => o.generation_id,
            Self::Individual(o) => o.generation_id,
        }
    }

    /// Returns [`TotalPrice`] of this [`Offer`].
    #[must_use]
    pub fn total_price(&self) -> TotalPrice {
        match self {
            Self::OperationalLeasing(o) => o.total_price,
            Self::DirectPurchase(o) => o.total_price,
            Self::Individual(o) => o.total_price,
        }
    }

    /// Returns whether this [`Offer`] is publicly visible.
    ///
    /// `true` for every [`OperationalLeasing`] and [`DirectPurchase`]
    /// [`Offer`], `false` for every [`Individual`] one.
    #[must_use]
    pub fn is_public(&self) -> bool {
        match self {
            Self::OperationalLeasing(o) => o.is_public,
            Self::DirectPurchase(o) => o.is_public,
            Self::Individual(o) => o.is_public,
        }
    }

    /// Returns whether this [`Offer`] is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::OperationalLeasing(o) => o.is_active,
            Self::DirectPurchase(o) => o.is_active,
            Self::Individual(o) => o.is_active,
        }
    }

    /// Returns [`Description`] of this [`Offer`], if any.
    #[must_use]
    pub fn description(&self) -> Option<&Description> {
        match self {
            Self::OperationalLeasing(o) => o.description.as_ref(),
            Self::DirectPurchase(o) => o.description.as_ref(),
            Self::Individual(o) => o.description.as_ref(),
        }
    }

    /// Returns [`DateTime`] when this [`Offer`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    #[must_use]
    pub fn created_at(&self) -> CreationDateTime {
        match self {
            Self::OperationalLeasing(o) => o.created_at,
            Self::DirectPurchase(o) => o.created_at,
            Self::Individual(o) => o.created_at,
        }
    }

    /// Returns [`DateTime`] when this [`Offer`] was last updated.
    ///
    /// [`DateTime`]: common::DateTime
    #[must_use]
    pub fn updated_at(&self) -> ModificationDateTime {
        match self {
            Self::OperationalLeasing(o) => o.updated_at,
            Self::DirectPurchase(o) => o.updated_at,
            Self::Individual(o) => o.updated_at,
        }
    }
}

common::define_id! {
    #[doc = "ID of an [`Offer`]."]
    Id
}

define_kind! {
    #[doc = "Kind of an [`Offer`]."]
    enum Kind {
        #[doc = "[`OperationalLeasing`] [`Offer`]."]
        OperationalLeasing = 1,

        #[doc = "[`DirectPurchase`] [`Offer`]."]
        DirectPurchase = 2,

        #[doc = "[`Individual`] [`Offer`]."]
        Individual = 3,
    }
}

impl Kind {
    /// Returns whether an [`Offer`] of this [`Kind`] is publicly visible.
    ///
    /// [`Individual`] quotes are never public, the other two kinds always
    /// are, regardless of caller input.
    #[must_use]
    pub fn forces_public(self) -> bool {
        match self {
            Self::OperationalLeasing | Self::DirectPurchase => true,
            Self::Individual => false,
        }
    }
}

/// URL slug of an [`Offer`], globally unique across all [`Offer`]s.
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

/// ID of an [`Offer`] in the legacy system, globally unique when present.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct PublicId(String);

impl PublicId {
    /// Creates a new [`PublicId`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `id` is valid.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new [`PublicId`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`PublicId`].
    fn check(id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        id.trim() == id && !id.is_empty() && id.len() <= 64
    }
}

impl FromStr for PublicId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `PublicId`")
    }
}

/// Description of an [`Offer`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `description` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        description.trim() == description
            && !description.is_empty()
            && description.len() <= 2048
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// Internal note attached to an [`Offer`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Note(String);

impl Note {
    /// Creates a new [`Note`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `note` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(note: impl Into<String>) -> Self {
        Self(note.into())
    }

    /// Creates a new [`Note`] if the given `note` is valid.
    #[must_use]
    pub fn new(note: impl Into<String>) -> Option<Self> {
        let note = note.into();
        Self::check(&note).then_some(Self(note))
    }

    /// Checks whether the given `note` is a valid [`Note`].
    fn check(note: impl AsRef<str>) -> bool {
        let note = note.as_ref();
        note.trim() == note && !note.is_empty() && note.len() <= 512
    }
}

impl FromStr for Note {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Note`")
    }
}

/// Total price of an [`Offer`], guaranteed to be non-negative.
#[derive(AsRef, Clone, Copy, Debug, Display, Eq, PartialEq)]
pub struct TotalPrice(Money);

impl TotalPrice {
    /// Creates a new [`TotalPrice`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `price` is non-negative.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(price: Money) -> Self {
        Self(price)
    }

    /// Creates a new [`TotalPrice`] if the given `price` is non-negative.
    #[must_use]
    pub fn new(price: Money) -> Option<Self> {
        (!price.is_negative()).then_some(Self(price))
    }

    /// Returns the underlying [`Money`] amount.
    #[must_use]
    pub fn money(&self) -> Money {
        self.0
    }
}

impl TryFrom<Money> for TotalPrice {
    type Error = &'static str;

    fn try_from(price: Money) -> Result<Self, Self::Error> {
        Self::new(price).ok_or("`TotalPrice` cannot be negative")
    }
}

/// [`DateTime`] when an [`Offer`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Offer, unit::Creation)>;

/// [`DateTime`] when an [`Offer`] was last updated.
///
/// [`DateTime`]: common::DateTime
pub type ModificationDateTime = DateTimeOf<(Offer, unit::Modification)>;

#[cfg(test)]
mod spec {
    use common::{money::Currency, Money};
    use rust_decimal::Decimal;

    use super::{Slug, TotalPrice};

    #[test]
    fn slug_accepts_kebab_case() {
        assert!(Slug::new("skoda-octavia-iv-tdi").is_some());
        assert!(Slug::new("bmw-340i").is_some());
        assert!(Slug::new("a").is_some());
    }

    #[test]
    fn slug_rejects_invalid() {
        assert!(Slug::new("").is_none());
        assert!(Slug::new("-leading").is_none());
        assert!(Slug::new("trailing-").is_none());
        assert!(Slug::new("Upper-Case").is_none());
        assert!(Slug::new("with space").is_none());
        assert!(Slug::new("diakritika-š").is_none());
        assert!(Slug::new("x".repeat(161)).is_none());
    }

    #[test]
    fn total_price_rejects_negative() {
        let price = |amount: &str| Money {
            amount: amount.parse::<Decimal>().unwrap(),
            currency: Currency::Czk,
        };

        assert!(TotalPrice::new(price("0")).is_some());
        assert!(TotalPrice::new(price("899000.50")).is_some());
        assert!(TotalPrice::new(price("-0.01")).is_none());
    }
}
