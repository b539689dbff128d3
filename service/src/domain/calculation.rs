//! [`Calculation`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use crate::domain::{catalog::color, offer};
#[cfg(doc)]
use crate::domain::offer::{Individual, Offer};

/// Vehicle configuration calculated for an [`Individual`] [`Offer`].
///
/// Destroying a [`Calculation`] destroys its [`Feature`]s with it.
#[derive(Clone, Debug)]
pub struct Calculation {
    /// ID of this [`Calculation`].
    pub id: Id,

    /// ID of the [`Offer`] this [`Calculation`] belongs to.
    pub offer_id: offer::Id,

    /// [`Availability`] of the calculated vehicle.
    pub availability: Availability,

    /// ID of the exterior color, if specified.
    pub exterior_color_id: Option<color::Id>,

    /// ID of the interior color, if specified.
    pub interior_color_id: Option<color::Id>,

    /// [`DateTime`] when this [`Calculation`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

common::define_id! {
    #[doc = "ID of a [`Calculation`]."]
    Id
}

define_kind! {
    #[doc = "Availability of the vehicle a [`Calculation`] is about."]
    enum Availability {
        #[doc = "Vehicle is in stock."]
        InStock = 1,

        #[doc = "Vehicle is not available."]
        NotAvailable = 2,

        #[doc = "Vehicle can be ordered from the manufacturer."]
        OnOrder = 3,
    }
}

/// Named feature line of a [`Calculation`].
#[derive(Clone, Debug)]
pub struct Feature {
    /// ID of this [`Feature`].
    pub id: FeatureId,

    /// ID of the [`Calculation`] this [`Feature`] belongs to.
    pub calculation_id: Id,

    /// [`FeatureName`] of this [`Feature`].
    pub name: FeatureName,

    /// Free-form description of this [`Feature`].
    pub description: Option<offer::Description>,
}

common::define_id! {
    #[doc = "ID of a [`Feature`]."]
    FeatureId
}

/// Name of a [`Feature`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct FeatureName(String);

impl FeatureName {
    /// Creates a new [`FeatureName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is valid.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`FeatureName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`FeatureName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 256
    }
}

impl FromStr for FeatureName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `FeatureName`")
    }
}

/// [`DateTime`] when a [`Calculation`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Calculation, unit::Creation)>;
