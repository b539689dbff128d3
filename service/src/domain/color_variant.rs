//! [`ColorVariant`] definitions.

use std::str::FromStr;

use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use crate::domain::{
    catalog::{color, gallery},
    offer,
};
#[cfg(doc)]
use crate::domain::offer::{Offer, OperationalLeasing};

/// Color configuration of an [`OperationalLeasing`] [`Offer`].
///
/// The `(exterior_color_id, interior_color_id)` pair is unique per [`Offer`],
/// a missing interior color being its own distinct key. At most one
/// [`ColorVariant`] per [`Offer`] is the default one.
#[derive(Clone, Debug)]
pub struct ColorVariant {
    /// ID of this [`ColorVariant`].
    pub id: Id,

    /// ID of the [`Offer`] this [`ColorVariant`] belongs to.
    pub offer_id: offer::Id,

    /// ID of the exterior color.
    pub exterior_color_id: color::Id,

    /// ID of the interior color, if specified.
    pub interior_color_id: Option<color::Id>,

    /// Display name of this [`ColorVariant`].
    pub name: DisplayName,

    /// Indicator whether this [`ColorVariant`] is the default one of its
    /// [`Offer`].
    pub is_default: bool,

    /// ID of the image gallery showing this [`ColorVariant`].
    pub gallery_id: Option<gallery::Id>,

    /// [`DateTime`] when this [`ColorVariant`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

common::define_id! {
    #[doc = "ID of a [`ColorVariant`]."]
    Id
}

/// Display name of a [`ColorVariant`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a new [`DisplayName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is valid.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`DisplayName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`DisplayName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for DisplayName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `DisplayName`")
    }
}

/// [`DateTime`] when a [`ColorVariant`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(ColorVariant, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::DisplayName;

    #[test]
    fn display_name_validation() {
        assert!(DisplayName::new("Magnetic Grey / Black Leather").is_some());
        assert!(DisplayName::new("").is_none());
        assert!(DisplayName::new(" padded ").is_none());
        assert!(DisplayName::new("x".repeat(129)).is_none());
    }
}
